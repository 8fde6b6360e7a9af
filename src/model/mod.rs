//! Model domain module - the immutable description of a client's operations
//!
//! These types are produced by an upstream specification parser (or loaded
//! from its serialized output) and are only read during resolution.

pub mod client;
pub mod operation;
pub mod traits;
pub mod types;

pub use client::*;
pub use operation::*;
pub use traits::*;
pub use types::*;
