//! Infrastructure layer - concrete implementations of domain ports

pub mod loader;

pub use loader::*;
