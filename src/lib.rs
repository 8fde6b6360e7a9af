//! clientbind resolves HTTP operation descriptions into the binding facts a
//! client-code emitter needs: signatures, URL plans, response and exception
//! types, input construction plans and the method set each client exposes.
#![deny(unsafe_code)]

pub mod binding;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod model;
pub mod utils;

pub use binding::{ResolutionError, ResolvedBinding, resolve, resolve_client};
pub use config::ResolverConfig;
pub use error::{Error, Result};
