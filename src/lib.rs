pub mod config;
pub mod core;
pub mod utils;

pub use crate::config::catalog::{Application, Catalog, Service};
pub use crate::config::CliConfig;
pub use crate::core::{InvocationReport, Invoker};
pub use crate::utils::error::{ProbeError, Result};
