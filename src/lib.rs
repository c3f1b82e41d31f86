pub mod config;
pub mod service;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::RuntimeOptions;
pub use service::*;
pub use utils::error::{Result, UtilError};
