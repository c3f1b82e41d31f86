#[cfg(feature = "cli")]
pub mod cli;
pub mod runtime_options;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use runtime_options::RuntimeOptions;
