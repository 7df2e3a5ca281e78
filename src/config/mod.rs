#[cfg(feature = "cli")]
pub mod cli;
pub mod endpoint;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use endpoint::Endpoint;
pub use toml_config::ClientConfig;
