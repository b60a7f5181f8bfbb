pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use config::{toml_config::TomlConfig, CliConfig};
pub use server::{create_router, AppState};
pub use utils::error::{AdvisorError, Result};
