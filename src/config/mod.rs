pub mod toml_config;

use crate::utils::error::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};
use toml_config::TomlConfig;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "destination-advisor")]
#[command(about = "Travel destination advisor backed by concept search and tradeoff analytics")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Listening port (overrides the configuration file)
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    /// Validate configuration and datasets, then exit
    #[arg(long)]
    pub check: bool,
}

impl CliConfig {
    /// 載入設定檔；未指定時使用預設值
    pub fn load_settings(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => TomlConfig::from_file(path),
            None => Ok(TomlConfig::default()),
        }
    }
}
