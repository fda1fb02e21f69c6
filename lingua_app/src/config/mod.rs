use log4rs::config::RawConfig;
use serde::Deserialize;

pub mod setup;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub log: RawConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Pretty-print the emitted registry JSON.
    #[serde(default)]
    pub pretty: bool,
}
