//! Defines a `"default"` [`PatternEncoder`].
//!
//! This just serves to avoid repeating the pattern in every appender of
//! the configuration.

use log4rs::config::Deserialize;
use log4rs::encode::Encode;
use log4rs::encode::pattern::PatternEncoder;

fn yes() -> bool {
    true
}

#[derive(Debug, serde::Deserialize)]
pub struct DefaultPatternConfig {
    /// Whether to include a timestamp. Turn this off when an outer
    /// supervisor already timestamps the stream.
    #[serde(default = "yes")]
    time: bool,
    /// Whether to include the log target.
    #[serde(default = "yes")]
    target: bool,
}

pub struct DefaultPatternDeserializer;

impl Deserialize for DefaultPatternDeserializer {
    type Trait = dyn Encode;
    type Config = DefaultPatternConfig;

    fn deserialize(
        &self,
        config: Self::Config,
        _deserializers: &log4rs::config::Deserializers,
    ) -> anyhow::Result<Box<Self::Trait>> {
        let pattern = match (config.time, config.target) {
            (true, true) => "[{d(%Y-%m-%d %H:%M:%S)(utc)} {h({l:<5})} {t}] {m}{n}",
            (true, false) => "[{d(%Y-%m-%d %H:%M:%S)(utc)} {h({l:<5})}] {m}{n}",
            (false, true) => "[{h({l:<5})} {t}] {m}{n}",
            (false, false) => "[{h({l:<5})}] {m}{n}",
        };

        Ok(Box::new(PatternEncoder::new(pattern)))
    }
}
