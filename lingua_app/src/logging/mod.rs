use log4rs::config::{Deserializers, RawConfig};

mod default_pattern;

/// Initializes the global logger from the raw `log` config section.
///
/// # Errors
///
/// Returns an error if an appender fails to deserialize or the resulting
/// config is rejected.
pub fn init(config: RawConfig) -> anyhow::Result<()> {
    let (appenders, errors) = config.appenders_lossy(&deserializers());
    if !errors.is_empty() {
        return Err(errors.into());
    }

    let config = log4rs::Config::builder()
        .appenders(appenders)
        .loggers(config.loggers())
        .build(config.root())?;

    log4rs::init_config(config)?;
    Ok(())
}

fn deserializers() -> Deserializers {
    let mut d = Deserializers::new();
    d.insert("default", default_pattern::DefaultPatternDeserializer);
    d
}
