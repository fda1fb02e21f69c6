mod config;
mod locales;
mod logging;
mod system_info;

use std::io::{self, Write as _};

use anyhow::{Context as _, Result};

use crate::config::AppConfig;
use crate::system_info::SystemInfo;

fn main() -> Result<()> {
    // run the program and make sure the logger sees the outcome
    let res = run();
    if let Err(why) = &res {
        log::error!("Exiting due to error: {why:?}");
    }

    log::logger().flush();
    res
}

fn run() -> Result<()> {
    let config = build_config()?;
    logging::init(config.log)?;

    log::info!("Lingua Tools locale aggregator v{}", env!("CARGO_PKG_VERSION"));

    match serde_json::to_string(&SystemInfo::gather()) {
        Ok(info) => log::debug!(target: "lingua_app::sys", "host: {info}"),
        Err(why) => log::debug!(target: "lingua_app::sys", "host info unavailable: {why}"),
    }

    // the registry is built exactly once and owned here for the rest of
    // the process lifetime
    let registry = locales::build().context("failed to build locale registry")?;

    let tags: Vec<_> = registry.tags().map(ToString::to_string).collect();
    log::info!("aggregated {} locale packs: {}", registry.len(), tags.join(", "));

    emit(&registry, config.output.pretty).context("failed to write registry")
}

/// Writes the aggregated registry to stdout, in sorted tag order.
///
/// Logging goes to stderr, so stdout stays machine-readable.
fn emit(registry: &locale_registry::LocaleRegistry, pretty: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut stdout, registry)?;
    } else {
        serde_json::to_writer(&mut stdout, registry)?;
    }

    writeln!(stdout)?;
    Ok(())
}

fn build_config() -> Result<AppConfig> {
    use crate::config::setup::{Builder, Env, File, TomlText};

    Builder::new()
        .add_layer(TomlText::new(include_str!("../assets/default_config.toml")))
        .add_layer(File::new("lingua_app.toml").required(false))
        .add_layer(Env::new("LINGUA"))
        .build()
}
