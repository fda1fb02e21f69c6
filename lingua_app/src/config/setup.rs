//! Layered configuration loading.
//!
//! Configuration is merged from TOML layers into one table, later layers
//! taking precedence, and then deserialized as a whole.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use anyhow::{Context as _, Result};
use serde::de::DeserializeOwned;
use toml::map::Entry;
use toml::{Table, Value};

/// Provides a layered builder for deserializing configuration.
#[must_use]
pub struct Builder {
    table: Result<Table>,
}

impl Builder {
    /// Creates a new empty builder.
    pub fn new() -> Self {
        Self {
            table: Ok(Table::new()),
        }
    }

    /// Adds a layer of configuration.
    ///
    /// Layers added later take precedence over earlier ones.
    pub fn add_layer<L: Layer>(mut self, source: L) -> Self {
        self.table = self.table.and_then(|mut t| {
            source.extend_table(&mut t)?;
            Ok(t)
        });
        self
    }

    /// Deserializes the configuration from the provided layers.
    ///
    /// # Errors
    ///
    /// Returns an error if any layer failed to load or the merged table
    /// does not match the target type.
    pub fn build<T>(self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let table = self.table?;
        T::deserialize(table).context("cannot deserialize config")
    }
}

/// A configuration layer.
pub trait Layer {
    /// Extends a TOML table by this layer.
    fn extend_table(&self, table: &mut Table) -> Result<()>;
}

/// A TOML file configuration layer.
#[must_use]
pub struct File {
    path: PathBuf,
    required: bool,
}

impl File {
    /// Creates a new layer, loading TOML from the file at the given path.
    ///
    /// The file is required by default.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required: true,
        }
    }

    /// Sets whether the file is required.
    ///
    /// If it is not required and does not exist, this layer is treated as
    /// empty. If it is required and does not exist, an error is raised.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

impl Layer for File {
    fn extend_table(&self, table: &mut Table) -> Result<()> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(why) if !self.required && why.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(why) => {
                return Err(why).context(format!("cannot read config {:?}", self.path));
            },
        };

        let layer = toml::from_str(&text)
            .with_context(|| format!("config {:?} is not valid toml", self.path))?;

        merge_tables(table, layer);
        Ok(())
    }
}

/// A TOML text configuration layer, for embedded defaults.
#[must_use]
pub struct TomlText<'a> {
    text: &'a str,
}

impl<'a> TomlText<'a> {
    /// Creates a new layer, parsing the text as TOML.
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl Layer for TomlText<'_> {
    fn extend_table(&self, table: &mut Table) -> Result<()> {
        let layer = toml::from_str(self.text).context("embedded config is not valid toml")?;
        merge_tables(table, layer);
        Ok(())
    }
}

/// An environment variable configuration layer.
///
/// Only variables starting with `<prefix>__` are considered. The rest of
/// the name is lowercased, with `__` (two underscores) as the nesting
/// separator: `LINGUA__OUTPUT__PRETTY` refers to `output.pretty`.
///
/// Values are coerced to booleans or integers where they parse as such;
/// anything else is treated as a string.
#[must_use]
pub struct Env<'a> {
    prefix: &'a str,
}

impl<'a> Env<'a> {
    /// Creates a new layer with the given variable name prefix.
    pub fn new(prefix: &'a str) -> Self {
        Self { prefix }
    }
}

impl Layer for Env<'_> {
    fn extend_table(&self, table: &mut Table) -> Result<()> {
        for (key, value) in env::vars_os() {
            // non-utf8 keys cannot carry the prefix in any meaningful way
            let Ok(key) = key.into_string() else {
                continue;
            };

            let Some(path) = split_env_key(self.prefix, &key) else {
                continue;
            };

            // lossy so a mangled value still surfaces in config errors
            // instead of silently disappearing
            let value = value
                .into_string()
                .unwrap_or_else(|os| os.to_string_lossy().into_owned());

            insert_at(table, &path, parse_env_value(&value));
        }

        Ok(())
    }
}

/// Splits an environment variable name into its config path, or returns
/// [`None`] when the variable does not belong to this layer.
fn split_env_key(prefix: &str, key: &str) -> Option<Vec<String>> {
    let rest = key.strip_prefix(prefix)?.strip_prefix("__")?;
    if rest.is_empty() {
        return None;
    }

    Some(
        rest.split("__")
            .map(str::to_ascii_lowercase)
            .collect(),
    )
}

// minimal coercion so `LINGUA__OUTPUT__PRETTY=true` can reach a non-string
// field. toml itself only parses whole documents here.
fn parse_env_value(value: &str) -> Value {
    match value {
        "true" => Value::Boolean(true),
        "false" => Value::Boolean(false),
        _ => match value.parse() {
            Ok(int) => Value::Integer(int),
            Err(_) => Value::String(value.to_owned()),
        },
    }
}

fn merge_tables(target: &mut Table, consume: Table) {
    for (key, value) in consume {
        match target.entry(key) {
            Entry::Vacant(entry) => _ = entry.insert(value),
            Entry::Occupied(mut entry) => match (entry.get_mut(), value) {
                (Value::Table(a), Value::Table(b)) => merge_tables(a, b),
                (a, b) => *a = b,
            },
        }
    }
}

fn insert_at(table: &mut Table, path: &[String], value: Value) {
    let [first, path @ ..] = path else {
        return;
    };

    match table.entry(first.clone()) {
        Entry::Vacant(entry) => _ = entry.insert(nested_value(path, value)),
        Entry::Occupied(mut entry) => match entry.get_mut() {
            Value::Table(table) if !path.is_empty() => insert_at(table, path, value),
            entry => *entry = nested_value(path, value),
        },
    }
}

fn nested_value(path: &[String], value: Value) -> Value {
    match path {
        [] => value,
        [first, path @ ..] => {
            let mut table = Table::new();
            table.insert(first.clone(), nested_value(path, value));
            Value::Table(table)
        },
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Test {
        name: String,
        #[serde(default)]
        output: Output,
    }

    #[derive(Debug, Deserialize, PartialEq, Default)]
    struct Output {
        #[serde(default)]
        pretty: bool,
    }

    #[test]
    fn later_layers_win() {
        let config: Test = Builder::new()
            .add_layer(TomlText::new("name = 'default'\n[output]\npretty = true"))
            .add_layer(TomlText::new("name = 'local'"))
            .build()
            .expect("config must deserialize");

        // scalar overridden, untouched nested value kept
        assert_eq!(config.name, "local");
        assert!(config.output.pretty);
    }

    #[test]
    fn missing_optional_file_is_empty() {
        let config: Test = Builder::new()
            .add_layer(TomlText::new("name = 'default'"))
            .add_layer(File::new("does-not-exist.toml").required(false))
            .build()
            .expect("config must deserialize");

        assert_eq!(config.name, "default");
    }

    #[test]
    fn missing_required_file_is_an_error() {
        Builder::new()
            .add_layer(File::new("does-not-exist.toml"))
            .build::<Test>()
            .expect_err("required file must be reported");
    }

    #[test]
    fn env_key_splitting() {
        assert_eq!(
            split_env_key("LINGUA", "LINGUA__OUTPUT__PRETTY").as_deref(),
            Some(&["output".to_owned(), "pretty".to_owned()][..]),
        );
        assert_eq!(split_env_key("LINGUA", "LINGUA__"), None);
        assert_eq!(split_env_key("LINGUA", "PATH"), None);
        assert_eq!(split_env_key("LINGUA", "LINGUAX__A"), None);
    }

    #[test]
    fn env_values_coerce() {
        assert_eq!(parse_env_value("true"), Value::Boolean(true));
        assert_eq!(parse_env_value("42"), Value::Integer(42));
        assert_eq!(
            parse_env_value("plain text"),
            Value::String("plain text".to_owned()),
        );
    }
}
