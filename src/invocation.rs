//! The resolved values handed to a command body.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use toml::{Table, Value};

use crate::echo::{Echo, Verbosity};
use crate::error::FixinsError;
use crate::types::Values;

/// Option values after config merging, plus what the body needs to report.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    values: Values,
    config_path: Option<PathBuf>,
}

impl Invocation {
    pub fn new(values: Values, config_path: Option<PathBuf>) -> Self {
        Self {
            values,
            config_path,
        }
    }

    pub fn values(&self) -> &Values {
        &self.values
    }

    pub fn into_values(self) -> Values {
        self.values
    }

    /// The config file that was merged, if one existed.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// The raw value of option `name`, `None` if unknown or unset.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name).and_then(Option::as_ref)
    }

    /// Deserialize option `name` into `T`.
    pub fn get<T: DeserializeOwned>(&self, name: &str) -> Result<T, FixinsError> {
        self.get_opt(name)?
            .ok_or_else(|| FixinsError::ValueNotSet(name.into()))
    }

    /// Deserialize option `name` into `T`, `None` if the option has no value.
    pub fn get_opt<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, FixinsError> {
        let value = self
            .values
            .get(name)
            .ok_or_else(|| FixinsError::KeyNotFound(name.into()))?;
        value
            .clone()
            .map(|v| {
                v.try_into().map_err(|e: toml::de::Error| FixinsError::InvalidValue {
                    key: name.into(),
                    reason: e.message().to_string(),
                })
            })
            .transpose()
    }

    /// Deserialize all set values into a struct whose fields are option names.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, FixinsError> {
        let table: Table = self
            .values
            .iter()
            .filter_map(|(k, v)| v.clone().map(|v| (k.clone(), v)))
            .collect();
        Value::Table(table)
            .try_into()
            .map_err(|e: toml::de::Error| FixinsError::InvalidValue {
                key: "<options>".into(),
                reason: e.message().to_string(),
            })
    }

    /// Verbosity from the `verbose` count; a dry run is at least `Low`.
    pub fn verbosity(&self) -> Verbosity {
        let count = self
            .value("verbose")
            .and_then(Value::as_integer)
            .map(|c| u64::try_from(c).unwrap_or(0))
            .unwrap_or(0);
        let verbosity = Verbosity::from_count(count);
        if self.is_dry_run() {
            verbosity.max(Verbosity::Low)
        } else {
            verbosity
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.value("dry_run")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// An [`Echo`] on stdout/stderr at this invocation's verbosity.
    pub fn echo(&self) -> Echo {
        Echo::new(self.verbosity())
    }
}
