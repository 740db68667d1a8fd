//! Named action inputs

use dsc_core::{Error, Result, INPUT_VAR_PREFIX};
use std::collections::HashMap;
use std::ffi::OsString;
use std::str::FromStr;

const TRUE_VALUES: [&str; 3] = ["true", "True", "TRUE"];
const FALSE_VALUES: [&str; 3] = ["false", "False", "FALSE"];

/// Snapshot of the inputs passed to the action
#[derive(Debug, Clone, Default)]
pub struct ActionInputs {
    values: HashMap<String, String>,
}

impl ActionInputs {
    /// Capture every `INPUT_*` variable of the current process
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars_os())
    }

    /// Keep the `INPUT_*` entries of a raw variable listing.
    ///
    /// Entries whose name or value is not valid UTF-8 are skipped.
    fn from_vars(vars: impl IntoIterator<Item = (OsString, OsString)>) -> Self {
        let values = vars
            .into_iter()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .filter(|(key, _)| key.starts_with(INPUT_VAR_PREFIX))
            .collect();
        Self { values }
    }

    /// Build inputs from `(input name, value)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let values = pairs
            .into_iter()
            .map(|(name, value)| (variable_name(name.as_ref()), value.into()))
            .collect();
        Self { values }
    }

    /// Trimmed value, `None` when unset or blank
    #[must_use]
    pub fn get_input(&self, name: &str) -> Option<String> {
        self.values
            .get(&variable_name(name))
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    pub fn get_required_input(&self, name: &str) -> Result<String> {
        self.get_input(name)
            .ok_or_else(|| Error::missing_input(name))
    }

    /// Non-empty trimmed lines of a multiline input
    #[must_use]
    pub fn get_multiline_input(&self, name: &str) -> Vec<String> {
        self.values
            .get(&variable_name(name))
            .map(|value| {
                value
                    .split('\n')
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// YAML 1.2 core schema booleans; blank means `default`
    pub fn get_boolean_input(&self, name: &str, default: bool) -> Result<bool> {
        let Some(value) = self.get_input(name) else {
            return Ok(default);
        };
        if TRUE_VALUES.contains(&value.as_str()) {
            Ok(true)
        } else if FALSE_VALUES.contains(&value.as_str()) {
            Ok(false)
        } else {
            Err(Error::invalid_value(
                name,
                format!(
                    "has unknown value '{value}'. Possible values: {}",
                    TRUE_VALUES
                        .iter()
                        .chain(FALSE_VALUES.iter())
                        .copied()
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            ))
        }
    }

    /// Parse a scalar input, falling back to `default` when blank
    pub fn get_parsed_input<T: FromStr>(&self, name: &str, default: T) -> Result<T> {
        match self.get_input(name) {
            None => Ok(default),
            Some(value) => value
                .parse()
                .map_err(|_| Error::invalid_value(name, format!("has invalid value '{value}'"))),
        }
    }
}

/// `INPUT_` plus the upper-cased name with spaces replaced by `_`
fn variable_name(name: &str) -> String {
    format!("{INPUT_VAR_PREFIX}{}", name.replace(' ', "_").to_uppercase())
}
