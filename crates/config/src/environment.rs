//! `KEY=VALUE` environment lines

use crate::names;
use dsc_core::{Error, Result};
use std::collections::BTreeMap;

/// Build the container environment; later lines win on duplicate keys
pub fn parse_environment<S: AsRef<str>>(lines: &[S]) -> Result<BTreeMap<String, String>> {
    let mut environment = BTreeMap::new();
    for line in lines {
        let line = line.as_ref();
        let (key, value) = line
            .split_once('=')
            .map(|(key, value)| (key.trim(), value.trim()))
            .filter(|(key, _)| !key.is_empty())
            .ok_or_else(|| {
                Error::input_format(
                    names::ENV,
                    format!("Line: '{line}' has wrong format. Expected KEY=VALUE"),
                )
            })?;
        environment.insert(key.to_string(), value.to_string());
    }
    Ok(environment)
}
