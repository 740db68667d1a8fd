//! Revision log options

use crate::{inputs::ActionInputs, names};
use dsc_core::{Error, LogDestination, LogLevel, LogOptions, Result};

/// Blank means `LEVEL_UNSPECIFIED`; otherwise a numeric code or a level name
pub fn parse_log_min_level(value: &str) -> Result<LogLevel> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(LogLevel::LevelUnspecified);
    }
    value
        .parse::<u8>()
        .ok()
        .and_then(LogLevel::from_code)
        .or_else(|| LogLevel::from_name(value))
        .ok_or_else(|| Error::invalid_value(names::LOG_MIN_LEVEL, "has unknown value"))
}

/// `None` when no log option input is set
pub fn parse_log_options(inputs: &ActionInputs) -> Result<Option<LogOptions>> {
    let disabled = inputs.get_boolean_input(names::LOG_DISABLED, false)?;
    let log_group_id = inputs.get_input(names::LOG_GROUP_ID);
    let folder_id = inputs.get_input(names::LOG_FOLDER_ID);
    let min_level = inputs.get_input(names::LOG_MIN_LEVEL);

    if !disabled && log_group_id.is_none() && folder_id.is_none() && min_level.is_none() {
        return Ok(None);
    }

    let destination = match (log_group_id, folder_id) {
        (Some(_), Some(_)) => {
            return Err(Error::invalid_value(
                names::LOG_FOLDER_ID,
                format!("cannot be combined with {}", names::LOG_GROUP_ID),
            ))
        }
        (Some(group), None) => Some(LogDestination::LogGroupId(group)),
        (None, Some(folder)) => Some(LogDestination::FolderId(folder)),
        (None, None) => None,
    };

    Ok(Some(LogOptions {
        disabled,
        destination,
        min_level: parse_log_min_level(min_level.as_deref().unwrap_or_default())?,
    }))
}
