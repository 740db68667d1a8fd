//! Memory and disk size values such as `256Mb` or `1 GB`

use dsc_core::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

const MEGABYTE: u64 = 1024 * 1024;
const GIGABYTE: u64 = 1024 * MEGABYTE;

static MEMORY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(\d+)\s*(mb|gb)$").expect("memory pattern is valid")
});

/// Parse a size into bytes; `input` names the action input for errors
pub fn parse_memory(input: &str, value: &str) -> Result<u64> {
    let unknown = || Error::invalid_value(input, format!("has unknown format: '{value}'"));

    let captures = MEMORY_PATTERN.captures(value.trim()).ok_or_else(unknown)?;
    let amount: u64 = captures[1].parse().map_err(|_| unknown())?;
    let unit = if captures[2].eq_ignore_ascii_case("gb") {
        GIGABYTE
    } else {
        MEGABYTE
    };
    amount.checked_mul(unit).ok_or_else(unknown)
}
