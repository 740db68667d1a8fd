//! Parser for `ENV=ID/VERSION/KEY` secret reference lines

use dsc_core::{Error, Result, SecretReference};
use once_cell::sync::Lazy;
use regex::Regex;

static SECRET_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^=\s]+)\s*=\s*([^/\s]+)/([^/\s]+)/([^/\s]+)$")
        .expect("secret reference pattern is valid")
});

/// Parse a single line.
///
/// Blank lines and `#` comments yield `Ok(None)`. Anything after the first `#`
/// is treated as an inline comment. The error carries the line verbatim.
pub fn parse_secret_line(line: &str) -> Result<Option<SecretReference>> {
    let content = match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
    .trim();

    if content.is_empty() {
        return Ok(None);
    }

    let captures = SECRET_LINE
        .captures(content)
        .ok_or_else(|| Error::secret_format(line))?;

    Ok(Some(SecretReference::new(
        &captures[1],
        &captures[2],
        &captures[3],
        &captures[4],
    )))
}

/// Parse every line in order, keeping duplicates.
///
/// Stops at the first malformed line.
pub fn parse_secret_references<I, S>(lines: I) -> Result<Vec<SecretReference>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut references = Vec::new();
    for line in lines {
        if let Some(reference) = parse_secret_line(line.as_ref())? {
            references.push(reference);
        }
    }
    Ok(references)
}
