//! Extension traits for error handling

use super::types::{Error, Result};

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to a Result
    fn context(self, message: impl Into<String>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let base_error = e.into();
            Error::Configuration {
                message: format!("{}: {}", message.into(), base_error),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_prefixes_the_source_error() {
        let parsed: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err = parsed.context("yc-sa-json-credentials").unwrap_err();

        assert!(matches!(err, Error::Configuration { .. }));
        assert!(err.to_string().contains("yc-sa-json-credentials: JSON error:"));
    }
}
