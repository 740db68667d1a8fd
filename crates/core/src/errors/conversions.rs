//! Conversion implementations for error types

use super::types::Error;
use std::path::PathBuf;

// Conversion implementations (keeping these as they provide more context than thiserror's #[from])
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::FileSystem {
            path: PathBuf::new(),
            operation: "unknown".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json {
            message: error.to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        let endpoint = error
            .url()
            .map(|url| url.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        Error::Network {
            endpoint,
            message: error.to_string(),
        }
    }
}
