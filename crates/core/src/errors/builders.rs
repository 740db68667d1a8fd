//! Builder methods for creating errors with context

use super::types::Error;
use std::path::PathBuf;

impl Error {
    /// Create a secret reference format error for the offending line
    #[must_use]
    pub fn secret_format(line: impl Into<String>) -> Self {
        Error::SecretFormat { line: line.into() }
    }

    /// Create an aggregated secret resolution error
    #[must_use]
    pub fn secret_resolution(failures: Vec<String>) -> Self {
        Error::SecretResolution { failures }
    }

    /// Create an input format error
    #[must_use]
    pub fn input_format(input: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InputFormat {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Create an error for an input value outside the accepted set
    #[must_use]
    pub fn invalid_value(input: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidValue {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Create a missing required input error
    #[must_use]
    pub fn missing_input(name: impl Into<String>) -> Self {
        Error::MissingInput { name: name.into() }
    }

    /// Create a control plane API error
    #[must_use]
    pub fn api(
        service: impl Into<String>,
        operation: impl Into<String>,
        status: u16,
        message: impl Into<String>,
    ) -> Self {
        Error::Api {
            service: service.into(),
            operation: operation.into(),
            status,
            message: message.into(),
        }
    }

    /// Create a network error
    #[must_use]
    pub fn network(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Network {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Create a failed operation error
    #[must_use]
    pub fn operation(id: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Operation {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Create an authentication error
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Error::Authentication {
            message: message.into(),
        }
    }

    /// Create a file system error with context
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }
}
