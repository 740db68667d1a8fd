//! Core error type definitions

use std::path::PathBuf;

/// Result type alias for dsc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for dsc operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A `revision-secrets` line that does not match `ENV=ID/VERSION/KEY`
    SecretFormat { line: String },

    /// One or more `latest` references could not be pinned to a concrete version
    SecretResolution { failures: Vec<String> },

    /// Malformed line or value of an action input
    InputFormat { input: String, message: String },

    /// An action input value outside the accepted set
    InvalidValue { input: String, message: String },

    /// A required action input was not supplied
    MissingInput { name: String },

    /// The control plane answered with a non-success status
    Api {
        service: String,
        operation: String,
        status: u16,
        message: String,
    },

    /// Transport-level failures talking to an endpoint
    Network { endpoint: String, message: String },

    /// A long-running operation finished with an error
    Operation { id: String, message: String },

    /// Token exchange or credential problems
    Authentication { message: String },

    /// JSON serialization/deserialization errors
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// File system operations
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    Configuration { message: String },
}

impl Error {
    /// Whether the control plane reported that the resource does not exist
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api { status: 404, .. })
    }
}
