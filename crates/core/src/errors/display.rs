//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SecretFormat { line } => {
                write!(f, "revision-secrets: Line: '{line}' has wrong format")
            }
            Error::SecretResolution { failures } => {
                write!(
                    f,
                    "Failed to resolve latest versions for secrets: {}",
                    failures.join(", ")
                )
            }
            Error::InputFormat { input, message } => {
                write!(f, "{input}: {message}")
            }
            Error::InvalidValue { input, message } => {
                write!(f, "{input} {message}")
            }
            Error::MissingInput { name } => {
                write!(f, "Input required and not supplied: {name}")
            }
            Error::Api {
                service,
                operation,
                status,
                message,
            } => {
                if message.is_empty() {
                    write!(f, "{service} {operation} failed with status {status}")
                } else {
                    write!(
                        f,
                        "{service} {operation} failed with status {status}: {message}"
                    )
                }
            }
            Error::Network { endpoint, message } => {
                write!(f, "network error for '{endpoint}': {message}")
            }
            Error::Operation { id, message } => {
                write!(f, "operation '{id}' failed: {message}")
            }
            Error::Authentication { message } => {
                write!(f, "authentication failed: {message}")
            }
            Error::Json { message, .. } => {
                write!(f, "JSON error: {message}")
            }
            Error::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "file system {} operation failed for '{}': {}",
                    operation,
                    path.display(),
                    source
                )
            }
            Error::Configuration { message } => {
                write!(f, "configuration error: {message}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregated_resolution_message_joins_failures() {
        let err = Error::secret_resolution(vec![
            "secret a has no current version".to_string(),
            "failed to resolve secret: b".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Failed to resolve latest versions for secrets: secret a has no current version, failed to resolve secret: b"
        );
    }

    #[test]
    fn secret_format_keeps_line_verbatim() {
        let err = Error::secret_format("  BROKEN=id/only ");
        assert_eq!(
            err.to_string(),
            "revision-secrets: Line: '  BROKEN=id/only ' has wrong format"
        );
    }

    #[test]
    fn input_errors_prefix_the_input_name() {
        let err = Error::input_format(
            "revision-storage-mounts",
            "Line: ':/mnt' has wrong format. Empty s3Path",
        );
        assert_eq!(
            err.to_string(),
            "revision-storage-mounts: Line: ':/mnt' has wrong format. Empty s3Path"
        );

        let err = Error::invalid_value("revision-log-options-min-level", "has unknown value");
        assert_eq!(
            err.to_string(),
            "revision-log-options-min-level has unknown value"
        );
    }

    #[test]
    fn missing_input_message() {
        let err = Error::missing_input("folder-id");
        assert_eq!(err.to_string(), "Input required and not supplied: folder-id");
    }

    #[test]
    fn api_error_without_body() {
        let err = Error::api("lockbox", "get secret", 404, "");
        assert_eq!(err.to_string(), "lockbox get secret failed with status 404");
        assert!(err.is_not_found());
    }
}
