//! Secret references bound to container environment variables

use crate::constants::LATEST_VERSION;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One requested binding of an environment variable to a secret payload entry.
///
/// `environment_variable` is the join key back to the original request. Neither
/// `id` nor `key` is unique on its own: the same secret entry may be exposed
/// under several variables, and each binding is resolved independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretReference {
    pub environment_variable: String,
    pub id: String,
    pub version_id: String,
    pub key: String,
}

impl SecretReference {
    /// Create a new secret reference
    pub fn new(
        environment_variable: impl Into<String>,
        id: impl Into<String>,
        version_id: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            environment_variable: environment_variable.into(),
            id: id.into(),
            version_id: version_id.into(),
            key: key.into(),
        }
    }

    /// Whether the version is the `latest` placeholder
    #[must_use]
    pub fn is_latest(&self) -> bool {
        self.version_id == LATEST_VERSION
    }

    /// Copy of this reference pinned to a concrete version
    #[must_use]
    pub fn with_version(&self, version_id: impl Into<String>) -> Self {
        Self {
            version_id: version_id.into(),
            ..self.clone()
        }
    }

    /// Copy of this reference pointing at another secret id and version
    #[must_use]
    pub fn with_secret(&self, id: impl Into<String>, version_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version_id: version_id.into(),
            ..self.clone()
        }
    }
}

impl fmt::Display for SecretReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}/{}/{}",
            self.environment_variable, self.id, self.version_id, self.key
        )
    }
}
