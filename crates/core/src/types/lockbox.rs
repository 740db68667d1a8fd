//! Records returned by the secret store

use serde::{Deserialize, Serialize};

/// A secret as described by the secret store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LockboxSecret {
    pub id: String,
    pub folder_id: String,
    /// Unique within a folder
    pub name: String,
    pub description: String,
    pub current_version: Option<SecretVersion>,
}

impl LockboxSecret {
    /// Identifier of the active version, if the secret has one
    #[must_use]
    pub fn current_version_id(&self) -> Option<&str> {
        self.current_version
            .as_ref()
            .map(|version| version.id.as_str())
            .filter(|id| !id.is_empty())
    }
}

/// A single immutable secret version
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecretVersion {
    pub id: String,
    pub secret_id: String,
    pub description: String,
}

/// One page of a folder listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecretPage {
    pub secrets: Vec<LockboxSecret>,
    /// Empty on the last page
    pub next_page_token: String,
}

impl SecretPage {
    /// Token for the following page, `None` on the last one
    #[must_use]
    pub fn next_page(&self) -> Option<&str> {
        Some(self.next_page_token.as_str()).filter(|token| !token.is_empty())
    }
}
