//! The revision specification handed to the deploy call

use super::{LogOptions, Mount, SecretReference};
use serde::Serialize;
use std::collections::BTreeMap;

/// Compute resources of a revision
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resources {
    /// Bytes
    pub memory: u64,
    pub cores: u64,
    pub core_fraction: u64,
}

impl Default for Resources {
    fn default() -> Self {
        Self {
            memory: 128 * 1024 * 1024,
            cores: 1,
            core_fraction: 100,
        }
    }
}

/// Everything needed to deploy one immutable revision
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionSpec {
    pub image_url: String,
    pub working_dir: Option<String>,
    pub service_account_id: Option<String>,
    pub resources: Resources,
    pub execution_timeout_secs: u64,
    pub concurrency: u64,
    pub command: Vec<String>,
    pub args: Vec<String>,
    pub environment: BTreeMap<String, String>,
    pub secrets: Vec<SecretReference>,
    pub log_options: Option<LogOptions>,
    pub mounts: Vec<Mount>,
}

impl RevisionSpec {
    /// Number of secret references still pointing at `latest`
    #[must_use]
    pub fn latest_secret_count(&self) -> usize {
        self.secrets.iter().filter(|s| s.is_latest()).count()
    }
}
