//! Control plane endpoints

use dsc_core::{
    DEFAULT_AUTH_ENDPOINT, DEFAULT_CONTAINERS_ENDPOINT, DEFAULT_IAM_ENDPOINT,
    DEFAULT_LOCKBOX_ENDPOINT, DEFAULT_OPERATION_ENDPOINT, DSC_AUTH_ENDPOINT_VAR,
    DSC_CONTAINERS_ENDPOINT_VAR, DSC_IAM_ENDPOINT_VAR, DSC_LOCKBOX_ENDPOINT_VAR,
    DSC_OPERATION_ENDPOINT_VAR,
};

/// Base URLs of every service the action talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudEndpoints {
    pub lockbox: String,
    pub containers: String,
    pub operation: String,
    pub iam: String,
    pub auth: String,
}

impl Default for CloudEndpoints {
    fn default() -> Self {
        Self {
            lockbox: DEFAULT_LOCKBOX_ENDPOINT.to_string(),
            containers: DEFAULT_CONTAINERS_ENDPOINT.to_string(),
            operation: DEFAULT_OPERATION_ENDPOINT.to_string(),
            iam: DEFAULT_IAM_ENDPOINT.to_string(),
            auth: DEFAULT_AUTH_ENDPOINT.to_string(),
        }
    }
}

impl CloudEndpoints {
    /// Defaults, overridden by `DSC_*_ENDPOINT` variables when set
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults, overridden by whatever `lookup` returns for the `DSC_*_ENDPOINT` names
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let pick = |var: &str, default: String| {
            lookup(var)
                .map(|value| value.trim().trim_end_matches('/').to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or(default)
        };
        let defaults = Self::default();
        Self {
            lockbox: pick(DSC_LOCKBOX_ENDPOINT_VAR, defaults.lockbox),
            containers: pick(DSC_CONTAINERS_ENDPOINT_VAR, defaults.containers),
            operation: pick(DSC_OPERATION_ENDPOINT_VAR, defaults.operation),
            iam: pick(DSC_IAM_ENDPOINT_VAR, defaults.iam),
            auth: pick(DSC_AUTH_ENDPOINT_VAR, defaults.auth),
        }
    }

    /// Point every service at one base URL (used against local mock servers)
    pub fn single(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            lockbox: base.clone(),
            containers: base.clone(),
            operation: base.clone(),
            iam: base.clone(),
            auth: base,
        }
    }
}
