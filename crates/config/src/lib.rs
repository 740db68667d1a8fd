//! Action inputs and deploy configuration for dsc
//!
//! Inputs arrive as `INPUT_*` environment variables. This crate reads them,
//! parses the line-oriented formats (memory sizes, mounts, environment,
//! log options, credentials) and assembles a [`DeployConfig`].

pub mod credentials;
pub mod deploy;
pub mod environment;
pub mod inputs;
pub mod log_options;
pub mod memory;
pub mod mounts;
pub mod revision;

pub use credentials::parse_credentials;
pub use deploy::DeployConfig;
pub use environment::parse_environment;
pub use inputs::ActionInputs;
pub use log_options::{parse_log_min_level, parse_log_options};
pub use memory::parse_memory;
pub use mounts::{parse_ephemeral_mount, parse_mounts, parse_storage_mount};
pub use revision::parse_revision;

/// Input names
pub mod names {
    pub const SA_JSON_CREDENTIALS: &str = "yc-sa-json-credentials";
    pub const IAM_TOKEN: &str = "yc-iam-token";
    pub const SA_ID: &str = "yc-sa-id";
    pub const FOLDER_ID: &str = "folder-id";
    pub const CONTAINER_NAME: &str = "container-name";
    pub const PUBLIC: &str = "public";
    pub const IMAGE_URL: &str = "revision-image-url";
    pub const WORKING_DIR: &str = "revision-working-dir";
    pub const SERVICE_ACCOUNT_ID: &str = "revision-service-account-id";
    pub const CORES: &str = "revision-cores";
    pub const MEMORY: &str = "revision-memory";
    pub const CORE_FRACTION: &str = "revision-core-fraction";
    pub const CONCURRENCY: &str = "revision-concurrency";
    pub const EXECUTION_TIMEOUT: &str = "revision-execution-timeout";
    pub const COMMANDS: &str = "revision-commands";
    pub const ARGS: &str = "revision-args";
    pub const ENV: &str = "revision-env";
    pub const SECRETS: &str = "revision-secrets";
    pub const SECRETS_CONCURRENCY: &str = "revision-secrets-concurrency";
    pub const LOG_DISABLED: &str = "revision-log-options-disabled";
    pub const LOG_GROUP_ID: &str = "revision-log-options-log-group-id";
    pub const LOG_FOLDER_ID: &str = "revision-log-options-folder-id";
    pub const LOG_MIN_LEVEL: &str = "revision-log-options-min-level";
    pub const STORAGE_MOUNTS: &str = "revision-storage-mounts";
    pub const EPHEMERAL_MOUNTS: &str = "revision-ephemeral-mounts";
}
