//! Everything a deploy run needs, validated up front

use crate::{credentials::parse_credentials, inputs::ActionInputs, names, revision::parse_revision};
use dsc_core::{Credentials, Error, Result, RevisionSpec, DEFAULT_SECRETS_CONCURRENCY};

/// Validated deploy configuration
#[derive(Debug, Clone)]
pub struct DeployConfig {
    pub credentials: Credentials,
    pub folder_id: String,
    pub container_name: String,
    /// Grant unauthenticated invocation after deploying
    pub public: bool,
    pub revision: RevisionSpec,
    /// Upper bound on concurrent by-id secret lookups
    pub secrets_concurrency: usize,
}

impl DeployConfig {
    /// Parse and validate every input. No network access happens here.
    pub fn from_inputs(inputs: &ActionInputs) -> Result<Self> {
        let credentials = parse_credentials(inputs)?;
        let folder_id = inputs.get_required_input(names::FOLDER_ID)?;
        let container_name = inputs.get_required_input(names::CONTAINER_NAME)?;
        let public = inputs.get_boolean_input(names::PUBLIC, false)?;
        let revision = parse_revision(inputs)?;

        let secrets_concurrency =
            inputs.get_parsed_input(names::SECRETS_CONCURRENCY, DEFAULT_SECRETS_CONCURRENCY)?;
        if secrets_concurrency == 0 {
            return Err(Error::invalid_value(
                names::SECRETS_CONCURRENCY,
                "must be at least 1",
            ));
        }

        Ok(Self {
            credentials,
            folder_id,
            container_name,
            public,
            revision,
            secrets_concurrency,
        })
    }
}
