//! Revision inputs

use crate::{
    environment::parse_environment, inputs::ActionInputs, log_options::parse_log_options,
    memory::parse_memory, mounts::parse_mounts, names,
};
use dsc_core::{Resources, Result, RevisionSpec};
use dsc_secrets::parse_secret_references;

const DEFAULT_MEMORY: &str = "128Mb";
const DEFAULT_EXECUTION_TIMEOUT_SECS: u64 = 3;
const DEFAULT_CONCURRENCY: u64 = 1;

/// Assemble the revision from inputs; `latest` secret versions stay unresolved
pub fn parse_revision(inputs: &ActionInputs) -> Result<RevisionSpec> {
    let defaults = Resources::default();
    let memory = inputs
        .get_input(names::MEMORY)
        .unwrap_or_else(|| DEFAULT_MEMORY.to_string());

    let resources = Resources {
        memory: parse_memory(names::MEMORY, &memory)?,
        cores: inputs.get_parsed_input(names::CORES, defaults.cores)?,
        core_fraction: inputs.get_parsed_input(names::CORE_FRACTION, defaults.core_fraction)?,
    };

    Ok(RevisionSpec {
        image_url: inputs.get_required_input(names::IMAGE_URL)?,
        working_dir: inputs.get_input(names::WORKING_DIR),
        service_account_id: inputs.get_input(names::SERVICE_ACCOUNT_ID),
        resources,
        execution_timeout_secs: inputs
            .get_parsed_input(names::EXECUTION_TIMEOUT, DEFAULT_EXECUTION_TIMEOUT_SECS)?,
        concurrency: inputs.get_parsed_input(names::CONCURRENCY, DEFAULT_CONCURRENCY)?,
        command: inputs.get_multiline_input(names::COMMANDS),
        args: inputs.get_multiline_input(names::ARGS),
        environment: parse_environment(&inputs.get_multiline_input(names::ENV))?,
        secrets: parse_secret_references(inputs.get_multiline_input(names::SECRETS))?,
        log_options: parse_log_options(inputs)?,
        mounts: parse_mounts(
            &inputs.get_multiline_input(names::EPHEMERAL_MOUNTS),
            &inputs.get_multiline_input(names::STORAGE_MOUNTS),
        )?,
    })
}
