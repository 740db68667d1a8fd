use dsc_config::DeployConfig;
use dsc_core::Result;

/// Report what a deploy would do; inputs were already validated on load
pub fn execute(config: &DeployConfig) -> Result<()> {
    let revision = &config.revision;
    tracing::info!(
        folder_id = %config.folder_id,
        container = %config.container_name,
        credentials = config.credentials.kind(),
        image = %revision.image_url,
        memory = revision.resources.memory,
        secrets = revision.secrets.len(),
        latest_secrets = revision.latest_secret_count(),
        mounts = revision.mounts.len(),
        public = config.public,
        "Inputs are valid"
    );
    Ok(())
}
