use super::deploy::{authenticate, resolve_secrets};
use dsc_cloud::CloudEndpoints;
use dsc_config::DeployConfig;
use dsc_core::{Result, ResultExt};
use dsc_utils::WorkflowCommands;

/// Print the pinned secret references as JSON on stdout
pub async fn execute(
    config: DeployConfig,
    endpoints: CloudEndpoints,
    workflow: &WorkflowCommands,
    pretty: bool,
) -> Result<()> {
    let client = authenticate(&config, endpoints, workflow).await?;
    let resolved = resolve_secrets(&client, &config).await?;

    let json = if pretty {
        serde_json::to_string_pretty(&resolved)
    } else {
        serde_json::to_string(&resolved)
    }
    .context("failed to encode resolved secrets")?;
    println!("{json}");
    Ok(())
}
