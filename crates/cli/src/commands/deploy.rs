//! Container deployment

use dsc_cloud::{token_source, CloudClient, CloudEndpoints, ContainerClient, LockboxClient};
use dsc_config::DeployConfig;
use dsc_core::Result;
use dsc_secrets::LatestVersionResolver;
use dsc_utils::WorkflowCommands;
use std::sync::Arc;

/// Identifiers produced by a deploy run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOutcome {
    pub container_id: String,
    pub revision_id: String,
    /// Whether the container had to be created
    pub created: bool,
}

/// Obtain an IAM token and mask it in the job log
pub(crate) async fn authenticate(
    config: &DeployConfig,
    endpoints: CloudEndpoints,
    workflow: &WorkflowCommands,
) -> Result<CloudClient> {
    tracing::debug!(credentials = config.credentials.kind(), "Obtaining IAM token");
    let token = token_source(&config.credentials, &endpoints)?.token().await?;
    workflow.add_mask(&token);
    CloudClient::new(endpoints, token)
}

/// Pin `latest` secret versions with the configured fan-out
pub(crate) async fn resolve_secrets(
    client: &CloudClient,
    config: &DeployConfig,
) -> Result<Vec<dsc_core::SecretReference>> {
    let lookup = Arc::new(LockboxClient::new(client.clone()));
    LatestVersionResolver::new(lookup, config.folder_id.as_str())
        .with_max_concurrent(config.secrets_concurrency)
        .resolve(config.revision.secrets.clone())
        .await
}

/// Run the full deploy flow.
///
/// `repository` is the `owner/repo` recorded in the description of newly
/// created containers.
pub async fn deploy(
    mut config: DeployConfig,
    endpoints: CloudEndpoints,
    workflow: &WorkflowCommands,
    repository: Option<&str>,
) -> Result<DeployOutcome> {
    tracing::info!(
        folder_id = %config.folder_id,
        container = %config.container_name,
        "Deploying container revision"
    );

    let client = authenticate(&config, endpoints, workflow).await?;
    let containers = ContainerClient::new(client.clone());

    let (container_id, created) = match containers
        .find_by_name(&config.folder_id, &config.container_name)
        .await?
    {
        Some(container) => {
            tracing::info!(container_id = %container.id, "Container already exists");
            (container.id, false)
        }
        None => {
            tracing::info!(container = %config.container_name, "Container not found, creating it");
            let description = repository
                .map(|repo| format!("Created from: {repo}"))
                .unwrap_or_default();
            let container = containers
                .create(&config.folder_id, &config.container_name, &description)
                .await?;
            tracing::info!(container_id = %container.id, "Container created");
            (container.id, true)
        }
    };
    workflow.set_output("id", &container_id)?;

    config.revision.secrets = resolve_secrets(&client, &config).await?;

    tracing::info!(container_id = %container_id, "Creating revision");
    let revision = containers
        .deploy_revision(&container_id, &config.revision)
        .await?;
    tracing::info!(revision_id = %revision.id, "Revision created");
    workflow.set_output("rev", &revision.id)?;

    if config.public {
        containers.set_public_access(&container_id).await?;
        tracing::info!(container_id = %container_id, "Container is publicly invokable");
    }

    Ok(DeployOutcome {
        container_id,
        revision_id: revision.id,
        created,
    })
}
