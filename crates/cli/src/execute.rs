use crate::commands::{deploy, secrets, validate, Commands};
use dsc_cloud::CloudEndpoints;
use dsc_config::{ActionInputs, DeployConfig};
use dsc_core::{Result, GITHUB_REPOSITORY_VAR};
use dsc_utils::WorkflowCommands;

impl Commands {
    pub async fn execute(self) -> Result<()> {
        let inputs = ActionInputs::from_env();
        let config = DeployConfig::from_inputs(&inputs)?;

        match self {
            Commands::Deploy => {
                let workflow = WorkflowCommands::from_env();
                let repository = std::env::var(GITHUB_REPOSITORY_VAR).ok();
                deploy::deploy(
                    config,
                    CloudEndpoints::from_env(),
                    &workflow,
                    repository.as_deref(),
                )
                .await
                .map(|_| ())
            }
            Commands::ResolveSecrets { pretty } => {
                let workflow = WorkflowCommands::from_env();
                secrets::execute(config, CloudEndpoints::from_env(), &workflow, pretty).await
            }
            Commands::Validate => validate::execute(&config),
        }
    }
}
