use clap::Parser;
use dsc::Commands;
use dsc_utils::WorkflowCommands;

#[derive(Parser)]
#[command(name = "deploy-serverless-container")]
#[command(about = "Deploy a serverless container revision from CI inputs", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    dsc_utils::tracing::init().map_err(|e| eyre::eyre!("failed to initialize logging: {e}"))?;

    let cli = Cli::parse();

    // The runner invokes the binary without arguments
    let command = cli.command.unwrap_or(Commands::Deploy);
    if let Err(err) = command.execute().await {
        WorkflowCommands::from_env().error(&err.to_string());
        return Err(err.into());
    }
    Ok(())
}
