use clap::Subcommand;

pub mod deploy;
pub mod secrets;
pub mod validate;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Find or create the container and deploy a new revision (default)
    Deploy,

    /// Pin `latest` secret versions and print the resulting references as JSON
    ResolveSecrets {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Parse and validate the inputs without calling the cloud
    Validate,
}
