// Re-export command modules
pub mod commands;
pub mod execute;

pub use commands::deploy::{deploy, DeployOutcome};
pub use commands::Commands;
