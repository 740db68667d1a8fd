//! Logging and workflow command helpers for dsc

pub mod tracing;
pub mod workflow;

pub use workflow::WorkflowCommands;
