//! Core domain types, errors, and constants for `dsc`.
//!
//! This crate establishes the foundational data structures and error handling
//! used by every other crate in the workspace.
//!
//! ## Key Components
//!
//! - **`errors`**: Defines the primary `Error` enum and `Result` type alias,
//!   centralizing all possible failure modes for predictable error handling.
//! - **`types`**: Secret references, lockbox records, mounts, log options and the
//!   revision specification handed to the control plane.
//! - **`constants`**: Shared static constants such as input names, endpoints and
//!   resolution limits.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result, ResultExt},
    types::*,
};
