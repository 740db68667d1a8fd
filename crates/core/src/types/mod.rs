//! Core domain types for `dsc`.
//!
//! ## Organization
//!
//! - **`credentials`**: Service account keys and other IAM token sources
//! - **`secrets`**: Secret references bound to container environment variables
//! - **`lockbox`**: Records returned by the secret store
//! - **`mounts`**: Ephemeral disk and object storage mounts
//! - **`logging`**: Revision log routing options
//! - **`revision`**: The full revision specification handed to the deploy call

pub mod credentials;
pub mod lockbox;
pub mod logging;
pub mod mounts;
pub mod revision;
pub mod secrets;

pub use credentials::*;
pub use lockbox::*;
pub use logging::*;
pub use mounts::*;
pub use revision::*;
pub use secrets::*;
