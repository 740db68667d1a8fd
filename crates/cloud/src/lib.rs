//! REST clients for the cloud control plane
//!
//! - **`client`**: shared HTTP handle carrying the IAM token
//! - **`auth`**: IAM token sources (static token, authorized key, federation)
//! - **`lockbox`**: secret store reads, implementing [`dsc_secrets::SecretLookup`]
//! - **`containers`**: container lookup/creation, revision deployment, access bindings
//! - **`operation`**: polling of long-running operations

pub mod auth;
pub mod client;
pub mod containers;
pub mod endpoints;
pub mod lockbox;
pub mod models;
pub mod operation;

pub use auth::{token_source, FederatedTokenSource, ServiceAccountKeyTokenSource, StaticTokenSource, TokenSource};
pub use client::CloudClient;
pub use containers::ContainerClient;
pub use endpoints::CloudEndpoints;
pub use lockbox::LockboxClient;
pub use models::{Container, Revision};
pub use operation::{Operation, OperationWaiter};
