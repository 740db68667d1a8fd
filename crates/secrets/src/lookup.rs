//! Remote secret lookup seam

use async_trait::async_trait;
use dsc_core::{LockboxSecret, Result, SecretPage};
use std::sync::Arc;

/// Read access to the secret store.
///
/// Implementations must be safe to call concurrently; the by-id phase issues
/// several `get_secret` calls at once.
#[async_trait]
pub trait SecretLookup: Send + Sync {
    /// Fetch a secret by its identifier
    async fn get_secret(&self, secret_id: &str) -> Result<LockboxSecret>;

    /// Fetch one page of the secrets in a folder
    ///
    /// `page_token` is `None` for the first page. The returned page carries an
    /// empty `next_page_token` when it is the last one.
    async fn list_secrets(
        &self,
        folder_id: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<SecretPage>;
}

#[async_trait]
impl<T: SecretLookup + ?Sized> SecretLookup for Arc<T> {
    async fn get_secret(&self, secret_id: &str) -> Result<LockboxSecret> {
        (**self).get_secret(secret_id).await
    }

    async fn list_secrets(
        &self,
        folder_id: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<SecretPage> {
        (**self).list_secrets(folder_id, page_size, page_token).await
    }
}
