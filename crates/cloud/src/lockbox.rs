//! Secret store client

use crate::client::{segment_url, CloudClient};
use async_trait::async_trait;
use dsc_core::{LockboxSecret, Result, SecretPage};
use dsc_secrets::SecretLookup;

const SERVICE: &str = "lockbox";

/// Reads secret metadata from the secret store
#[derive(Clone)]
pub struct LockboxClient {
    client: CloudClient,
}

impl LockboxClient {
    pub fn new(client: CloudClient) -> Self {
        Self { client }
    }

    fn secrets_url(&self) -> String {
        format!("{}/lockbox/v1/secrets", self.client.endpoints().lockbox)
    }
}

#[async_trait]
impl SecretLookup for LockboxClient {
    async fn get_secret(&self, secret_id: &str) -> Result<LockboxSecret> {
        let url = segment_url(&self.secrets_url(), secret_id)?;
        self.client.get_json(SERVICE, "get secret", &url, &[]).await
    }

    async fn list_secrets(
        &self,
        folder_id: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<SecretPage> {
        let mut query = vec![
            ("folderId", folder_id.to_string()),
            ("pageSize", page_size.to_string()),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token.to_string()));
        }
        self.client
            .get_json(SERVICE, "list secrets", &self.secrets_url(), &query)
            .await
    }
}
