//! Second phase: resolve failed lookups by secret name within the folder

use crate::lookup::SecretLookup;
use crate::outcome::ResolutionOutcome;
use dsc_core::{Error, LockboxSecret, Result, SecretReference};
use std::collections::{HashMap, HashSet};

/// Name to secret mapping for one folder, built from a complete listing
#[derive(Debug, Default)]
pub struct FolderSecretIndex {
    by_name: HashMap<String, LockboxSecret>,
}

impl FolderSecretIndex {
    /// Page through every secret in `folder_id`.
    ///
    /// The index is only returned once the listing has been exhausted.
    pub async fn scan(lookup: &dyn SecretLookup, folder_id: &str, page_size: u32) -> Result<Self> {
        let mut secrets = Vec::new();
        let mut seen_tokens = HashSet::new();
        let mut page_token: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = lookup
                .list_secrets(folder_id, page_size, page_token.as_deref())
                .await?;
            pages += 1;
            tracing::debug!(
                folder_id = %folder_id,
                page = pages,
                secrets = page.secrets.len(),
                "Listed secrets page"
            );

            let next = page.next_page().map(str::to_string);
            secrets.extend(page.secrets);

            match next {
                Some(token) => {
                    if !seen_tokens.insert(token.clone()) {
                        return Err(Error::api(
                            "lockbox",
                            "list secrets",
                            200,
                            format!("page token '{token}' was returned twice"),
                        ));
                    }
                    page_token = Some(token);
                }
                None => break,
            }
        }

        Ok(Self::from_secrets(secrets))
    }

    /// Build an index from already known secrets.
    ///
    /// A later secret wins when two share a name.
    #[must_use]
    pub fn from_secrets(secrets: impl IntoIterator<Item = LockboxSecret>) -> Self {
        Self {
            by_name: secrets
                .into_iter()
                .map(|secret| (secret.name.clone(), secret))
                .collect(),
        }
    }

    /// Find a secret by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LockboxSecret> {
        self.by_name.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Resolve a reference whose `id` is really a secret name
    #[must_use]
    pub fn resolve(&self, reference: &SecretReference) -> ResolutionOutcome {
        let Some(secret) = self.get(&reference.id) else {
            return ResolutionOutcome::Failed(format!(
                "failed to resolve secret: {}",
                reference.id
            ));
        };

        match secret.current_version_id() {
            Some(version_id) => {
                tracing::debug!(
                    name = %reference.id,
                    secret_id = %secret.id,
                    version_id = %version_id,
                    "Resolved secret by name"
                );
                ResolutionOutcome::Resolved(reference.with_secret(&secret.id, version_id))
            }
            None => ResolutionOutcome::Failed(format!(
                "secret {} (found as {}) has no current version",
                reference.id, secret.id
            )),
        }
    }
}

/// Replace every `Fallback` outcome using a single scan of the folder.
///
/// Other outcomes pass through untouched and keep their position. Without any
/// fallback the folder is not listed at all. If the listing itself fails, each
/// fallback reference fails with the listing error attached.
pub async fn resolve_fallbacks(
    lookup: &dyn SecretLookup,
    folder_id: &str,
    page_size: u32,
    outcomes: Vec<ResolutionOutcome>,
) -> Vec<ResolutionOutcome> {
    if !outcomes.iter().any(ResolutionOutcome::is_fallback) {
        return outcomes;
    }

    let index = match FolderSecretIndex::scan(lookup, folder_id, page_size).await {
        Ok(index) => index,
        Err(e) => {
            tracing::error!(folder_id = %folder_id, error = %e, "Failed to list folder secrets");
            let cause = e.to_string();
            return outcomes
                .into_iter()
                .map(|outcome| match outcome {
                    ResolutionOutcome::Fallback(reference) => ResolutionOutcome::Failed(format!(
                        "failed to resolve secret: {} ({cause})",
                        reference.id
                    )),
                    other => other,
                })
                .collect();
        }
    };

    if index.is_empty() {
        tracing::warn!(folder_id = %folder_id, "Folder has no secrets to match by name");
    } else {
        tracing::debug!(folder_id = %folder_id, secrets = index.len(), "Built folder secret index");
    }

    outcomes
        .into_iter()
        .map(|outcome| match outcome {
            ResolutionOutcome::Fallback(reference) => index.resolve(&reference),
            other => other,
        })
        .collect()
}
