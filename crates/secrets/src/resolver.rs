//! Two-phase `latest` version resolution

use crate::aggregate::aggregate_outcomes;
use crate::by_id::resolve_by_id;
use crate::folder_scan::resolve_fallbacks;
use crate::lookup::SecretLookup;
use crate::outcome::ResolutionOutcome;
use dsc_core::{Result, SecretReference, DEFAULT_SECRETS_CONCURRENCY, LIST_SECRETS_PAGE_SIZE};
use std::sync::Arc;

/// Tunables for a resolution run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Folder searched by name when a by-id lookup fails
    pub folder_id: String,
    /// Maximum number of by-id lookups in flight
    pub max_concurrent: usize,
    /// Page size used when listing the folder
    pub page_size: u32,
}

impl ResolverConfig {
    pub fn new(folder_id: impl Into<String>) -> Self {
        Self {
            folder_id: folder_id.into(),
            max_concurrent: DEFAULT_SECRETS_CONCURRENCY,
            page_size: LIST_SECRETS_PAGE_SIZE,
        }
    }
}

/// Pins `latest` secret references to concrete versions.
///
/// Holds no state between calls: the in-flight set and the folder index live
/// only for the duration of [`LatestVersionResolver::resolve`].
pub struct LatestVersionResolver {
    lookup: Arc<dyn SecretLookup>,
    config: ResolverConfig,
}

impl LatestVersionResolver {
    /// Create a resolver with the default fan-out and page size
    pub fn new(lookup: Arc<dyn SecretLookup>, folder_id: impl Into<String>) -> Self {
        Self::with_config(lookup, ResolverConfig::new(folder_id))
    }

    pub fn with_config(lookup: Arc<dyn SecretLookup>, config: ResolverConfig) -> Self {
        Self { lookup, config }
    }

    /// Set the maximum number of concurrent by-id lookups
    #[must_use]
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.config.max_concurrent = max_concurrent.max(1);
        self
    }

    /// Set the folder listing page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.config.page_size = page_size.max(1);
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve every `latest` reference in `references`.
    ///
    /// Non-`latest` references never reach the secret store. The returned list
    /// has the same length and order as the input. If any `latest` reference
    /// cannot be pinned, nothing is returned except the aggregated error.
    pub async fn resolve(&self, references: Vec<SecretReference>) -> Result<Vec<SecretReference>> {
        let latest: Vec<SecretReference> = references
            .iter()
            .filter(|reference| reference.is_latest())
            .cloned()
            .collect();

        if latest.is_empty() {
            return Ok(references);
        }

        tracing::info!(
            total = references.len(),
            latest = latest.len(),
            "Resolving latest secret versions"
        );

        let lookup = self.lookup.as_ref();
        let mut outcomes = resolve_by_id(lookup, &latest, self.config.max_concurrent).await;

        let fallbacks = outcomes.iter().filter(|o| o.is_fallback()).count();
        if fallbacks > 0 {
            tracing::info!(
                folder_id = %self.config.folder_id,
                fallbacks,
                "Searching folder for secrets by name"
            );
            outcomes =
                resolve_fallbacks(lookup, &self.config.folder_id, self.config.page_size, outcomes)
                    .await;
        }

        let failed = outcomes.iter().filter(|o| o.is_failed()).count();
        let resolved = outcomes
            .iter()
            .filter(|o| matches!(o, ResolutionOutcome::Resolved(_)))
            .count();
        tracing::info!(resolved, failed, "Secret resolution finished");

        aggregate_outcomes(references, outcomes)
    }
}
