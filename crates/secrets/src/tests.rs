//! Tests for latest version resolution
//!
//! These drive the resolver against an in-memory secret store that records
//! every call, so both outcomes and remote traffic can be asserted.

use super::*;
use async_trait::async_trait;
use dsc_core::{
    Error, LockboxSecret, Result, SecretPage, SecretReference, SecretVersion, LIST_SECRETS_PAGE_SIZE,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

const FOLDER: &str = "folder1";

#[derive(Default)]
struct MockLookup {
    by_id: HashMap<String, LockboxSecret>,
    pages: Vec<Vec<LockboxSecret>>,
    fail_get: bool,
    fail_list: bool,
    get_calls: AtomicUsize,
    list_calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    requested_ids: Mutex<Vec<String>>,
    page_sizes: Mutex<Vec<u32>>,
}

impl MockLookup {
    fn with_secrets(secrets: Vec<LockboxSecret>) -> Self {
        Self {
            by_id: secrets.into_iter().map(|s| (s.id.clone(), s)).collect(),
            ..Self::default()
        }
    }

    fn with_folder_pages(mut self, pages: Vec<Vec<LockboxSecret>>) -> Self {
        self.pages = pages;
        self
    }

    fn failing_get(mut self) -> Self {
        self.fail_get = true;
        self
    }

    fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn requested_ids(&self) -> Vec<String> {
        self.requested_ids.lock().unwrap().clone()
    }

    fn page_sizes(&self) -> Vec<u32> {
        self.page_sizes.lock().unwrap().clone()
    }
}

#[async_trait]
impl SecretLookup for MockLookup {
    async fn get_secret(&self, secret_id: &str) -> Result<LockboxSecret> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.requested_ids.lock().unwrap().push(secret_id.to_string());

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.fail_get {
            return Err(Error::api("lockbox", "get secret", 503, "Failed to get secret"));
        }
        self.by_id.get(secret_id).cloned().ok_or_else(|| {
            Error::api(
                "lockbox",
                "get secret",
                404,
                format!("Secret not found: {secret_id}"),
            )
        })
    }

    async fn list_secrets(
        &self,
        folder_id: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<SecretPage> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.page_sizes.lock().unwrap().push(page_size);
        assert_eq!(folder_id, FOLDER);

        if self.fail_list {
            return Err(Error::network("lockbox", "connection reset"));
        }

        let index: usize = page_token.map(|t| t.parse().unwrap()).unwrap_or(0);
        let secrets = self.pages.get(index).cloned().unwrap_or_default();
        let next_page_token = if index + 1 < self.pages.len() {
            (index + 1).to_string()
        } else {
            String::new()
        };
        Ok(SecretPage {
            secrets,
            next_page_token,
        })
    }
}

fn secret(id: &str, name: &str, version: Option<&str>) -> LockboxSecret {
    LockboxSecret {
        id: id.to_string(),
        folder_id: FOLDER.to_string(),
        name: name.to_string(),
        description: "test secret".to_string(),
        current_version: version.map(|v| SecretVersion {
            id: v.to_string(),
            secret_id: id.to_string(),
            description: "current version".to_string(),
        }),
    }
}

fn reference(env: &str, id: &str, version: &str, key: &str) -> SecretReference {
    SecretReference::new(env, id, version, key)
}

fn resolver(lookup: &Arc<MockLookup>) -> LatestVersionResolver {
    LatestVersionResolver::new(lookup.clone(), FOLDER)
}

fn find<'a>(resolved: &'a [SecretReference], env: &str) -> &'a SecretReference {
    resolved
        .iter()
        .find(|r| r.environment_variable == env)
        .unwrap_or_else(|| panic!("{env} missing from output"))
}

#[tokio::test]
async fn resolves_latest_to_current_version() {
    let lookup = Arc::new(MockLookup::with_secrets(vec![secret(
        "secret1",
        "secret1",
        Some("v1"),
    )]));

    let resolved = resolver(&lookup)
        .resolve(vec![reference("DB", "secret1", "latest", "URL")])
        .await
        .unwrap();

    assert_eq!(resolved, vec![reference("DB", "secret1", "v1", "URL")]);
    assert_eq!(lookup.list_calls(), 0);
}

#[tokio::test]
async fn references_without_latest_are_returned_untouched() {
    let lookup = Arc::new(MockLookup::default());
    let references = vec![
        reference("ENV1", "secret1", "version1", "key1"),
        reference("ENV2", "secret2", "version2", "key2"),
    ];

    let resolved = resolver(&lookup).resolve(references.clone()).await.unwrap();

    assert_eq!(resolved, references);
    assert_eq!(lookup.get_calls(), 0);
    assert_eq!(lookup.list_calls(), 0);
}

#[tokio::test]
async fn fails_when_secret_has_no_current_version() {
    let lookup = Arc::new(MockLookup::with_secrets(vec![secret(
        "secret1", "secret1", None,
    )]));

    let err = resolver(&lookup)
        .resolve(vec![reference("ENV1", "secret1", "latest", "key1")])
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Failed to resolve latest versions for secrets: secret secret1 has no current version"
    );
    // A terminal by-id failure is not retried by name.
    assert_eq!(lookup.list_calls(), 0);
}

#[tokio::test]
async fn only_latest_references_contact_the_store() {
    let lookup = Arc::new(MockLookup::with_secrets(vec![secret(
        "s1",
        "s1",
        Some("v-current"),
    )]));

    let resolved = resolver(&lookup)
        .resolve(vec![
            reference("A", "s1", "latest", "K"),
            reference("B", "s1", "version2", "K"),
        ])
        .await
        .unwrap();

    assert_eq!(
        resolved,
        vec![
            reference("A", "s1", "v-current", "K"),
            reference("B", "s1", "version2", "K"),
        ]
    );
    assert_eq!(lookup.requested_ids(), vec!["s1".to_string()]);
}

#[tokio::test]
async fn mixes_latest_and_pinned_versions_across_secrets() {
    let lookup = Arc::new(MockLookup::with_secrets(vec![
        secret("secret1", "secret1", Some("version999")),
        secret("secret2", "secret2", Some("version888")),
    ]));

    let resolved = resolver(&lookup)
        .resolve(vec![
            reference("DATABASE_URL", "secret1", "latest", "DATABASE_URL"),
            reference("API_KEY", "secret1", "version2", "API_KEY"),
            reference("REDIS_URL", "secret2", "latest", "REDIS_URL"),
            reference("JWT_SECRET", "secret3", "version5", "JWT_SECRET"),
        ])
        .await
        .unwrap();

    assert_eq!(resolved.len(), 4);
    assert_eq!(find(&resolved, "DATABASE_URL").version_id, "version999");
    assert_eq!(find(&resolved, "API_KEY").version_id, "version2");
    assert_eq!(find(&resolved, "REDIS_URL").version_id, "version888");
    assert_eq!(find(&resolved, "JWT_SECRET").version_id, "version5");
    assert_eq!(lookup.get_calls(), 2);
}

#[tokio::test]
async fn same_secret_and_key_bound_to_different_variables() {
    let lookup = Arc::new(MockLookup::with_secrets(vec![
        secret("secret1", "secret1", Some("version999")),
        secret("secret2", "secret2", Some("version888")),
    ]));

    let resolved = resolver(&lookup)
        .resolve(vec![
            reference("DATABASE_URL_LATEST", "secret1", "latest", "DATABASE_URL"),
            reference("DATABASE_URL_STABLE", "secret1", "version2", "DATABASE_URL"),
            reference("API_KEY_LATEST", "secret2", "latest", "API_KEY"),
            reference("API_KEY_STABLE", "secret2", "version5", "API_KEY"),
            reference("API_KEY_AGAIN", "secret2", "latest", "API_KEY"),
        ])
        .await
        .unwrap();

    assert_eq!(
        resolved,
        vec![
            reference("DATABASE_URL_LATEST", "secret1", "version999", "DATABASE_URL"),
            reference("DATABASE_URL_STABLE", "secret1", "version2", "DATABASE_URL"),
            reference("API_KEY_LATEST", "secret2", "version888", "API_KEY"),
            reference("API_KEY_STABLE", "secret2", "version5", "API_KEY"),
            reference("API_KEY_AGAIN", "secret2", "version888", "API_KEY"),
        ]
    );
}

#[tokio::test]
async fn falls_back_to_folder_search_by_name() {
    let lookup = Arc::new(
        MockLookup::default()
            .with_folder_pages(vec![vec![secret("sid-999", "secret1", Some("v9"))]]),
    );

    let resolved = resolver(&lookup)
        .resolve(vec![reference("DB", "secret1", "latest", "URL")])
        .await
        .unwrap();

    assert_eq!(resolved, vec![reference("DB", "sid-999", "v9", "URL")]);
    assert_eq!(lookup.list_calls(), 1);
}

#[tokio::test]
async fn transient_lookup_failures_also_fall_back() {
    let lookup = Arc::new(
        MockLookup::with_secrets(vec![secret("secret1", "secret1", Some("v1"))])
            .with_folder_pages(vec![vec![secret("secret1", "secret1", Some("v1"))]])
            .failing_get(),
    );

    let resolved = resolver(&lookup)
        .resolve(vec![reference("DB", "secret1", "latest", "URL")])
        .await
        .unwrap();

    assert_eq!(resolved, vec![reference("DB", "secret1", "v1", "URL")]);
}

#[tokio::test]
async fn fallback_match_without_current_version_fails() {
    let lookup = Arc::new(
        MockLookup::default().with_folder_pages(vec![vec![secret("sid-999", "secret1", None)]]),
    );

    let err = resolver(&lookup)
        .resolve(vec![reference("DB", "secret1", "latest", "URL")])
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Failed to resolve latest versions for secrets: secret secret1 (found as sid-999) has no current version"
    );
}

#[tokio::test]
async fn unresolvable_reference_is_reported_by_id() {
    let lookup = Arc::new(
        MockLookup::default().with_folder_pages(vec![vec![secret("sid-1", "other", Some("v1"))]]),
    );

    let err = resolver(&lookup)
        .resolve(vec![reference("DB", "missing", "latest", "URL")])
        .await
        .unwrap_err();

    assert!(matches!(err, Error::SecretResolution { .. }));
    assert_eq!(
        err.to_string(),
        "Failed to resolve latest versions for secrets: failed to resolve secret: missing"
    );
}

#[tokio::test]
async fn folder_scan_visits_every_page() {
    let lookup = Arc::new(MockLookup::default().with_folder_pages(vec![
        vec![secret("sid-1", "first", Some("v1"))],
        vec![secret("sid-2", "second", Some("v2"))],
        vec![secret("sid-3", "third", Some("v3"))],
    ]));

    let resolved = resolver(&lookup)
        .resolve(vec![reference("THIRD", "third", "latest", "K")])
        .await
        .unwrap();

    assert_eq!(resolved, vec![reference("THIRD", "sid-3", "v3", "K")]);
    assert_eq!(lookup.list_calls(), 3);
    assert_eq!(lookup.page_sizes(), vec![LIST_SECRETS_PAGE_SIZE; 3]);
}

#[tokio::test]
async fn configured_page_size_reaches_the_listing() {
    let lookup = Arc::new(MockLookup::default().with_folder_pages(vec![
        vec![secret("sid-1", "first", Some("v1"))],
        vec![secret("sid-2", "second", Some("v2"))],
    ]));

    let resolved = resolver(&lookup)
        .with_page_size(2)
        .resolve(vec![reference("SECOND", "second", "latest", "K")])
        .await
        .unwrap();

    assert_eq!(resolved, vec![reference("SECOND", "sid-2", "v2", "K")]);
    assert_eq!(lookup.page_sizes(), vec![2, 2]);
}

#[tokio::test]
async fn folder_is_scanned_once_for_many_fallbacks() {
    let lookup = Arc::new(MockLookup::default().with_folder_pages(vec![
        vec![
            secret("sid-a", "a", Some("va")),
            secret("sid-b", "b", Some("vb")),
        ],
        vec![secret("sid-c", "c", Some("vc"))],
    ]));

    let resolved = resolver(&lookup)
        .resolve(vec![
            reference("A", "a", "latest", "K"),
            reference("B", "b", "latest", "K"),
            reference("C", "c", "latest", "K"),
        ])
        .await
        .unwrap();

    assert_eq!(
        resolved,
        vec![
            reference("A", "sid-a", "va", "K"),
            reference("B", "sid-b", "vb", "K"),
            reference("C", "sid-c", "vc", "K"),
        ]
    );
    assert_eq!(lookup.get_calls(), 3);
    // One full scan of two pages, regardless of the number of fallbacks.
    assert_eq!(lookup.list_calls(), 2);
}

#[tokio::test]
async fn every_failure_is_aggregated_after_all_attempts() {
    let lookup = Arc::new(
        MockLookup::with_secrets(vec![
            secret("s1", "s1", None),
            secret("s2", "s2", Some("v2")),
        ])
        .with_folder_pages(vec![vec![secret("sid-x", "named", None)]]),
    );

    let err = resolver(&lookup)
        .resolve(vec![
            reference("A", "s1", "latest", "K"),
            reference("B", "s2", "latest", "K"),
            reference("C", "named", "latest", "K"),
            reference("D", "ghost", "latest", "K"),
        ])
        .await
        .unwrap_err();

    let Error::SecretResolution { failures } = &err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(
        failures,
        &vec![
            "secret s1 has no current version".to_string(),
            "secret named (found as sid-x) has no current version".to_string(),
            "failed to resolve secret: ghost".to_string(),
        ]
    );
    assert_eq!(lookup.get_calls(), 4);
}

#[tokio::test]
async fn folder_listing_failure_fails_each_fallback() {
    let lookup = Arc::new(
        MockLookup::with_secrets(vec![secret("s1", "s1", Some("v1"))]).failing_list(),
    );

    let err = resolver(&lookup)
        .resolve(vec![
            reference("A", "s1", "latest", "K"),
            reference("B", "by-name", "latest", "K"),
        ])
        .await
        .unwrap_err();

    let Error::SecretResolution { failures } = &err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(failures.len(), 1);
    assert!(failures[0].starts_with("failed to resolve secret: by-name"));
    assert!(failures[0].contains("connection reset"));
}

#[tokio::test]
async fn lookups_are_bounded_and_order_is_preserved() {
    let secrets: Vec<_> = (0..20)
        .map(|i| {
            let id = format!("s{i}");
            let version = format!("v{i}");
            secret(&id, &id, Some(version.as_str()))
        })
        .collect();
    let lookup = Arc::new(MockLookup::with_secrets(secrets));
    let references: Vec<_> = (0..20)
        .map(|i| reference(&format!("ENV_{i}"), &format!("s{i}"), "latest", "K"))
        .collect();

    let resolved = resolver(&lookup)
        .with_max_concurrent(5)
        .resolve(references)
        .await
        .unwrap();

    let versions: Vec<_> = resolved.iter().map(|r| r.version_id.clone()).collect();
    let expected: Vec<_> = (0..20).map(|i| format!("v{i}")).collect();
    assert_eq!(versions, expected);

    let max = lookup.max_in_flight.load(Ordering::SeqCst);
    assert!(max <= 5, "at most 5 lookups in flight, saw {max}");
    assert!(max > 1, "lookups should overlap, saw {max}");
}

#[tokio::test]
async fn by_id_outcomes_keep_positions() {
    let lookup = MockLookup::with_secrets(vec![
        secret("s1", "s1", Some("v1")),
        secret("s3", "s3", None),
    ]);
    let references = vec![
        reference("A", "s1", "latest", "K"),
        reference("B", "s2", "latest", "K"),
        reference("C", "s3", "latest", "K"),
    ];

    let outcomes = resolve_by_id(&lookup, &references, 2).await;

    assert_eq!(
        outcomes,
        vec![
            ResolutionOutcome::Resolved(reference("A", "s1", "v1", "K")),
            ResolutionOutcome::Fallback(reference("B", "s2", "latest", "K")),
            ResolutionOutcome::Failed("secret s3 has no current version".to_string()),
        ]
    );
}

#[tokio::test]
async fn fallback_phase_is_skipped_without_fallbacks() {
    let lookup = MockLookup::default();
    let outcomes = vec![ResolutionOutcome::Failed("boom".to_string())];

    let result = resolve_fallbacks(&lookup, FOLDER, 100, outcomes.clone()).await;

    assert_eq!(result, outcomes);
    assert_eq!(lookup.list_calls(), 0);
}

#[tokio::test]
async fn parsed_lines_resolve_end_to_end() {
    let lookup = Arc::new(
        MockLookup::with_secrets(vec![secret("secret123", "db", Some("ver-db"))])
            .with_folder_pages(vec![vec![secret("e6q-redis", "redis", Some("ver-redis"))]]),
    );
    let lines = [
        "# Configuration for development environment",
        "DATABASE_URL=secret123/latest/DATABASE_URL",
        "",
        "API_KEY=secret456/version2/API_KEY  # Stable API key",
        "REDIS_URL=redis/latest/REDIS_URL",
    ];

    let references = parse_secret_references(lines).unwrap();
    let resolved = resolver(&lookup).resolve(references).await.unwrap();

    assert_eq!(
        resolved,
        vec![
            reference("DATABASE_URL", "secret123", "ver-db", "DATABASE_URL"),
            reference("API_KEY", "secret456", "version2", "API_KEY"),
            reference("REDIS_URL", "e6q-redis", "ver-redis", "REDIS_URL"),
        ]
    );
}

#[tokio::test]
async fn folder_index_rejects_repeated_page_tokens() {
    struct LoopingLookup;

    #[async_trait]
    impl SecretLookup for LoopingLookup {
        async fn get_secret(&self, secret_id: &str) -> Result<LockboxSecret> {
            Err(Error::api("lockbox", "get secret", 404, secret_id))
        }

        async fn list_secrets(
            &self,
            _folder_id: &str,
            _page_size: u32,
            _page_token: Option<&str>,
        ) -> Result<SecretPage> {
            Ok(SecretPage {
                secrets: Vec::new(),
                next_page_token: "same".to_string(),
            })
        }
    }

    let err = FolderSecretIndex::scan(&LoopingLookup, FOLDER, 100)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("returned twice"));
}
