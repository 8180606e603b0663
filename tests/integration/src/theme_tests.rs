//! Theme exclusivity invariant tests
//!
//! At most one theme is active at any time. The two-step activation is not
//! atomic: a failed second step leaves zero active themes, and retrying the
//! same activation restores exactly one.

use cms_content::{Category, theme};
use cms_core::{ContentRepository, Error};
use cms_test_utils::fixtures::theme_body;
use cms_test_utils::{FailingBackend, MemoryBackend};
use pretty_assertions::assert_eq;
use std::sync::Arc;

async fn active_theme_ids(repo: &ContentRepository) -> Vec<String> {
    let mut active = Vec::new();
    for summary in repo.list(Category::Theme).await.unwrap() {
        let doc = repo.get(Category::Theme, &summary.id).await.unwrap();
        if theme::is_active(&doc.body) {
            active.push(doc.id);
        }
    }
    active
}

fn seeded_repo() -> (Arc<MemoryBackend>, ContentRepository) {
    let backend = Arc::new(MemoryBackend::new());
    backend.seed(Category::Theme, "midnight", theme_body("Midnight", true));
    backend.seed(Category::Theme, "daylight", theme_body("Daylight", false));
    let repo = ContentRepository::new(backend.clone());
    (backend, repo)
}

#[tokio::test]
async fn activation_moves_the_single_active_flag() {
    let (_backend, repo) = seeded_repo();
    assert_eq!(active_theme_ids(&repo).await, vec!["midnight"]);

    repo.activate_theme("daylight").await.unwrap();
    assert_eq!(active_theme_ids(&repo).await, vec!["daylight"]);
}

#[tokio::test]
async fn reactivating_the_active_theme_is_a_noop() {
    let (_backend, repo) = seeded_repo();
    let before = repo.get(Category::Theme, "midnight").await.unwrap();

    repo.activate_theme("midnight").await.unwrap();

    let after = repo.get(Category::Theme, "midnight").await.unwrap();
    assert_eq!(before.revision, after.revision, "no write should happen");
    assert_eq!(active_theme_ids(&repo).await, vec!["midnight"]);
}

#[tokio::test]
async fn activating_from_zero_active_state_works() {
    let backend = Arc::new(MemoryBackend::new());
    backend.seed(Category::Theme, "midnight", theme_body("Midnight", false));
    let repo = ContentRepository::new(backend);

    assert!(repo.active_theme().await.unwrap().is_none());
    repo.activate_theme("midnight").await.unwrap();
    assert_eq!(active_theme_ids(&repo).await, vec!["midnight"]);
}

#[tokio::test]
async fn activating_a_missing_theme_fails_without_changing_state() {
    let (_backend, repo) = seeded_repo();
    let err = repo.activate_theme("nonexistent").await.unwrap_err();
    // The first step deactivated midnight, so the failure reports the
    // degraded state.
    match err {
        Error::ActivationIncomplete { deactivated, .. } => {
            assert_eq!(deactivated.as_deref(), Some("midnight"));
        }
        other => panic!("expected ActivationIncomplete, got {other}"),
    }
    assert_eq!(active_theme_ids(&repo).await, Vec::<String>::new());
}

#[tokio::test]
async fn failed_second_step_degrades_to_zero_active_then_retry_recovers() {
    let backend = Arc::new(MemoryBackend::new());
    backend.seed(Category::Theme, "midnight", theme_body("Midnight", true));
    backend.seed(Category::Theme, "daylight", theme_body("Daylight", false));

    let failing = Arc::new(FailingBackend::new(backend));
    failing.fail_next_write(Category::Theme, "daylight");
    let repo = ContentRepository::new(failing);

    let err = repo.activate_theme("daylight").await.unwrap_err();
    match &err {
        Error::ActivationIncomplete {
            deactivated,
            source,
        } => {
            assert_eq!(deactivated.as_deref(), Some("midnight"));
            assert!(source.is_retryable());
        }
        other => panic!("expected ActivationIncomplete, got {other}"),
    }

    // Degraded but valid: zero active themes, never two.
    assert_eq!(active_theme_ids(&repo).await, Vec::<String>::new());

    // The injected failure was one-shot; the idempotent retry succeeds.
    repo.activate_theme("daylight").await.unwrap();
    assert_eq!(active_theme_ids(&repo).await, vec!["daylight"]);
}

#[tokio::test]
async fn deleting_the_active_theme_requires_a_replacement_first() {
    let (_backend, repo) = seeded_repo();
    let midnight = repo.get(Category::Theme, "midnight").await.unwrap();

    let err = repo
        .remove(Category::Theme, "midnight", midnight.revision.as_deref().unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ActiveThemeProtected { .. }));

    repo.activate_theme("daylight").await.unwrap();

    // The former active theme was rewritten during deactivation; delete
    // with its fresh revision.
    let midnight = repo.get(Category::Theme, "midnight").await.unwrap();
    repo.remove(Category::Theme, "midnight", midnight.revision.as_deref().unwrap())
        .await
        .unwrap();

    assert_eq!(active_theme_ids(&repo).await, vec!["daylight"]);
}
