//! End-to-end facade tests over the in-memory backend

use cms_content::Category;
use cms_core::{ContentRepository, Error};
use cms_test_utils::fixtures::{
    component_schema_body, layout_body, navigation_body, page_body, theme_body,
};
use cms_test_utils::{FailingBackend, MemoryBackend};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

fn repository() -> ContentRepository {
    ContentRepository::new(Arc::new(MemoryBackend::new()))
}

#[tokio::test]
async fn create_then_get_round_trips_every_category() {
    let repo = repository();
    let cases = vec![
        (Category::Page, page_body("Home"), "home"),
        (Category::Layout, layout_body("Default Layout"), "default-layout"),
        (Category::Theme, theme_body("Midnight", false), "midnight"),
        (Category::Navigation, navigation_body("Main Menu"), "main-menu"),
        (
            Category::ComponentSchema,
            component_schema_body("Hero Banner"),
            "hero-banner",
        ),
    ];

    for (category, body, expected_id) in cases {
        let created = repo.create(category, body.clone()).await.unwrap();
        assert_eq!(created.id, expected_id);

        let fetched = repo.get(category, expected_id).await.unwrap();
        assert_eq!(fetched.body, created.body);
        assert!(fetched.revision.as_deref().is_some_and(|r| !r.is_empty()));

        // Input fields survive untouched; only timestamps were added.
        for (key, value) in body.as_object().unwrap() {
            assert_eq!(&fetched.body[key], value, "field {key} changed");
        }
    }
}

#[tokio::test]
async fn update_with_stale_revision_conflicts_then_fresh_succeeds() {
    let repo = repository();
    let created = repo.create(Category::Page, page_body("Home")).await.unwrap();
    let stale = created.revision.unwrap();

    let first = repo
        .update(Category::Page, "home", json!({"title": "Home", "v": 1}), &stale)
        .await
        .unwrap();

    let err = repo
        .update(Category::Page, "home", json!({"title": "Home", "v": 2}), &stale)
        .await
        .unwrap_err();
    assert!(err.is_conflict());

    repo.update(
        Category::Page,
        "home",
        json!({"title": "Home", "v": 2}),
        &first.revision.unwrap(),
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn delete_with_stale_revision_conflicts() {
    let repo = repository();
    let created = repo.create(Category::Page, page_body("Home")).await.unwrap();
    let stale = created.revision.unwrap();

    let updated = repo
        .update(Category::Page, "home", json!({"title": "Home", "v": 2}), &stale)
        .await
        .unwrap();

    let err = repo.remove(Category::Page, "home", &stale).await.unwrap_err();
    assert!(err.is_conflict());

    repo.remove(Category::Page, "home", &updated.revision.unwrap())
        .await
        .unwrap();
    assert!(repo.get(Category::Page, "home").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn colliding_names_fail_with_already_exists() {
    let repo = repository();
    repo.create(Category::Page, page_body("Contact Us")).await.unwrap();

    // Different human name, same slug.
    let err = repo
        .create(Category::Page, page_body("Contact -- Us"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Store(cms_store::Error::AlreadyExists { .. })
    ));
}

#[tokio::test]
async fn list_on_empty_category_is_empty_not_an_error() {
    let repo = repository();
    assert_eq!(repo.list(Category::ComponentSchema).await.unwrap(), vec![]);
}

#[tokio::test]
async fn list_degrades_per_document_instead_of_failing() {
    let backend = Arc::new(MemoryBackend::new());
    backend.seed(Category::Page, "home", page_body("Home"));
    backend.seed(Category::Page, "about", page_body("About"));

    let failing = Arc::new(FailingBackend::new(backend));
    failing.fail_next_read(Category::Page, "about");
    let repo = ContentRepository::new(failing);

    let summaries = repo.list(Category::Page).await.unwrap();
    assert_eq!(summaries.len(), 2);

    let about = summaries.iter().find(|s| s.id == "about").unwrap();
    assert!(about.unreadable);
    assert!(about.title.is_none());

    let home = summaries.iter().find(|s| s.id == "home").unwrap();
    assert!(!home.unreadable);
    assert_eq!(home.title.as_deref(), Some("Home"));
}

#[tokio::test]
async fn validation_failures_never_reach_the_backend() {
    let backend = Arc::new(MemoryBackend::new());
    let repo = ContentRepository::new(backend.clone());

    // Page without a title, theme without fonts, layout without a footer.
    assert!(matches!(
        repo.create(Category::Page, json!({"blocks": []})).await.unwrap_err(),
        Error::Validation { .. }
    ));
    assert!(matches!(
        repo.create(Category::Theme, json!({"name": "X", "colors": {}}))
            .await
            .unwrap_err(),
        Error::Validation { .. }
    ));
    assert!(matches!(
        repo.create(Category::Layout, json!({"name": "X", "header": {}}))
            .await
            .unwrap_err(),
        Error::Validation { .. }
    ));

    assert!(backend.is_empty());
}
