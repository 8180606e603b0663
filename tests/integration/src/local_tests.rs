//! Local (development) backend behavior through the facade

use cms_content::{Category, theme};
use cms_core::{ContentRepository, Error, Mode};
use cms_test_utils::fixtures::page_body;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;

fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/content")
}

#[tokio::test]
async fn fixture_tree_lists_and_reads() {
    let repo = ContentRepository::from_mode(Mode::local(fixture_root())).unwrap();

    let pages = repo.list(Category::Page).await.unwrap();
    let ids: Vec<_> = pages.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["about", "home"]);

    let home = repo.get(Category::Page, "home").await.unwrap();
    assert_eq!(home.title(), Some("Home"));
    assert!(home.revision.as_deref().is_some_and(|r| r.starts_with("sha256:")));
}

#[tokio::test]
async fn fixture_tree_has_exactly_one_active_theme() {
    let repo = ContentRepository::local(fixture_root());
    let active = repo.active_theme().await.unwrap().unwrap();
    assert_eq!(active.id, "midnight");
    assert!(theme::is_active(&active.body));
}

#[tokio::test]
async fn local_mode_rejects_mutations() {
    let repo = ContentRepository::local(fixture_root());

    let err = repo.create(Category::Page, page_body("New Page")).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Store(cms_store::Error::Unsupported { operation: "write" })
    ));

    let home = repo.get(Category::Page, "home").await.unwrap();
    let err = repo
        .remove(Category::Page, "home", home.revision.as_deref().unwrap())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Store(cms_store::Error::Unsupported { operation: "delete" })
    ));
}

#[tokio::test]
async fn corrupt_document_degrades_listing_only() {
    let dir = tempfile::tempdir().unwrap();
    let pages = dir.path().join("pages");
    fs::create_dir_all(&pages).unwrap();
    fs::write(pages.join("good.json"), r#"{"title": "Good"}"#).unwrap();
    fs::write(pages.join("broken.json"), "{not json").unwrap();

    let repo = ContentRepository::local(dir.path());
    let summaries = repo.list(Category::Page).await.unwrap();
    assert_eq!(summaries.len(), 2);

    let broken = summaries.iter().find(|s| s.id == "broken").unwrap();
    assert!(broken.unreadable);
    let good = summaries.iter().find(|s| s.id == "good").unwrap();
    assert_eq!(good.title.as_deref(), Some("Good"));
}

#[tokio::test]
async fn empty_tree_lists_every_category_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let repo = ContentRepository::local(dir.path());
    for category in Category::ALL {
        assert!(repo.list(category).await.unwrap().is_empty());
    }
}
