//! Tests for content catalog loading.

use std::fs;

use tempfile::TempDir;

use folio::content::{available_tags, Content, ContentError};

#[test]
fn catalog_round_trips_through_a_json_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("content.json");

    let content = Content::default();
    fs::write(&path, serde_json::to_string_pretty(&content).unwrap()).unwrap();

    let loaded = Content::load(&path).unwrap();
    assert_eq!(loaded, content);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("content.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(Content::load(&path), Err(ContentError::Parse(_))));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    assert!(matches!(Content::load(&path), Err(ContentError::Io(_))));
}

#[test]
fn catalog_without_phrases_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("content.json");

    let mut content = Content::default();
    content.phrases.clear();
    fs::write(&path, serde_json::to_string(&content).unwrap()).unwrap();

    assert!(matches!(Content::load(&path), Err(ContentError::NoPhrases)));
}

#[test]
fn builtin_tags_cover_every_project() {
    let content = Content::default();
    let tags = available_tags(&content.projects);
    for project in &content.projects {
        for tag in &project.tags {
            assert!(tags.contains(tag), "tag '{}' missing from filter bar", tag);
        }
    }
}
