use crate::Project;

use googletest::prelude::*;
use serde_json::json;

#[test]
fn test_project_new_has_defaults() {
    let project = Project::new("Solo");

    assert_that!(project.title, eq("Solo"));
    assert_that!(project.tags, is_empty());
    assert_that!(project.featured, eq(false));
    assert_that!(project.subtitle, none());
}

#[test]
fn test_project_decodes_with_missing_optional_fields() {
    let project: Project = serde_json::from_value(json!({ "title": "Bare" })).unwrap();

    assert_that!(project, eq(&Project::new("Bare")));
}

#[test]
fn test_project_ignores_storage_fields() {
    let project: Project = serde_json::from_value(json!({
        "_id": "65f0c0ffee",
        "title": "Stored",
        "tags": ["A"],
        "featured": true,
        "created_at": "2024-01-01T00:00:00Z",
    }))
    .unwrap();

    assert_that!(project.title, eq("Stored"));
    assert_that!(project.tags, elements_are![eq("A")]);
    assert_that!(project.featured, eq(true));
}

#[test]
fn test_project_without_title_is_rejected() {
    let result = serde_json::from_value::<Project>(json!({ "subtitle": "No title" }));

    assert!(result.is_err());
}

#[test]
fn test_project_serializes_all_fields_without_identity() {
    let value = serde_json::to_value(Project::new("Out")).unwrap();
    let object = value.as_object().unwrap();

    assert_that!(object.len(), eq(8));
    assert!(!object.contains_key("_id"));
    assert!(!object.contains_key("id"));
    assert_eq!(value["subtitle"], serde_json::Value::Null);
    assert_eq!(value["tags"], json!([]));
}
