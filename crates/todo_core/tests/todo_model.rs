use todo_core::{Todo, TodoError, TodoStatus, DEFAULT_CATEGORY};

#[test]
fn new_todo_is_trimmed_and_incomplete_by_default() {
    let todo = Todo::draft("  Buy milk  ")
        .description("  two litres ")
        .category(" Shopping ")
        .build()
        .unwrap();

    assert_eq!(todo.title, "Buy milk");
    assert_eq!(todo.description, "two litres");
    assert_eq!(todo.category, "Shopping");
    assert_eq!(todo.status, TodoStatus::Incomplete);
    assert!(!todo.id.is_empty());
}

#[test]
fn new_uses_defaults_for_optional_fields() {
    let todo = Todo::new("plain").unwrap();

    assert_eq!(todo.description, "");
    assert_eq!(todo.category, DEFAULT_CATEGORY);
    assert!(!todo.is_complete());
}

#[test]
fn empty_or_whitespace_title_is_rejected() {
    assert_eq!(Todo::new("").unwrap_err(), TodoError::EmptyTitle);
    assert_eq!(Todo::new(" \t\n ").unwrap_err(), TodoError::EmptyTitle);
}

#[test]
fn custom_id_is_kept_trimmed() {
    let todo = Todo::draft("custom").id("  task-7 ").build().unwrap();
    assert_eq!(todo.id, "task-7");
}

#[test]
fn generated_ids_are_unique() {
    let first = Todo::new("one").unwrap();
    let second = Todo::new("two").unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let todo = Todo::draft("ship release")
        .id("rel-1")
        .description("tag and publish")
        .category("Work")
        .status(TodoStatus::Complete)
        .build()
        .unwrap();

    let json = serde_json::to_value(&todo).unwrap();
    assert_eq!(json["id"], "rel-1");
    assert_eq!(json["title"], "ship release");
    assert_eq!(json["description"], "tag and publish");
    assert_eq!(json["category"], "Work");
    assert_eq!(json["status"], "complete");
    assert!(json["created_at"].is_string());

    let decoded: Todo = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, todo);
}

#[test]
fn deserialize_applies_defaults_and_trims() {
    let value = serde_json::json!({
        "id": " imported ",
        "title": "  from json ",
        "created_at": "2026-02-13T10:00:00Z"
    });

    let todo: Todo = serde_json::from_value(value).unwrap();
    assert_eq!(todo.id, "imported");
    assert_eq!(todo.title, "from json");
    assert_eq!(todo.category, DEFAULT_CATEGORY);
    assert_eq!(todo.status, TodoStatus::Incomplete);
    assert_eq!(todo.created_at.to_rfc3339(), "2026-02-13T10:00:00+00:00");
}

#[test]
fn deserialize_rejects_blank_title() {
    let value = serde_json::json!({
        "id": "bad",
        "title": "   ",
        "created_at": "2026-02-13T10:00:00Z"
    });

    let err = serde_json::from_value::<Todo>(value).unwrap_err();
    assert!(
        err.to_string().contains("title is required"),
        "unexpected error: {err}"
    );
}
