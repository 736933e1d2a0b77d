use todo_core::{
    NewTodo, ServiceError, Todo, TodoField, TodoPatch, TodoService, TodoStatus, TodoStore,
    TodoSummary, UndoAction, UndoOutcome, ValidationIssue,
};

#[test]
fn create_todo_validates_and_stores() {
    let mut service = TodoService::new();

    let todo = service
        .create_todo(
            NewTodo::new("  Buy milk ")
                .description(" 2L ")
                .category("Shopping"),
        )
        .unwrap();

    assert_eq!(todo.title, "Buy milk");
    assert_eq!(todo.description, "2L");
    assert_eq!(service.get(&todo.id), Some(todo));
    assert_eq!(service.store().undo_depth(), 1);
}

#[test]
fn create_todo_rejects_invalid_input_without_mutation() {
    let mut service = TodoService::new();

    let err = service
        .create_todo(NewTodo::new(" ").category(""))
        .unwrap_err();

    assert_eq!(
        err,
        ServiceError::Invalid(vec![
            ValidationIssue::Required(TodoField::Title),
            ValidationIssue::Required(TodoField::Category),
        ])
    );
    assert_eq!(err.to_string(), "Title is required; Category is required");
    assert!(service.list_all().is_empty());
    assert_eq!(service.store().undo_depth(), 0);
}

#[test]
fn create_todo_with_taken_custom_id_fails() {
    let mut service = TodoService::new();
    service.create_todo(NewTodo::new("first").id("t-1")).unwrap();

    let err = service
        .create_todo(NewTodo::new("second").id(" t-1 "))
        .unwrap_err();

    assert_eq!(err, ServiceError::DuplicateId("t-1".to_string()));
    assert_eq!(service.list_all().len(), 1);
}

#[test]
fn edit_todo_rejects_invalid_patch_and_keeps_record() {
    let mut service = TodoService::new();
    let todo = service.create_todo(NewTodo::new("stable").id("s")).unwrap();

    let err = service
        .edit_todo("s", &TodoPatch::new().with_category("x".repeat(51)))
        .unwrap_err();

    assert!(matches!(err, ServiceError::Invalid(ref issues) if issues.len() == 1));
    assert_eq!(service.get("s"), Some(todo));
    assert_eq!(service.store().undo_depth(), 1);
}

#[test]
fn edit_todo_by_prefix_returns_updated_record() {
    let mut service = TodoService::new();
    service
        .create_todo(NewTodo::new("draft").id("report-2026"))
        .unwrap();

    let updated = service
        .edit_todo("report", &TodoPatch::new().with_title("final"))
        .unwrap();

    assert_eq!(updated.id, "report-2026");
    assert_eq!(updated.title, "final");
}

#[test]
fn missing_ids_surface_not_found() {
    let mut service = TodoService::new();

    assert_eq!(
        service.complete_todo(" nope ").unwrap_err(),
        ServiceError::NotFound("nope".to_string())
    );
    assert!(matches!(
        service.delete_todo("nope"),
        Err(ServiceError::NotFound(_))
    ));
}

#[test]
fn complete_reopen_and_summary() {
    let mut service = TodoService::new();
    let a = service.create_todo(NewTodo::new("a")).unwrap();
    service.create_todo(NewTodo::new("b")).unwrap();

    let done = service.complete_todo(&a.id).unwrap();
    assert_eq!(done.status, TodoStatus::Complete);
    assert_eq!(
        service.summary(),
        TodoSummary {
            total: 2,
            complete: 1,
            incomplete: 1,
        }
    );

    let reopened = service.reopen_todo(&a.id).unwrap();
    assert_eq!(reopened.status, TodoStatus::Incomplete);
    assert!(service.list_by_status(TodoStatus::Complete).is_empty());
}

#[test]
fn delete_then_undo_restores_record() {
    let mut service = TodoService::new();
    let todo = service
        .create_todo(NewTodo::new("call dentist").category("Health"))
        .unwrap();

    let removed = service.delete_todo(&todo.id[..8]).unwrap();
    assert_eq!(removed, todo);
    assert!(service.list_by_category("health").is_empty());

    match service.undo() {
        UndoOutcome::Reverted(entry) => assert_eq!(entry.action, UndoAction::Remove),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(service.list_by_category("HEALTH"), vec![todo]);
}

#[test]
fn search_and_undo_on_fresh_service() {
    let mut service = TodoService::new();
    assert_eq!(service.undo(), UndoOutcome::NothingToUndo);

    service
        .create_todo(NewTodo::new("Write report").description("quarterly numbers"))
        .unwrap();
    assert_eq!(service.search("NUMBERS").len(), 1);
    assert!(service.search("zzz-no-match").is_empty());
}

#[test]
fn with_store_keeps_existing_records_and_history() {
    let mut store = TodoStore::new();
    store
        .add(Todo::draft("prefilled").id("pre-1").build().unwrap())
        .unwrap();

    let mut service = TodoService::with_store(store);
    assert_eq!(service.get("pre").unwrap().title, "prefilled");
    assert_eq!(service.store().undo_depth(), 1);

    service.complete_todo("pre-1").unwrap();
    assert_eq!(service.summary().complete, 1);

    assert!(service.undo().is_reverted());
    assert!(service.undo().is_reverted());
    assert!(service.list_all().is_empty());
}
