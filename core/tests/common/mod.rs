#![allow(dead_code)]

//! Behaviour every `TodoStore` backend must share.
//!
//! Each check starts from an empty collection and leaves it empty, so the
//! same sequence can run against the in-memory store and a live MongoDB.

use std::collections::HashSet;

use todo_core::{StoreError, TodoFields, TodoId, TodoStore};

fn fields(text: &str, completed: bool) -> TodoFields {
    TodoFields {
        text: text.to_string(),
        completed,
    }
}

/// A well-formed id that no store will ever have assigned.
fn unknown_id() -> TodoId {
    "000000000000000000000000".parse().unwrap()
}

pub async fn empty_collection_lists_nothing(store: &dyn TodoStore) {
    let todos = store.list_all().await.unwrap();
    assert!(todos.is_empty());
}

pub async fn inserted_ids_are_distinct(store: &dyn TodoStore) {
    let mut seen = HashSet::new();
    for n in 0..5 {
        let todo = store.insert(fields(&format!("item {n}"), false)).await.unwrap();
        assert!(!todo.id.to_string().is_empty());
        assert!(seen.insert(todo.id), "duplicate id {}", todo.id);
    }

    let listed: HashSet<TodoId> = store
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|todo| todo.id)
        .collect();
    assert_eq!(listed, seen);

    for id in &seen {
        store.delete_by_id(id).await.unwrap();
    }
}

pub async fn insert_then_find_round_trips(store: &dyn TodoStore) {
    let created = store.insert(fields("X", false)).await.unwrap();
    assert_eq!(created.text, "X");
    assert!(!created.completed);

    let fetched = store.find_by_id(&created.id).await.unwrap();
    assert_eq!(fetched, created);

    store.delete_by_id(&created.id).await.unwrap();
}

pub async fn update_keeps_id(store: &dyn TodoStore) {
    let created = store.insert(fields("buy milk", false)).await.unwrap();

    let updated = store
        .update_by_id(&created.id, fields("buy oat milk", true))
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.text, "buy oat milk");
    assert!(updated.completed);

    let fetched = store.find_by_id(&created.id).await.unwrap();
    assert_eq!(fetched, updated);

    store.delete_by_id(&created.id).await.unwrap();
}

pub async fn unknown_ids_are_not_found(store: &dyn TodoStore) {
    let id = unknown_id();
    assert!(matches!(store.find_by_id(&id).await, Err(StoreError::NotFound)));
    assert!(matches!(
        store.update_by_id(&id, fields("nope", true)).await,
        Err(StoreError::NotFound)
    ));
    assert!(matches!(store.delete_by_id(&id).await, Err(StoreError::NotFound)));
}

pub async fn delete_removes_record(store: &dyn TodoStore) {
    let created = store.insert(fields("temporary", true)).await.unwrap();
    assert_eq!(store.delete_by_id(&created.id).await.unwrap(), 1);

    assert!(matches!(
        store.find_by_id(&created.id).await,
        Err(StoreError::NotFound)
    ));
    assert!(matches!(
        store.delete_by_id(&created.id).await,
        Err(StoreError::NotFound)
    ));
    assert!(store.list_all().await.unwrap().is_empty());
}

pub async fn run_all(store: &dyn TodoStore) {
    empty_collection_lists_nothing(store).await;
    inserted_ids_are_distinct(store).await;
    insert_then_find_round_trips(store).await;
    update_keeps_id(store).await;
    unknown_ids_are_not_found(store).await;
    delete_removes_record(store).await;
    empty_collection_lists_nothing(store).await;
}
