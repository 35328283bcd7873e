mod common;

use todo_core::MemoryStore;

#[tokio::test]
async fn empty_collection_lists_nothing() {
    common::empty_collection_lists_nothing(&MemoryStore::new()).await;
}

#[tokio::test]
async fn inserted_ids_are_distinct() {
    common::inserted_ids_are_distinct(&MemoryStore::new()).await;
}

#[tokio::test]
async fn insert_then_find_round_trips() {
    common::insert_then_find_round_trips(&MemoryStore::new()).await;
}

#[tokio::test]
async fn update_keeps_id() {
    common::update_keeps_id(&MemoryStore::new()).await;
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    common::unknown_ids_are_not_found(&MemoryStore::new()).await;
}

#[tokio::test]
async fn delete_removes_record() {
    common::delete_removes_record(&MemoryStore::new()).await;
}

#[tokio::test]
async fn full_contract_on_one_store() {
    common::run_all(&MemoryStore::new()).await;
}
