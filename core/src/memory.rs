//! In-process `TodoStore` backed by a hash map.
//!
//! Used by the HTTP tests and for running the server without a database.
//! Ids use the same grammar as `MongoStore`, so clients cannot tell the two
//! apart.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::id::TodoId;
use crate::store::TodoStore;
use crate::types::{Todo, TodoFields};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    todos: Arc<RwLock<HashMap<TodoId, Todo>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn list_all(&self) -> StoreResult<Vec<Todo>> {
        let todos = self.todos.read().await;
        Ok(todos.values().cloned().collect())
    }

    async fn insert(&self, fields: TodoFields) -> StoreResult<Todo> {
        let todo = Todo::new(TodoId::generate(), fields);
        self.todos.write().await.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn find_by_id(&self, id: &TodoId) -> StoreResult<Todo> {
        let todos = self.todos.read().await;
        todos.get(id).cloned().ok_or(StoreError::NotFound)
    }

    async fn update_by_id(&self, id: &TodoId, fields: TodoFields) -> StoreResult<Todo> {
        let mut todos = self.todos.write().await;
        let todo = todos.get_mut(id).ok_or(StoreError::NotFound)?;
        todo.text = fields.text;
        todo.completed = fields.completed;
        Ok(todo.clone())
    }

    async fn delete_by_id(&self, id: &TodoId) -> StoreResult<u64> {
        let mut todos = self.todos.write().await;
        todos.remove(id).map(|_| 1).ok_or(StoreError::NotFound)
    }
}
