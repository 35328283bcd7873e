//! MongoDB-backed `TodoStore`.
//!
//! # Design
//! One `Client` is built at startup and its connection is verified with a
//! `ping` bounded by `StoreConfig::connect_timeout`. The driver pools
//! connections internally, so `MongoStore` is cheap to clone and is shared
//! across requests without extra locking.
//!
//! Documents are stored as `{ _id: ObjectId, text, completed }`. A document
//! that fails to decode is reported as `StoreError::Backend` rather than
//! being returned as an empty record.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::{ClientOptions, ReturnDocument};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::id::TodoId;
use crate::store::TodoStore;
use crate::types::{Todo, TodoFields};

/// Stored shape of a todo. `_id` is omitted on insert so the driver
/// assigns one.
#[derive(Debug, Serialize, Deserialize)]
struct TodoDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    #[serde(default)]
    text: String,
    #[serde(default)]
    completed: bool,
}

impl TodoDocument {
    fn into_todo(self) -> StoreResult<Todo> {
        let id = self
            .id
            .ok_or_else(|| StoreError::Backend("stored todo is missing _id".to_string()))?;
        Ok(Todo {
            id: TodoId::from(id),
            text: self.text,
            completed: self.completed,
        })
    }
}

impl From<TodoFields> for TodoDocument {
    fn from(fields: TodoFields) -> Self {
        Self {
            id: None,
            text: fields.text,
            completed: fields.completed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MongoStore {
    collection: Collection<TodoDocument>,
    op_timeout: Option<Duration>,
}

impl MongoStore {
    /// Connect to the configured deployment and verify it answers.
    ///
    /// Fails once `connect_timeout` elapses without a successful `ping`.
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(config.uri.as_str()).await?;
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.connect_timeout);

        let client = Client::with_options(options)?;
        let database = client.database(&config.database);

        tokio::time::timeout(config.connect_timeout, database.run_command(doc! { "ping": 1 }))
            .await
            .map_err(|_| StoreError::Timeout(config.connect_timeout))??;

        info!(
            database = %config.database,
            collection = %config.collection,
            "connected to MongoDB"
        );

        Ok(Self {
            collection: database.collection(&config.collection),
            op_timeout: config.op_timeout,
        })
    }

    async fn bounded<T, F>(&self, op: F) -> StoreResult<T>
    where
        F: Future<Output = StoreResult<T>> + Send,
    {
        match self.op_timeout {
            Some(limit) => tokio::time::timeout(limit, op)
                .await
                .map_err(|_| StoreError::Timeout(limit))?,
            None => op.await,
        }
    }

    async fn fetch_all(&self) -> StoreResult<Vec<Todo>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<TodoDocument> = cursor.try_collect().await?;
        documents.into_iter().map(TodoDocument::into_todo).collect()
    }

    async fn insert_document(&self, fields: TodoFields) -> StoreResult<Todo> {
        let document = TodoDocument::from(fields);
        let result = self.collection.insert_one(&document).await?;
        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            StoreError::Backend(format!(
                "store assigned a non-ObjectId _id: {}",
                result.inserted_id
            ))
        })?;
        debug!(%id, "inserted todo");
        Ok(Todo {
            id: TodoId::from(id),
            text: document.text,
            completed: document.completed,
        })
    }

    async fn fetch_one(&self, id: &TodoId) -> StoreResult<Todo> {
        self.collection
            .find_one(doc! { "_id": id.object_id() })
            .await?
            .ok_or(StoreError::NotFound)?
            .into_todo()
    }

    async fn set_fields(&self, id: &TodoId, fields: TodoFields) -> StoreResult<Todo> {
        let update = doc! {
            "$set": {
                "text": fields.text,
                "completed": fields.completed,
            }
        };
        self.collection
            .find_one_and_update(doc! { "_id": id.object_id() }, update)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or(StoreError::NotFound)?
            .into_todo()
    }

    async fn remove_one(&self, id: &TodoId) -> StoreResult<u64> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id.object_id() })
            .await?;
        if result.deleted_count == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(result.deleted_count)
    }
}

#[async_trait]
impl TodoStore for MongoStore {
    async fn list_all(&self) -> StoreResult<Vec<Todo>> {
        self.bounded(self.fetch_all()).await
    }

    async fn insert(&self, fields: TodoFields) -> StoreResult<Todo> {
        self.bounded(self.insert_document(fields)).await
    }

    async fn find_by_id(&self, id: &TodoId) -> StoreResult<Todo> {
        self.bounded(self.fetch_one(id)).await
    }

    async fn update_by_id(&self, id: &TodoId, fields: TodoFields) -> StoreResult<Todo> {
        self.bounded(self.set_fields(id, fields)).await
    }

    async fn delete_by_id(&self, id: &TodoId) -> StoreResult<u64> {
        self.bounded(self.remove_one(id)).await
    }
}
