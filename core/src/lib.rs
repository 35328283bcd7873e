//! Record model and store adapters for the todo service.
//!
//! # Overview
//! Defines the `Todo` record, its opaque `TodoId`, and the `TodoStore`
//! contract that the HTTP layer talks to. Two stores implement the contract:
//! `MongoStore` for production and `MemoryStore` for tests and local runs.
//!
//! # Design
//! - The HTTP layer never touches driver types. Identifiers cross the
//!   boundary only through `TodoId`'s `FromStr` / `Display`.
//! - Stores are injected as `Arc<dyn TodoStore>`; there is no global handle.
//! - Every store failure surfaces as a `StoreError`. Nothing is retried.

pub mod config;
pub mod error;
pub mod id;
pub mod memory;
pub mod mongo;
pub mod store;
pub mod types;

pub use config::StoreConfig;
pub use error::{InvalidId, StoreError, StoreResult};
pub use id::TodoId;
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::TodoStore;
pub use types::{Todo, TodoFields};
