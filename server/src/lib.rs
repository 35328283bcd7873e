//! HTTP front end for the todo store.
//!
//! `app` builds the router around an injected `AppState`; `run` serves it on
//! a bound listener until the shutdown future resolves.

use std::future::Future;
use std::sync::Arc;

use axum::{routing::get, Router};
use todo_core::TodoStore;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod handlers;
pub mod telemetry;

pub use config::{Config, ConfigError, StoreBackend};
pub use error::ApiError;

/// State shared by every handler. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
}

impl AppState {
    pub fn new(store: impl TodoStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown)
        .await
}
