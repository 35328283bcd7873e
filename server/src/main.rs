use anyhow::Context;
use todo_core::{MemoryStore, MongoStore};
use todo_server::{telemetry, AppState, Config, StoreBackend};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    let config = Config::from_env().context("invalid configuration")?;

    let state = match config.backend {
        StoreBackend::Mongo => {
            info!(
                database = %config.store.database,
                collection = %config.store.collection,
                timeout = ?config.store.connect_timeout,
                "connecting to MongoDB"
            );
            let store = MongoStore::connect(&config.store)
                .await
                .context("failed to connect to MongoDB")?;
            AppState::new(store)
        }
        StoreBackend::Memory => {
            warn!("using in-memory store; records are lost on exit");
            AppState::new(MemoryStore::new())
        }
    };

    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(addr = %config.listen_addr, "listening");

    todo_server::run(listener, state, telemetry::shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}
