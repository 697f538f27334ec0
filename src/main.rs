use std::sync::Arc;

use thirdfloor::store::{self, MessageStore};
use thirdfloor::{config, db, routes, session, state};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");

    let store: Arc<dyn MessageStore> = match config.database_url.as_deref() {
        Some(database_url) => {
            let pool = db::init_pool(database_url, config.db_max_connections)
                .await
                .expect("database init failed");
            tracing::info!(max_connections = config.db_max_connections, "using postgres message store");
            Arc::new(store::postgres::PgMessageStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, messages are kept in memory only");
            Arc::new(store::memory::MemoryStore::new())
        }
    };

    let state = state::AppState::new(store, config.page_size, config.cookie_secure);

    // Spawn background session sweeper.
    let _sweeper = session::spawn_sweeper(state.sessions.clone(), config.session_idle, config.session_sweep);

    let app = routes::app(state);
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, page_size = config.page_size, "thirdfloor listening");
    axum::serve(listener, app).await.expect("server failed");
}
