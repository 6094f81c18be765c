pub mod config;
pub mod cors;
pub mod error;
pub mod store;
mod v1;

use std::sync::Arc;

use api::v1::Health;
use axum::{middleware, routing::get, Json, Router};
use axum_server::tls_rustls::RustlsConfig;
use tracing::info;

use crate::{config::Config, cors::Cors, error::StoreError, store::TodoStore};

const SEED_TODOS: [(&str, bool); 3] = [
    ("Buy milk", false),
    ("Buy strawberries", true),
    ("Review pull requests", false),
];

#[derive(Default, Debug)]
pub struct AppState {
    pub todos: TodoStore,
}

impl AppState {
    pub fn new(todos: TodoStore) -> Self {
        Self { todos }
    }

    pub fn seeded() -> Result<Self, StoreError> {
        Ok(Self::new(TodoStore::with_todos(SEED_TODOS)?))
    }
}

pub fn app(state: Arc<AppState>, cors: Cors) -> Router {
    Router::new()
        .nest("/api", v1::router())
        .route("/health", get(health))
        .with_state(state)
        .layer(middleware::from_fn_with_state(Arc::new(cors), cors::layer))
}

async fn health() -> Json<Health> {
    Json(Health::healthy())
}

pub async fn serve(config: Config) -> eyre::Result<()> {
    let state = if config.seed {
        AppState::seeded()?
    } else {
        AppState::default()
    };

    let app = app(Arc::new(state), Cors::new(&config.cors_origin)?);
    let addr = config.addr();

    match config.tls() {
        Some((cert, key)) => {
            let tls = RustlsConfig::from_pem_file(cert, key).await?;
            info!(%addr, "listening on https");

            axum_server::bind_rustls(addr, tls)
                .serve(app.into_make_service())
                .await?;
        }
        None => {
            info!(%addr, "listening on http");

            axum_server::bind(addr)
                .serve(app.into_make_service())
                .await?;
        }
    }

    Ok(())
}
