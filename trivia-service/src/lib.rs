//! # trivia-service
//!
//! HTTP service over a bank of trivia questions organized by category.
//!
//! ## Features
//!
//! - **Listing**: questions in fixed pages of 10 with the full category map
//! - **Search**: case-insensitive substring match on question text
//! - **Category filter**: questions of one category, 400 for unknown ids
//! - **Quiz play**: a random question the client has not been served yet
//! - **Storage**: PostgreSQL via sqlx (`database` feature) or an in-memory store
//! - **Operations**: liveness/readiness probes, request ids, graceful shutdown
//!
//! ## Example
//!
//! ```rust,no_run
//! use trivia_service::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let state = AppState::new(config.clone(), MemoryStore::seeded());
//!
//!     Server::new(config).serve(router(state)).await
//! }
//! ```

pub mod config;
#[cfg(feature = "database")]
pub mod database;
pub mod error;
pub mod handlers;
pub mod health;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod repository;
pub mod server;
pub mod state;
pub mod store;
pub mod trivia;

use axum::{routing::get, Router};

use crate::repository::TriviaStore;
use crate::state::AppState;

/// Build the complete application router over `state`
///
/// Middleware is applied separately by [`server::Server`].
pub fn router<S: TriviaStore>(state: AppState<S>) -> Router {
    handlers::routes::<S>()
        .route("/health", get(health::health::<S>))
        .route("/ready", get(health::readiness::<S>))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(state)
}

pub mod prelude {
    pub use crate::config::{Config, DatabaseConfig, MiddlewareConfig, ServiceConfig};
    pub use crate::error::{Error, ErrorResponse, Result};
    pub use crate::health::{health, readiness};
    pub use crate::middleware::{
        request_id_layer, request_id_propagation_layer, sensitive_headers_layer,
        MakeUuidRequestId, SENSITIVE_HEADERS,
    };
    pub use crate::models::{Category, CategoryId, NewQuestion, Question, QuestionId};
    pub use crate::observability::init_tracing;
    pub use crate::repository::{
        CategoryRepository, QuestionFilter, QuestionRepository, RepositoryError,
        RepositoryErrorKind, RepositoryOperation, RepositoryResult, TriviaStore,
    };
    pub use crate::router;
    pub use crate::server::Server;
    pub use crate::state::AppState;
    pub use crate::store::MemoryStore;
    #[cfg(feature = "database")]
    pub use crate::store::PgStore;
    pub use crate::trivia::{Page, QuizScope, SearchTerm, QUESTIONS_PER_PAGE};

    pub use axum::Router;
}
