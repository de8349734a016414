//! HTTP handlers and routes

pub mod categories;
pub mod extract;
pub mod payload;
pub mod questions;
pub mod quizzes;
pub mod response;
pub mod search;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::error::Error;
use crate::repository::TriviaStore;
use crate::state::AppState;

/// Routes of the trivia API
pub fn routes<S: TriviaStore>() -> Router<AppState<S>> {
    Router::new()
        .route("/categories", get(categories::list_categories::<S>))
        .route(
            "/categories/{id}/questions",
            get(categories::questions_by_category::<S>),
        )
        .route(
            "/questions",
            get(questions::list_questions::<S>).post(questions::create_question::<S>),
        )
        .route("/questions/{id}", delete(questions::delete_question::<S>))
        .route("/search", post(search::search_questions::<S>))
        .route("/quizzes", post(quizzes::play_quiz::<S>))
}

/// Fallback for paths no route matches
pub async fn not_found() -> Error {
    Error::NotFound("resource not found".to_string())
}

/// Fallback for a known path requested with the wrong method
pub async fn method_not_allowed() -> Error {
    Error::MethodNotAllowed
}
