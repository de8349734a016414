//! Search handler

use axum::{extract::State, Json};
use tracing::instrument;

use super::extract::{JsonBody, PageParam};
use super::payload::SearchRequest;
use super::response::SearchResponse;
use crate::error::Result;
use crate::repository::TriviaStore;
use crate::state::AppState;
use crate::trivia::{paginate, search, SearchTerm};

/// `POST /search`
///
/// An absent or null `searchTerm` matches every question.
#[instrument(skip(state))]
pub async fn search_questions<S: TriviaStore>(
    State(state): State<AppState<S>>,
    PageParam(page): PageParam,
    JsonBody(body): JsonBody<SearchRequest>,
) -> Result<Json<SearchResponse>> {
    let term = SearchTerm::normalize(body.search_term);
    let found = search(state.store(), &term).await?;

    Ok(Json(SearchResponse {
        success: true,
        questions: paginate(&found, page),
        total_questions: found.len(),
    }))
}
