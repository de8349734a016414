//! Category handlers

use axum::{extract::State, Json};
use tracing::instrument;

use super::extract::{IdPath, PageParam};
use super::response::{category_map, CategoriesResponse, CategoryQuestionsResponse};
use crate::error::{Error, Result};
use crate::repository::TriviaStore;
use crate::state::AppState;
use crate::trivia::{paginate, questions_in_category};

/// `GET /categories`
#[instrument(skip(state))]
pub async fn list_categories<S: TriviaStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<CategoriesResponse>> {
    let categories = state.store().find_categories().await?;

    if categories.is_empty() {
        return Err(Error::NotFound("no categories available".to_string()));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

/// `GET /categories/{id}/questions`
#[instrument(skip(state))]
pub async fn questions_by_category<S: TriviaStore>(
    State(state): State<AppState<S>>,
    IdPath(id): IdPath,
    PageParam(page): PageParam,
) -> Result<Json<CategoryQuestionsResponse>> {
    let found = questions_in_category(state.store(), id).await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: paginate(&found.questions, page),
        current_category: found.category.id,
        total_questions: found.questions.len(),
    }))
}
