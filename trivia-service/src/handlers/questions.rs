//! Question listing, creation and deletion

use axum::{extract::State, Json};
use tracing::{info, instrument};

use super::extract::{IdPath, JsonBody, PageParam};
use super::payload::QuestionDraft;
use super::response::{category_map, CreatedResponse, DeletedResponse, QuestionPageResponse};
use crate::error::{Error, Result};
use crate::models::Question;
use crate::repository::{QuestionFilter, RepositoryOperation, TriviaStore};
use crate::state::AppState;
use crate::trivia::{paginate, Page};

/// `GET /questions`
#[instrument(skip(state))]
pub async fn list_questions<S: TriviaStore>(
    State(state): State<AppState<S>>,
    PageParam(page): PageParam,
) -> Result<Json<QuestionPageResponse>> {
    let store = state.store();
    let all = store.find_questions(&QuestionFilter::All).await?;
    let questions = paginate(&all, page);

    if questions.is_empty() {
        return Err(Error::NotFound(format!(
            "no questions on page {}",
            page.number()
        )));
    }

    let categories = store.find_categories().await?;

    Ok(Json(QuestionPageResponse {
        success: true,
        questions,
        total_questions: all.len(),
        categories: category_map(categories),
    }))
}

/// `POST /questions`
#[instrument(skip(state))]
pub async fn create_question<S: TriviaStore>(
    State(state): State<AppState<S>>,
    PageParam(page): PageParam,
    JsonBody(draft): JsonBody<QuestionDraft>,
) -> Result<Json<CreatedResponse>> {
    let new_question = draft.validate()?;
    let store = state.store();

    let created = store
        .create_question(new_question)
        .await
        .map_err(|e| Error::unprocessable(RepositoryOperation::Create, e))?;

    info!(
        question_id = created.id,
        category = created.category,
        "Created question"
    );

    let (questions, total_questions) =
        listing_after_write(&state, page, RepositoryOperation::Create).await?;

    Ok(Json(CreatedResponse {
        success: true,
        created: created.id,
        questions,
        total_questions,
    }))
}

/// `DELETE /questions/{id}`
#[instrument(skip(state))]
pub async fn delete_question<S: TriviaStore>(
    State(state): State<AppState<S>>,
    IdPath(id): IdPath,
    PageParam(page): PageParam,
) -> Result<Json<DeletedResponse>> {
    let removed = state
        .store()
        .delete_question(id)
        .await
        .map_err(|e| Error::unprocessable(RepositoryOperation::Delete, e))?;

    if !removed {
        return Err(Error::NotFound(format!("question {} does not exist", id)));
    }

    info!(question_id = id, "Deleted question");

    let (questions, total_questions) =
        listing_after_write(&state, page, RepositoryOperation::Delete).await?;

    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
        questions,
        total_questions,
    }))
}

/// Page of the full listing returned after a write
///
/// A storage fault here is part of the failed write and reported as 422.
async fn listing_after_write<S: TriviaStore>(
    state: &AppState<S>,
    page: Page,
    write: RepositoryOperation,
) -> Result<(Vec<Question>, usize)> {
    let all = state
        .store()
        .find_questions(&QuestionFilter::All)
        .await
        .map_err(|e| Error::unprocessable(write, e))?;

    Ok((paginate(&all, page), all.len()))
}
