//! Quiz play handler

use axum::{extract::State, Json};
use tracing::instrument;

use super::extract::JsonBody;
use super::payload::QuizRequest;
use super::response::QuizResponse;
use crate::error::Result;
use crate::repository::TriviaStore;
use crate::state::AppState;
use crate::trivia::{next_question, QuizScope};

/// `POST /quizzes`
#[instrument(skip(state))]
pub async fn play_quiz<S: TriviaStore>(
    State(state): State<AppState<S>>,
    JsonBody(body): JsonBody<QuizRequest>,
) -> Result<Json<QuizResponse>> {
    let (category_id, previous_questions) = body.into_parts()?;
    let scope = QuizScope::from_category_id(category_id);

    let question = next_question(state.store(), scope, &previous_questions).await?;

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
