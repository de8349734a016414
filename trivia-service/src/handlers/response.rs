//! Response bodies
//!
//! Every success body carries `"success": true`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Category, CategoryId, Question, QuestionId};

/// Categories as an `{id: type}` object
pub type CategoryMap = BTreeMap<CategoryId, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: QuestionId,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: QuestionId,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub current_category: CategoryId,
    pub total_questions: usize,
}

/// `question` is `null` once there is nothing left to ask
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}
