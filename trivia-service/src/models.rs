//! Domain models shared by the storage layer and the HTTP handlers

use serde::{Deserialize, Serialize};

/// Identifier assigned to a question by the store on insert
pub type QuestionId = i64;

/// Identifier of a seeded category
pub type CategoryId = i64;

/// A stored trivia question
///
/// Serializes to the wire shape `{id, question, answer, difficulty, category}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: CategoryId,
}

/// A question category such as "Science"
///
/// Categories are seeded outside the service and only ever read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct Category {
    pub id: CategoryId,

    /// Display label, stored in the `type` column
    #[serde(rename = "type")]
    #[cfg_attr(feature = "database", sqlx(rename = "type"))]
    pub kind: String,
}

impl Category {
    pub fn new(id: CategoryId, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Validated data for inserting a question
///
/// The category reference is not checked against existing categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

impl NewQuestion {
    /// Attach the id chosen by the store
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            difficulty: self.difficulty,
            category: self.category,
        }
    }
}

/// Categories every fresh store starts with
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new(1, "Science"),
        Category::new(2, "Art"),
        Category::new(3, "Geography"),
        Category::new(4, "History"),
        Category::new(5, "Entertainment"),
        Category::new(6, "Sports"),
    ]
}
