//! Questions belonging to one category

use crate::error::{Error, Result};
use crate::models::{Category, CategoryId, Question};
use crate::repository::{CategoryRepository, QuestionFilter, QuestionRepository};

/// A validated category and every question filed under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryQuestions {
    pub category: Category,
    pub questions: Vec<Question>,
}

/// Load the questions of category `id`
///
/// An unknown category is a [`Error::BadRequest`], unlike the other lookups in
/// the service. A known category with no questions is not an error.
pub async fn questions_in_category<S>(store: &S, id: CategoryId) -> Result<CategoryQuestions>
where
    S: CategoryRepository + QuestionRepository,
{
    let category = store
        .find_category(id)
        .await?
        .ok_or_else(|| Error::BadRequest(format!("category {} does not exist", id)))?;

    let questions = store
        .find_questions(&QuestionFilter::Category(category.id))
        .await?;

    Ok(CategoryQuestions {
        category,
        questions,
    })
}
