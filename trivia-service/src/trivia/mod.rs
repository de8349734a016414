//! Question selection logic behind the HTTP routes
//!
//! - [`pagination`]: fixed 10-item pages over a fetched list
//! - [`search`]: case-insensitive substring matching
//! - [`category_filter`]: questions of one validated category
//! - [`quiz`]: random unseen question for quiz play

pub mod category_filter;
pub mod pagination;
pub mod quiz;
pub mod search;

pub use category_filter::{questions_in_category, CategoryQuestions};
pub use pagination::{paginate, Page, QUESTIONS_PER_PAGE};
pub use quiz::{next_question, select_question, QuizScope, ALL_CATEGORIES};
pub use search::{search, SearchTerm};
