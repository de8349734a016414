//! Repository trait definitions
//!
//! The storage collaborator is split along the two collections it holds.
//! Methods use RPITIT (Return Position Impl Trait In Traits) so backends can
//! implement them with plain `async fn` while handlers stay `Send`.
//!
//! # Example
//!
//! ```rust,ignore
//! use trivia_service::repository::{QuestionFilter, QuestionRepository, RepositoryResult};
//!
//! impl QuestionRepository for MyStore {
//!     async fn find_questions(&self, filter: &QuestionFilter) -> RepositoryResult<Vec<Question>> {
//!         // Implementation
//!         todo!()
//!     }
//!     // ... other required methods
//! }
//! ```

use std::future::Future;

use super::error::RepositoryError;
use super::filter::QuestionFilter;
use crate::models::{Category, CategoryId, NewQuestion, Question, QuestionId};

/// Result type for repository operations
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Read-only access to the seeded categories
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by ascending id
    fn find_categories(&self) -> impl Future<Output = RepositoryResult<Vec<Category>>> + Send;

    /// A single category, `Ok(None)` when the id is unknown
    fn find_category(
        &self,
        id: CategoryId,
    ) -> impl Future<Output = RepositoryResult<Option<Category>>> + Send;
}

/// Scan, insert and delete access to questions
pub trait QuestionRepository: Send + Sync {
    /// Questions matching `filter`, ordered by ascending id
    fn find_questions(
        &self,
        filter: &QuestionFilter,
    ) -> impl Future<Output = RepositoryResult<Vec<Question>>> + Send;

    /// Insert a question and return it with its assigned id
    fn create_question(
        &self,
        data: NewQuestion,
    ) -> impl Future<Output = RepositoryResult<Question>> + Send;

    /// Delete a question by id
    ///
    /// Returns `Ok(true)` if a row was removed and `Ok(false)` if the id did not
    /// exist, so a repeated delete of the same id is reported as missing rather
    /// than as a failure.
    fn delete_question(&self, id: QuestionId)
        -> impl Future<Output = RepositoryResult<bool>> + Send;
}

/// A complete storage backend that can be handed to the router
pub trait TriviaStore: CategoryRepository + QuestionRepository + Clone + 'static {
    /// Short backend name used in logs and readiness output
    fn backend(&self) -> &'static str;

    /// Check that the backend answers
    fn ping(&self) -> impl Future<Output = RepositoryResult<()>> + Send;
}
