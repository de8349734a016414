//! Storage collaborator contract
//!
//! Handlers and the trivia components only talk to storage through these
//! traits. Concrete backends live in [`crate::store`].
//!
//! - [`CategoryRepository`]: read-only category lookups
//! - [`QuestionRepository`]: ordered scans, insert and delete for questions
//! - [`TriviaStore`]: both of the above plus a health ping
//! - [`QuestionFilter`]: equality and substring selection

mod error;
mod filter;
mod traits;

pub use error::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
pub use filter::QuestionFilter;
pub use traits::{CategoryRepository, QuestionRepository, RepositoryResult, TriviaStore};
