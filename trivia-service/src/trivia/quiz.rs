//! Random question selection for quiz play
//!
//! The client keeps the list of questions it has already been served and sends
//! it with every request. Selection removes those ids from the pool once and
//! draws uniformly from what is left, so it finishes in a single pass no
//! matter how much of the pool has been seen.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashSet;
//! use rand::{rngs::StdRng, SeedableRng};
//! use trivia_service::models::Question;
//! use trivia_service::trivia::quiz::select_question;
//!
//! let pool: Vec<Question> = (1..=3)
//!     .map(|id| Question {
//!         id,
//!         question: format!("Question {id}"),
//!         answer: "42".to_string(),
//!         difficulty: 1,
//!         category: 1,
//!     })
//!     .collect();
//! let seen: HashSet<i64> = [1, 2].into_iter().collect();
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! assert_eq!(select_question(pool, &seen, &mut rng).map(|q| q.id), Some(3));
//! ```

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::error::Result;
use crate::models::{CategoryId, Question, QuestionId};
use crate::repository::{QuestionFilter, QuestionRepository};

/// Category id that selects questions from every category
pub const ALL_CATEGORIES: CategoryId = 0;

/// Where quiz questions are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(CategoryId),
}

impl QuizScope {
    /// Map the client's category id, where [`ALL_CATEGORIES`] means no filter
    pub fn from_category_id(id: CategoryId) -> Self {
        if id == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(id)
        }
    }

    pub fn filter(&self) -> QuestionFilter {
        match self {
            Self::All => QuestionFilter::All,
            Self::Category(id) => QuestionFilter::Category(*id),
        }
    }
}

/// Pool questions that have not been served yet, in pool order
pub fn eligible<'a>(pool: &'a [Question], previous: &HashSet<QuestionId>) -> Vec<&'a Question> {
    pool.iter()
        .filter(|question| !previous.contains(&question.id))
        .collect()
}

/// Draw one unseen question uniformly at random
///
/// Returns `None` when the pool is empty or every question in it has been
/// served already.
pub fn select_question<R>(
    pool: Vec<Question>,
    previous: &HashSet<QuestionId>,
    rng: &mut R,
) -> Option<Question>
where
    R: Rng + ?Sized,
{
    eligible(&pool, previous).choose(rng).map(|q| (*q).clone())
}

/// Serve the next quiz question for `scope`
///
/// `Ok(None)` is the signal that there is nothing left to ask.
pub async fn next_question<R: QuestionRepository>(
    repo: &R,
    scope: QuizScope,
    previous_questions: &[QuestionId],
) -> Result<Option<Question>> {
    let pool = repo.find_questions(&scope.filter()).await?;
    let previous: HashSet<QuestionId> = previous_questions.iter().copied().collect();
    let pool_size = pool.len();

    let selected = select_question(pool, &previous, &mut rand::rng());

    match &selected {
        Some(question) => tracing::debug!(
            ?scope,
            pool_size,
            seen = previous.len(),
            question_id = question.id,
            "Selected quiz question"
        ),
        None => tracing::debug!(?scope, pool_size, seen = previous.len(), "Quiz pool exhausted"),
    }

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool(ids: impl IntoIterator<Item = QuestionId>) -> Vec<Question> {
        ids.into_iter()
            .map(|id| Question {
                id,
                question: format!("Question {}", id),
                answer: format!("Answer {}", id),
                difficulty: 1,
                category: 1,
            })
            .collect()
    }

    #[test]
    fn test_scope_from_category_id() {
        assert_eq!(QuizScope::from_category_id(0), QuizScope::All);
        assert_eq!(QuizScope::from_category_id(3), QuizScope::Category(3));
        assert_eq!(QuizScope::All.filter(), QuestionFilter::All);
        assert_eq!(QuizScope::Category(3).filter(), QuestionFilter::Category(3));
    }

    #[test]
    fn test_eligible_excludes_previous() {
        let questions = pool(1..=5);
        let previous: HashSet<QuestionId> = [2, 4, 99].into_iter().collect();
        let ids: Vec<QuestionId> = eligible(&questions, &previous).iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[test]
    fn test_single_remaining_question_is_always_returned() {
        let previous: HashSet<QuestionId> = (1..=9).collect();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let selected = select_question(pool(1..=10), &previous, &mut rng);
            assert_eq!(selected.map(|q| q.id), Some(10));
        }
    }

    #[test]
    fn test_exhausted_pool_returns_none() {
        let previous: HashSet<QuestionId> = (1..=10).collect();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(select_question(pool(1..=10), &previous, &mut rng).is_none());
    }

    #[test]
    fn test_empty_pool_returns_none() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(select_question(Vec::new(), &HashSet::new(), &mut rng).is_none());
    }

    #[test]
    fn test_never_returns_seen_question() {
        let previous: HashSet<QuestionId> = [1, 3, 5, 7].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let selected = select_question(pool(1..=8), &previous, &mut rng).unwrap();
            assert!(!previous.contains(&selected.id));
        }
    }

    #[test]
    fn test_selection_covers_every_eligible_question() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let selected = select_question(pool(1..=4), &HashSet::new(), &mut rng).unwrap();
            seen.insert(selected.id);
        }
        assert_eq!(seen, (1..=4).collect());
    }
}
