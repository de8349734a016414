//! In-process store used when no database is configured and in tests

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{default_categories, Category, CategoryId, NewQuestion, Question, QuestionId};
use crate::repository::{
    CategoryRepository, QuestionFilter, QuestionRepository, RepositoryResult, TriviaStore,
};
use crate::trivia::search::contains_ignore_case;

#[derive(Debug, Default)]
struct Inner {
    categories: BTreeMap<CategoryId, Category>,
    questions: BTreeMap<QuestionId, Question>,
    next_id: QuestionId,
}

/// Thread-safe in-memory store
///
/// Clones share the same data. Ids are never reused, even after a delete.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    /// An empty store without categories
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the default categories and no questions
    pub fn seeded() -> Self {
        Self::with_categories(default_categories())
    }

    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let inner = Inner {
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
            questions: BTreeMap::new(),
            next_id: 1,
        };
        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    /// Number of stored questions
    pub async fn question_count(&self) -> usize {
        self.inner.read().await.questions.len()
    }
}

impl CategoryRepository for MemoryStore {
    async fn find_categories(&self) -> RepositoryResult<Vec<Category>> {
        Ok(self.inner.read().await.categories.values().cloned().collect())
    }

    async fn find_category(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        Ok(self.inner.read().await.categories.get(&id).cloned())
    }
}

impl QuestionRepository for MemoryStore {
    async fn find_questions(&self, filter: &QuestionFilter) -> RepositoryResult<Vec<Question>> {
        let inner = self.inner.read().await;
        let questions = inner.questions.values();

        let found = match filter {
            QuestionFilter::All => questions.cloned().collect(),
            QuestionFilter::Category(id) => {
                questions.filter(|q| q.category == *id).cloned().collect()
            }
            QuestionFilter::TextContains(term) => questions
                .filter(|q| contains_ignore_case(&q.question, term))
                .cloned()
                .collect(),
        };

        Ok(found)
    }

    async fn create_question(&self, data: NewQuestion) -> RepositoryResult<Question> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id.max(1);
        inner.next_id = id + 1;

        let question = data.into_question(id);
        inner.questions.insert(id, question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: QuestionId) -> RepositoryResult<bool> {
        Ok(self.inner.write().await.questions.remove(&id).is_some())
    }
}

impl TriviaStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> RepositoryResult<()> {
        Ok(())
    }
}
