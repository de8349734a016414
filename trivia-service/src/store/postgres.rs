//! PostgreSQL store

use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::database::create_pool;
use crate::error::Result;
use crate::models::{Category, CategoryId, NewQuestion, Question, QuestionId};
use crate::repository::{
    CategoryRepository, QuestionFilter, QuestionRepository, RepositoryError, RepositoryOperation,
    RepositoryResult, TriviaStore,
};

const SELECT_QUESTIONS: &str = "SELECT id, question, answer, difficulty, category FROM questions";

/// Store backed by the `categories` and `questions` tables
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect with retries and apply pending migrations
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = create_pool(config).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations applied");
        Ok(Self { pool })
    }
}

/// Escape LIKE wildcards so the term is matched literally
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

impl CategoryRepository for PgStore {
    async fn find_categories(&self) -> RepositoryResult<Vec<Category>> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::from(e).with_operation(RepositoryOperation::FindAll))
    }

    async fn find_category(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                RepositoryError::from(e)
                    .with_operation(RepositoryOperation::FindById)
                    .with_entity("Category", id.to_string())
            })
    }
}

impl QuestionRepository for PgStore {
    async fn find_questions(&self, filter: &QuestionFilter) -> RepositoryResult<Vec<Question>> {
        let result = match filter {
            QuestionFilter::All => {
                sqlx::query_as::<_, Question>(&format!("{SELECT_QUESTIONS} ORDER BY id"))
                    .fetch_all(&self.pool)
                    .await
            }
            QuestionFilter::Category(id) => {
                sqlx::query_as::<_, Question>(&format!(
                    "{SELECT_QUESTIONS} WHERE category = $1 ORDER BY id"
                ))
                .bind(*id)
                .fetch_all(&self.pool)
                .await
            }
            QuestionFilter::TextContains(term) => {
                sqlx::query_as::<_, Question>(&format!(
                    "{SELECT_QUESTIONS} WHERE question ILIKE $1 ESCAPE '\\' ORDER BY id"
                ))
                .bind(like_pattern(term))
                .fetch_all(&self.pool)
                .await
            }
        };

        result.map_err(|e| RepositoryError::from(e).with_operation(RepositoryOperation::FindAll))
    }

    async fn create_question(&self, data: NewQuestion) -> RepositoryResult<Question> {
        let question = sqlx::query_as::<_, Question>(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, question, answer, difficulty, category",
        )
        .bind(&data.question)
        .bind(&data.answer)
        .bind(data.category)
        .bind(data.difficulty)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::from(e).with_operation(RepositoryOperation::Create))?;

        Ok(question)
    }

    async fn delete_question(&self, id: QuestionId) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                RepositoryError::from(e)
                    .with_operation(RepositoryOperation::Delete)
                    .with_entity("Question", id.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }
}

impl TriviaStore for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn ping(&self) -> RepositoryResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| RepositoryError::from(e).with_operation(RepositoryOperation::Ping))
    }
}
