#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use trivia_service::prelude::*;

/// Router over `store` with default configuration
pub fn app<S: TriviaStore>(store: S) -> Router {
    router(AppState::new(Config::default(), store))
}

/// Seeded store holding `count` questions spread over categories 1 to 4
pub async fn store_with_questions(count: usize) -> MemoryStore {
    let store = MemoryStore::seeded();
    for i in 0..count {
        store
            .create_question(NewQuestion {
                question: format!("Question {}", i + 1),
                answer: format!("Answer {}", i + 1),
                category: (i % 4) as CategoryId + 1,
                difficulty: (i % 5) as i32 + 1,
            })
            .await
            .expect("insert should succeed");
    }
    store
}

pub async fn add_question(store: &MemoryStore, text: &str, category: CategoryId) -> Question {
    store
        .create_question(NewQuestion {
            question: text.to_string(),
            answer: "answer".to_string(),
            category,
            difficulty: 1,
        })
        .await
        .expect("insert should succeed")
}

/// Send a request with an optional JSON body and decode the JSON response
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    match body {
        Some(json) => send_raw(app, method, uri, Some("application/json"), json.to_string()).await,
        None => send_raw(app, method, uri, None, String::new()).await,
    }
}

pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: String,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder
        .body(Body::from(body))
        .expect("request build should succeed");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router should respond");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body should be JSON")
    };

    (status, json)
}

pub fn ids(questions: &Value) -> Vec<i64> {
    questions
        .as_array()
        .expect("questions should be an array")
        .iter()
        .map(|q| q["id"].as_i64().expect("id should be an integer"))
        .collect()
}

/// Store whose reads or writes fail like an unreachable database
#[derive(Clone, Default)]
pub struct FailingStore {
    pub inner: MemoryStore,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl FailingStore {
    pub fn failing_reads() -> Self {
        Self {
            inner: MemoryStore::seeded(),
            fail_reads: true,
            fail_writes: false,
        }
    }

    pub fn failing_writes(inner: MemoryStore) -> Self {
        Self {
            inner,
            fail_reads: false,
            fail_writes: true,
        }
    }

    fn check(&self, failing: bool, operation: RepositoryOperation) -> RepositoryResult<()> {
        if failing {
            Err(RepositoryError::connection_failed("connection refused").with_operation(operation))
        } else {
            Ok(())
        }
    }
}

impl CategoryRepository for FailingStore {
    async fn find_categories(&self) -> RepositoryResult<Vec<Category>> {
        self.check(self.fail_reads, RepositoryOperation::FindAll)?;
        self.inner.find_categories().await
    }

    async fn find_category(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        self.check(self.fail_reads, RepositoryOperation::FindById)?;
        self.inner.find_category(id).await
    }
}

impl QuestionRepository for FailingStore {
    async fn find_questions(&self, filter: &QuestionFilter) -> RepositoryResult<Vec<Question>> {
        self.check(self.fail_reads, RepositoryOperation::FindAll)?;
        self.inner.find_questions(filter).await
    }

    async fn create_question(&self, data: NewQuestion) -> RepositoryResult<Question> {
        self.check(self.fail_writes, RepositoryOperation::Create)?;
        self.inner.create_question(data).await
    }

    async fn delete_question(&self, id: QuestionId) -> RepositoryResult<bool> {
        self.check(self.fail_writes, RepositoryOperation::Delete)?;
        self.inner.delete_question(id).await
    }
}

impl TriviaStore for FailingStore {
    fn backend(&self) -> &'static str {
        "failing"
    }

    async fn ping(&self) -> RepositoryResult<()> {
        self.check(self.fail_reads, RepositoryOperation::Ping)
    }
}
