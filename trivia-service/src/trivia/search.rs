//! Case-insensitive substring search over question text

use std::fmt;

use crate::error::{Error, Result};
use crate::models::Question;
use crate::repository::{QuestionFilter, QuestionRepository};

/// A normalized search term
///
/// An absent term is the empty string, which every question contains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Turn the optional request value into a term
    pub fn normalize(raw: Option<String>) -> Self {
        Self(raw.unwrap_or_default())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Literal, case-insensitive substring test
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// All questions whose text contains `term`
///
/// An empty match set is reported as [`Error::NotFound`].
pub async fn search<R: QuestionRepository>(repo: &R, term: &SearchTerm) -> Result<Vec<Question>> {
    let found = repo
        .find_questions(&QuestionFilter::text_contains(term.as_str()))
        .await?;

    if found.is_empty() {
        return Err(Error::NotFound(format!(
            "no questions contain \"{}\"",
            term
        )));
    }

    tracing::debug!(term = %term, matches = found.len(), "Search matched questions");
    Ok(found)
}
