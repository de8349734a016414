//! Question selection criteria understood by every store

use std::fmt;

use crate::models::CategoryId;

/// Which questions a scan should return
///
/// Every variant yields questions ordered by ascending id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QuestionFilter {
    /// Every stored question
    #[default]
    All,
    /// Questions whose `category` equals the id
    Category(CategoryId),
    /// Questions whose text contains the term, ignoring case
    ///
    /// The term is matched literally; an empty term matches everything.
    TextContains(String),
}

impl QuestionFilter {
    pub fn text_contains(term: impl Into<String>) -> Self {
        Self::TextContains(term.into())
    }
}

impl fmt::Display for QuestionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Category(id) => write!(f, "category = {}", id),
            Self::TextContains(term) => write!(f, "question ILIKE '%{}%'", term),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all() {
        assert_eq!(QuestionFilter::default(), QuestionFilter::All);
    }

    #[test]
    fn test_display() {
        assert_eq!(QuestionFilter::All.to_string(), "all");
        assert_eq!(QuestionFilter::Category(4).to_string(), "category = 4");
        assert_eq!(
            QuestionFilter::text_contains("title").to_string(),
            "question ILIKE '%title%'"
        );
    }
}
