//! Request bodies

use std::fmt;

use serde::{de, Deserialize, Deserializer};

use crate::error::{Error, Result};
use crate::models::{CategoryId, NewQuestion, QuestionId};

/// Deserialize an optional integer sent either as a JSON number or as a
/// string holding one. Web clients often send ids as object keys, which are
/// strings.
fn deserialize_lenient_i64<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Option<i64>, D::Error> {
    struct Vis;

    impl<'de> de::Visitor<'de> for Vis {
        type Value = Option<i64>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("integer or numeric string")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Self::Value, E> {
            i64::try_from(v).map(Some).map_err(E::custom)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
            v.trim().parse().map(Some).map_err(E::custom)
        }

        fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2: Deserializer<'de>>(self, d: D2) -> std::result::Result<Self::Value, D2::Error> {
            d.deserialize_any(self)
        }
    }

    d.deserialize_any(Vis)
}

/// Body of `POST /questions` before validation
#[derive(Debug, Default, Deserialize)]
pub struct QuestionDraft {
    #[serde(default)]
    pub question: Option<String>,

    #[serde(default)]
    pub answer: Option<String>,

    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub category: Option<i64>,

    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub difficulty: Option<i64>,
}

impl QuestionDraft {
    /// Check required fields and produce an insertable question
    pub fn validate(self) -> Result<NewQuestion> {
        let question = required_text(self.question, "question")?;
        let answer = required_text(self.answer, "answer")?;
        let category: CategoryId = self
            .category
            .ok_or_else(|| Error::Unprocessable("category is required".to_string()))?;
        let difficulty = self
            .difficulty
            .ok_or_else(|| Error::Unprocessable("difficulty is required".to_string()))
            .and_then(|d| {
                i32::try_from(d)
                    .map_err(|_| Error::Unprocessable("difficulty is out of range".to_string()))
            })?;

        Ok(NewQuestion {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

fn required_text(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(Error::Unprocessable(format!("{} is required", field))),
    }
}

/// Body of `POST /search`
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Category selected for quiz play; id 0 stands for every category
#[derive(Debug, Default, Deserialize)]
pub struct QuizCategory {
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub id: Option<CategoryId>,
}

/// Body of `POST /quizzes`
#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,

    #[serde(default)]
    pub previous_questions: Option<Vec<QuestionId>>,
}

impl QuizRequest {
    /// Category id and seen ids, both required
    pub fn into_parts(self) -> Result<(CategoryId, Vec<QuestionId>)> {
        let category = self
            .quiz_category
            .ok_or_else(|| Error::BadRequest("quiz_category is required".to_string()))?;
        let category_id = category
            .id
            .ok_or_else(|| Error::BadRequest("quiz_category.id is required".to_string()))?;
        let previous = self
            .previous_questions
            .ok_or_else(|| Error::BadRequest("previous_questions is required".to_string()))?;

        Ok((category_id, previous))
    }
}
