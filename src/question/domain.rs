//! Core question domain types.

use serde::{Deserialize, Serialize};

use crate::{Error, category::CategoryId, deserializers::deserialize_optional_integer};

/// Database identifier for a question.
pub type QuestionId = i64;

/// A trivia question and its expected answer.
///
/// Serializes as `{id, question, answer, category, difficulty}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Question {
    /// The ID of the question.
    pub id: QuestionId,
    /// The question text shown to the player.
    pub question: String,
    /// The expected answer.
    pub answer: String,
    /// The ID of the category the question belongs to.
    pub category: CategoryId,
    /// How hard the question is, usually 1 to 5.
    pub difficulty: i64,
}

/// A question that has not been saved to the database yet.
///
/// The category is not checked against the category table, so a question may
/// refer to a category that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    /// The question text, must not be empty.
    pub question: String,
    /// The expected answer, must not be empty.
    pub answer: String,
    /// The category ID.
    pub category: CategoryId,
    /// The difficulty rating.
    pub difficulty: i64,
}

/// The JSON body for creating a question.
///
/// Every field is optional here so that a missing field is reported as a bad
/// request by [NewQuestion::try_from] rather than as a parsing error.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct NewQuestionData {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_integer")]
    pub category: Option<CategoryId>,
    #[serde(default, deserialize_with = "deserialize_optional_integer")]
    pub difficulty: Option<i64>,
}

impl TryFrom<NewQuestionData> for NewQuestion {
    type Error = Error;

    fn try_from(data: NewQuestionData) -> Result<Self, Self::Error> {
        let missing = |field: &str| Error::InvalidRequest(format!("missing field `{field}`"));

        Ok(Self {
            question: data.question.ok_or_else(|| missing("question"))?,
            answer: data.answer.ok_or_else(|| missing("answer"))?,
            category: data.category.ok_or_else(|| missing("category"))?,
            difficulty: data.difficulty.ok_or_else(|| missing("difficulty"))?,
        })
    }
}

/// The response body for endpoints that return a filtered list of questions.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct QuestionListResponse {
    /// Always `true`, errors use the error envelope instead.
    pub success: bool,
    /// The matching questions, ordered by ID.
    pub questions: Vec<Question>,
    /// The number of matching questions.
    pub total_questions: usize,
    /// The category the questions were filtered by, if any.
    pub current_category: Option<CategoryId>,
}

impl QuestionListResponse {
    /// Wrap `questions`, with `total_questions` set to the number of questions.
    pub fn new(questions: Vec<Question>, current_category: Option<CategoryId>) -> Self {
        Self {
            success: true,
            total_questions: questions.len(),
            questions,
            current_category,
        }
    }
}

#[cfg(test)]
mod new_question_tests {
    use serde_json::json;

    use crate::{
        Error,
        question::{NewQuestion, NewQuestionData, Question},
    };

    #[test]
    fn converts_complete_data() {
        let data: NewQuestionData = serde_json::from_value(json!({
            "question": "Q",
            "answer": "A",
            "category": 1,
            "difficulty": "2"
        }))
        .unwrap();

        let got = NewQuestion::try_from(data);

        assert_eq!(
            got,
            Ok(NewQuestion {
                question: "Q".to_owned(),
                answer: "A".to_owned(),
                category: 1,
                difficulty: 2,
            })
        );
    }

    #[test]
    fn null_field_is_invalid() {
        let data: NewQuestionData = serde_json::from_value(json!({
            "question": "Q",
            "answer": null,
            "category": 1,
            "difficulty": 2
        }))
        .unwrap();

        let got = NewQuestion::try_from(data);

        assert_eq!(
            got,
            Err(Error::InvalidRequest("missing field `answer`".to_owned()))
        );
    }

    #[test]
    fn missing_field_is_invalid() {
        let data: NewQuestionData = serde_json::from_value(json!({
            "question": "Q",
            "answer": "A",
            "category": 1
        }))
        .unwrap();

        let got = NewQuestion::try_from(data);

        assert_eq!(
            got,
            Err(Error::InvalidRequest("missing field `difficulty`".to_owned()))
        );
    }

    #[test]
    fn question_serializes_all_fields() {
        let question = Question {
            id: 5,
            question: "What is the boiling point of water?".to_owned(),
            answer: "100°C".to_owned(),
            category: 1,
            difficulty: 1,
        };

        assert_eq!(
            serde_json::to_value(&question).unwrap(),
            json!({
                "id": 5,
                "question": "What is the boiling point of water?",
                "answer": "100°C",
                "category": 1,
                "difficulty": 1
            })
        );
    }
}
