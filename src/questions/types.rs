use serde::Deserialize;

/// One multiple-choice question, immutable once fetched.
///
/// Identity is the position inside the batch it arrived in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
}

impl QuestionRecord {
    pub fn new(
        question: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: &[&str],
    ) -> Self {
        Self {
            question: question.into(),
            correct_answer: correct_answer.into(),
            incorrect_answers: incorrect_answers.iter().map(|s| s.to_string()).collect(),
            category: None,
            difficulty: None,
        }
    }

    /// Number of choices shown for this question (incorrect answers plus the correct one).
    pub fn choice_count(&self) -> usize {
        self.incorrect_answers.len() + 1
    }

    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct_answer == choice
    }
}

// ============================================================================
// Trivia API wire types
// ============================================================================

#[derive(Deserialize, Debug)]
pub(crate) struct ApiQuestionText {
    pub text: String,
}

/// A question object as served by the trivia endpoint. Unknown fields are ignored.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiQuestion {
    pub question: ApiQuestionText,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

impl From<ApiQuestion> for QuestionRecord {
    fn from(api: ApiQuestion) -> Self {
        QuestionRecord {
            question: api.question.text,
            correct_answer: api.correct_answer,
            incorrect_answers: api.incorrect_answers,
            category: api.category,
            difficulty: api.difficulty,
        }
    }
}
