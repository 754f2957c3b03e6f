//! # Presenter
//!
//! Pure mapping from `QuizSession` to a `Screen` description. Renderers
//! (the TUI today) draw a `Screen` without looking at session internals,
//! so every visual rule lives here and is testable without a terminal.

use crate::core::state::{Phase, QuizSession};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Failed { message: String },
    Question(QuestionView),
    Finished { score: u32, max_score: u32 },
}

/// Correctness styling for a choice. Only revealed once the answer is locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceMark {
    Neutral,
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceView {
    pub label: String,
    pub selected: bool,
    pub mark: ChoiceMark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonLabel {
    Submit,
    Next,
}

impl ButtonLabel {
    pub fn text(self) -> &'static str {
        match self {
            ButtonLabel::Submit => "Submit",
            ButtonLabel::Next => "Next",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    /// 1-based question number.
    pub number: usize,
    pub total: usize,
    pub text: String,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    pub choices: Vec<ChoiceView>,
    pub locked: bool,
    pub error_text: Option<String>,
    pub score: u32,
    pub button: ButtonLabel,
}

pub fn present(session: &QuizSession) -> Screen {
    match session.phase() {
        Phase::Loading => Screen::Loading,
        Phase::Failed => Screen::Failed {
            message: session.fetch_error.clone().unwrap_or_default(),
        },
        Phase::Finished => Screen::Finished {
            score: session.score,
            max_score: session.max_score(),
        },
        Phase::Unanswered | Phase::Locked => match session.current_question() {
            Some(question) => {
                let locked = session.answered;
                let choices = session
                    .shuffled_choices
                    .iter()
                    .map(|choice| {
                        let selected = session.selected.as_deref() == Some(choice.as_str());
                        let mark = if !locked {
                            ChoiceMark::Neutral
                        } else if question.is_correct(choice) {
                            ChoiceMark::Correct
                        } else if selected {
                            ChoiceMark::Incorrect
                        } else {
                            ChoiceMark::Neutral
                        };
                        ChoiceView {
                            label: choice.clone(),
                            selected,
                            mark,
                        }
                    })
                    .collect();

                let button = if locked || !session.two_step {
                    ButtonLabel::Next
                } else {
                    ButtonLabel::Submit
                };

                Screen::Question(QuestionView {
                    number: session.current_index + 1,
                    total: session.batch_len(),
                    text: question.question.clone(),
                    category: question.category.clone(),
                    difficulty: question.difficulty.clone(),
                    choices,
                    locked,
                    error_text: (!session.error_text.is_empty())
                        .then(|| session.error_text.clone()),
                    score: session.score,
                    button,
                })
            }
            // Unreachable while the index invariant holds; render as loading rather than panic.
            None => Screen::Loading,
        },
    }
}
