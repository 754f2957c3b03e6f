//! # Session State
//!
//! All quiz state lives in one `QuizSession` value. No TUI types here;
//! presentation state lives in the `tui` module.
//!
//! ```text
//! QuizSession
//! ├── batch: Option<Vec<QuestionRecord>>   // None while loading
//! ├── current_index: usize                 // position in batch
//! ├── shuffled_choices: Vec<String>        // choices for current question
//! ├── selected: Option<String>             // player's pick
//! ├── answered: bool                       // locked (two-step only)
//! ├── score: u32                           // multiple of POINTS_PER_CORRECT
//! ├── finished: bool                       // advanced past last question
//! ├── error_text: String                   // validation message
//! ├── fetch_error: Option<String>          // visible fetch failure
//! ├── generation: u64                      // token of the fetch we accept
//! ├── two_step: bool                       // submit/advance split
//! └── rng: StdRng                          // answer shuffling
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::questions::QuestionRecord;

/// Points awarded for each correctly answered question.
pub const POINTS_PER_CORRECT: u32 = 10;

pub const NO_SELECTION_MESSAGE: &str = "Please select an answer to proceed.";

/// Coarse phase of the session, derived from the fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a batch.
    Loading,
    /// The last fetch failed; restart retries.
    Failed,
    /// Question shown, selection still mutable.
    Unanswered,
    /// Answer submitted and frozen, correctness revealed.
    Locked,
    /// Advanced past the last question.
    Finished,
}

#[derive(Debug)]
pub struct QuizSession {
    pub batch: Option<Vec<QuestionRecord>>,
    pub current_index: usize,
    pub shuffled_choices: Vec<String>,
    pub selected: Option<String>,
    pub answered: bool,
    pub score: u32,
    pub finished: bool,
    pub error_text: String,
    pub fetch_error: Option<String>,
    /// Token of the fetch whose result will be accepted. Bumped on every restart.
    pub generation: u64,
    pub two_step: bool,
    pub(crate) rng: StdRng,
}

impl QuizSession {
    pub fn new(two_step: bool) -> Self {
        Self::with_rng(two_step, StdRng::from_entropy())
    }

    /// Builds a session with a fixed seed so shuffles are reproducible.
    pub fn seeded(two_step: bool, seed: u64) -> Self {
        Self::with_rng(two_step, StdRng::seed_from_u64(seed))
    }

    fn with_rng(two_step: bool, rng: StdRng) -> Self {
        Self {
            batch: None,
            current_index: 0,
            shuffled_choices: Vec::new(),
            selected: None,
            answered: false,
            score: 0,
            finished: false,
            error_text: String::new(),
            fetch_error: None,
            generation: 0,
            two_step,
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.finished {
            Phase::Finished
        } else if self.batch.is_none() {
            if self.fetch_error.is_some() {
                Phase::Failed
            } else {
                Phase::Loading
            }
        } else if self.answered {
            Phase::Locked
        } else {
            Phase::Unanswered
        }
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        self.batch.as_ref()?.get(self.current_index)
    }

    pub fn batch_len(&self) -> usize {
        self.batch.as_ref().map_or(0, Vec::len)
    }

    pub fn max_score(&self) -> u32 {
        self.batch_len() as u32 * POINTS_PER_CORRECT
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.batch_len()
    }

    /// Position of the current selection inside `shuffled_choices`.
    pub fn selected_position(&self) -> Option<usize> {
        let selected = self.selected.as_ref()?;
        self.shuffled_choices.iter().position(|c| c == selected)
    }
}
