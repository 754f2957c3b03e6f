//! # Actions
//!
//! Everything that can happen in a quiz becomes an `Action`.
//! Player presses Enter? That's `Action::Confirm`.
//! The trivia API responds? That's `Action::BatchLoaded { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` for the adapter to carry out. No I/O
//! happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Fetch results carry the generation token they were started with. Only the
//! result matching `QuizSession::generation` is applied, so a slow response
//! from before a restart can never overwrite the newer batch.

use log::{debug, info, warn};

use crate::core::shuffle::shuffle_choices;
use crate::core::state::{NO_SELECTION_MESSAGE, POINTS_PER_CORRECT, Phase, QuizSession};
use crate::questions::QuestionRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A fetch started with `generation` produced a batch.
    BatchLoaded {
        generation: u64,
        batch: Vec<QuestionRecord>,
    },
    /// A fetch started with `generation` failed.
    FetchFailed { generation: u64, error: String },
    SelectAnswer(String),
    /// Lock the selection (two-step) or score and move on (single-step).
    Submit,
    /// Score the locked selection and move to the next question.
    Advance,
    /// The overloaded action button: Submit, Next, Try Again or Retry.
    Confirm,
    Restart,
    Quit,
}

/// Side effect requested by `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Fetch a new batch tagged with the given generation.
    Fetch(u64),
    Quit,
}

pub fn update(session: &mut QuizSession, action: Action) -> Effect {
    match action {
        Action::BatchLoaded { generation, batch } => {
            if generation != session.generation {
                info!(
                    "Discarding stale batch (generation {}, current {})",
                    generation, session.generation
                );
                return Effect::None;
            }
            if batch.is_empty() {
                warn!("Fetched batch is empty, treating as fetch failure");
                session.fetch_error = Some("no questions returned".to_string());
                return Effect::None;
            }
            info!("Batch loaded: {} questions", batch.len());
            session.batch = Some(batch);
            session.fetch_error = None;
            show_question(session, 0);
            Effect::None
        }
        Action::FetchFailed { generation, error } => {
            if generation != session.generation {
                info!(
                    "Discarding stale fetch failure (generation {}, current {}): {}",
                    generation, session.generation, error
                );
                return Effect::None;
            }
            warn!("Fetch failed: {}", error);
            session.fetch_error = Some(error);
            Effect::None
        }
        Action::SelectAnswer(choice) => {
            if session.phase() != Phase::Unanswered {
                debug!("Ignoring selection in phase {:?}", session.phase());
                return Effect::None;
            }
            if !session.shuffled_choices.contains(&choice) {
                debug!("Ignoring selection of unknown choice {:?}", choice);
                return Effect::None;
            }
            session.selected = Some(choice);
            session.error_text.clear();
            Effect::None
        }
        Action::Submit => {
            if session.phase() != Phase::Unanswered {
                debug!("Ignoring submit in phase {:?}", session.phase());
                return Effect::None;
            }
            if !require_selection(session) {
                return Effect::None;
            }
            if session.two_step {
                session.answered = true;
                debug!("Answer locked: {:?}", session.selected);
            } else {
                advance(session);
            }
            Effect::None
        }
        Action::Advance => {
            let phase = session.phase();
            if !matches!(phase, Phase::Unanswered | Phase::Locked) {
                debug!("Ignoring advance in phase {:?}", phase);
                return Effect::None;
            }
            if !require_selection(session) {
                return Effect::None;
            }
            if session.two_step && phase == Phase::Unanswered {
                debug!("Ignoring advance before the answer is locked");
                return Effect::None;
            }
            advance(session);
            Effect::None
        }
        Action::Confirm => match session.phase() {
            Phase::Unanswered => update(session, Action::Submit),
            Phase::Locked => update(session, Action::Advance),
            Phase::Finished | Phase::Failed => update(session, Action::Restart),
            Phase::Loading => Effect::None,
        },
        Action::Restart => {
            session.current_index = 0;
            session.score = 0;
            session.finished = false;
            session.answered = false;
            session.selected = None;
            session.error_text.clear();
            session.fetch_error = None;
            session.batch = None;
            session.shuffled_choices.clear();
            session.generation += 1;
            info!("Restarting quiz (generation {})", session.generation);
            Effect::Fetch(session.generation)
        }
        Action::Quit => Effect::Quit,
    }
}

/// Sets the validation message when nothing is selected. Returns whether a selection exists.
fn require_selection(session: &mut QuizSession) -> bool {
    if session.selected.is_some() {
        return true;
    }
    session.error_text = NO_SELECTION_MESSAGE.to_string();
    false
}

/// Scores the current selection, then moves to the next question or finishes.
fn advance(session: &mut QuizSession) {
    let correct = match (session.current_question(), session.selected.as_deref()) {
        (Some(question), Some(selected)) => question.is_correct(selected),
        _ => false,
    };
    if correct {
        session.score += POINTS_PER_CORRECT;
    }
    debug!(
        "Advancing past question {} (correct={}, score={})",
        session.current_index, correct, session.score
    );

    if session.is_last_question() {
        session.finished = true;
        info!("Quiz finished with score {}/{}", session.score, session.max_score());
    } else {
        show_question(session, session.current_index + 1);
    }
}

fn show_question(session: &mut QuizSession, index: usize) {
    session.current_index = index;
    session.selected = None;
    session.answered = false;
    session.error_text.clear();
    session.shuffled_choices = match session.batch.as_ref().and_then(|b| b.get(index)) {
        Some(question) => shuffle_choices(question, &mut session.rng),
        None => Vec::new(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        loaded_session, sample_batch, single_question_batch, test_session,
    };

    fn answer(session: &mut QuizSession, choice: &str) {
        update(session, Action::SelectAnswer(choice.to_string()));
        update(session, Action::Submit);
        if session.two_step {
            update(session, Action::Advance);
        }
    }

    #[test]
    fn test_batch_loaded_shows_first_question() {
        let mut session = test_session();
        let effect = update(
            &mut session,
            Action::BatchLoaded {
                generation: 0,
                batch: sample_batch(),
            },
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(session.phase(), Phase::Unanswered);
        assert_eq!(session.current_index, 0);
        assert_eq!(session.shuffled_choices.len(), 3);
        assert!(session.shuffled_choices.contains(&"4".to_string()));
    }

    #[test]
    fn test_single_question_correct_answer_finishes_with_ten() {
        let mut session = loaded_session(single_question_batch(), true);
        update(&mut session, Action::SelectAnswer("4".to_string()));
        update(&mut session, Action::Submit);
        assert_eq!(session.phase(), Phase::Locked);
        assert_eq!(session.score, 0, "submit must not score in two-step mode");
        update(&mut session, Action::Advance);
        assert!(session.finished);
        assert_eq!(session.score, 10);
    }

    #[test]
    fn test_submit_without_selection_sets_error_only() {
        let mut session = loaded_session(single_question_batch(), true);
        update(&mut session, Action::Submit);
        assert_eq!(session.error_text, NO_SELECTION_MESSAGE);
        assert!(!session.answered);
        assert!(!session.finished);
        assert_eq!(session.current_index, 0);
        assert_eq!(session.score, 0);
    }

    #[test]
    fn test_advance_without_selection_sets_error_only() {
        let mut session = loaded_session(single_question_batch(), true);
        update(&mut session, Action::Advance);
        assert_eq!(session.error_text, NO_SELECTION_MESSAGE);
        assert!(!session.finished);
        assert_eq!(session.score, 0);
    }

    #[test]
    fn test_selection_clears_error_text() {
        let mut session = loaded_session(single_question_batch(), true);
        update(&mut session, Action::Submit);
        assert!(!session.error_text.is_empty());
        update(&mut session, Action::SelectAnswer("3".to_string()));
        assert!(session.error_text.is_empty());
        assert_eq!(session.selected.as_deref(), Some("3"));
    }

    #[test]
    fn test_wrong_then_right_scores_ten() {
        let mut session = loaded_session(sample_batch(), true);
        answer(&mut session, "3");
        assert_eq!(session.current_index, 1);
        assert_eq!(session.score, 0);
        answer(&mut session, "Paris");
        assert!(session.finished);
        assert_eq!(session.score, 10);
    }

    #[test]
    fn test_locked_selection_cannot_change() {
        let mut session = loaded_session(single_question_batch(), true);
        update(&mut session, Action::SelectAnswer("3".to_string()));
        update(&mut session, Action::Submit);
        update(&mut session, Action::SelectAnswer("4".to_string()));
        assert_eq!(session.selected.as_deref(), Some("3"));
        update(&mut session, Action::Advance);
        assert_eq!(session.score, 0);
    }

    #[test]
    fn test_unknown_choice_is_ignored() {
        let mut session = loaded_session(single_question_batch(), true);
        update(&mut session, Action::SelectAnswer("42".to_string()));
        assert_eq!(session.selected, None);
    }

    #[test]
    fn test_advance_before_lock_is_ignored_in_two_step() {
        let mut session = loaded_session(sample_batch(), true);
        update(&mut session, Action::SelectAnswer("4".to_string()));
        update(&mut session, Action::Advance);
        assert_eq!(session.current_index, 0);
        assert_eq!(session.score, 0);
        assert_eq!(session.phase(), Phase::Unanswered);
    }

    #[test]
    fn test_advance_from_last_index_keeps_index() {
        let mut session = loaded_session(sample_batch(), true);
        answer(&mut session, "4");
        assert_eq!(session.current_index, 1);
        answer(&mut session, "Paris");
        assert!(session.finished);
        assert_eq!(session.current_index, 1);
        assert_eq!(session.score, 20);
        assert_eq!(session.score, session.max_score());
    }

    #[test]
    fn test_advance_reshuffles_for_next_question() {
        let mut session = loaded_session(sample_batch(), true);
        answer(&mut session, "4");
        let mut choices = session.shuffled_choices.clone();
        choices.sort();
        assert_eq!(choices, vec!["Berlin", "Madrid", "Paris", "Rome"]);
        assert_eq!(session.selected, None);
        assert!(!session.answered);
    }

    #[test]
    fn test_single_step_submit_advances_immediately() {
        let mut session = loaded_session(sample_batch(), false);
        update(&mut session, Action::SelectAnswer("4".to_string()));
        update(&mut session, Action::Submit);
        assert_eq!(session.current_index, 1);
        assert_eq!(session.score, 10);
        assert!(!session.answered);
    }

    #[test]
    fn test_single_step_selection_stays_mutable_until_advance() {
        let mut session = loaded_session(single_question_batch(), false);
        update(&mut session, Action::SelectAnswer("3".to_string()));
        update(&mut session, Action::SelectAnswer("4".to_string()));
        update(&mut session, Action::Advance);
        assert!(session.finished);
        assert_eq!(session.score, 10);
    }

    #[test]
    fn test_confirm_walks_submit_next_and_try_again() {
        let mut session = loaded_session(single_question_batch(), true);
        update(&mut session, Action::SelectAnswer("4".to_string()));
        assert_eq!(update(&mut session, Action::Confirm), Effect::None);
        assert_eq!(session.phase(), Phase::Locked);
        assert_eq!(update(&mut session, Action::Confirm), Effect::None);
        assert_eq!(session.phase(), Phase::Finished);
        assert_eq!(update(&mut session, Action::Confirm), Effect::Fetch(1));
        assert_eq!(session.phase(), Phase::Loading);
    }

    #[test]
    fn test_confirm_while_loading_does_nothing() {
        let mut session = test_session();
        assert_eq!(update(&mut session, Action::Confirm), Effect::None);
        assert_eq!(session.generation, 0);
    }

    #[test]
    fn test_restart_after_finish_resets_and_fetches_once() {
        let mut session = loaded_session(single_question_batch(), true);
        answer(&mut session, "4");
        assert!(session.finished);

        let effect = update(&mut session, Action::Restart);
        assert_eq!(effect, Effect::Fetch(1));
        assert_eq!(session.score, 0);
        assert_eq!(session.current_index, 0);
        assert!(!session.finished);
        assert!(!session.answered);
        assert_eq!(session.selected, None);
        assert_eq!(session.phase(), Phase::Loading);
    }

    #[test]
    fn test_stale_batch_is_discarded() {
        let mut session = test_session();
        update(&mut session, Action::Restart);
        update(&mut session, Action::Restart);
        assert_eq!(session.generation, 2);

        update(
            &mut session,
            Action::BatchLoaded {
                generation: 1,
                batch: single_question_batch(),
            },
        );
        assert_eq!(session.phase(), Phase::Loading);

        update(
            &mut session,
            Action::BatchLoaded {
                generation: 2,
                batch: sample_batch(),
            },
        );
        assert_eq!(session.batch_len(), 2);

        // The older request resolving late must not replace the current batch.
        update(
            &mut session,
            Action::BatchLoaded {
                generation: 1,
                batch: single_question_batch(),
            },
        );
        assert_eq!(session.batch_len(), 2);
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let mut session = test_session();
        update(&mut session, Action::Restart);
        update(
            &mut session,
            Action::FetchFailed {
                generation: 0,
                error: "timeout".to_string(),
            },
        );
        assert_eq!(session.phase(), Phase::Loading);
    }

    #[test]
    fn test_fetch_failure_is_visible_and_retryable() {
        let mut session = test_session();
        update(
            &mut session,
            Action::FetchFailed {
                generation: 0,
                error: "network error: refused".to_string(),
            },
        );
        assert_eq!(session.phase(), Phase::Failed);
        assert_eq!(session.fetch_error.as_deref(), Some("network error: refused"));

        assert_eq!(update(&mut session, Action::Confirm), Effect::Fetch(1));
        assert_eq!(session.phase(), Phase::Loading);
        assert_eq!(session.fetch_error, None);
    }

    #[test]
    fn test_empty_batch_is_a_fetch_failure() {
        let mut session = test_session();
        update(
            &mut session,
            Action::BatchLoaded {
                generation: 0,
                batch: Vec::new(),
            },
        );
        assert_eq!(session.phase(), Phase::Failed);
        assert!(session.batch.is_none());
    }

    #[test]
    fn test_score_is_ten_per_correct_answer() {
        let batch: Vec<QuestionRecord> = (0..10)
            .map(|i| QuestionRecord::new(format!("q{i}"), "right", &["wrong", "also wrong"]))
            .collect();
        let mut session = loaded_session(batch, true);
        let mut last_score = 0;
        let mut correct = 0;
        for i in 0..10 {
            let pick = if i % 3 == 0 { "right" } else { "wrong" };
            if pick == "right" {
                correct += 1;
            }
            answer(&mut session, pick);
            assert!(session.score >= last_score);
            assert_eq!(session.score % POINTS_PER_CORRECT, 0);
            last_score = session.score;
        }
        assert!(session.finished);
        assert_eq!(session.score, correct * POINTS_PER_CORRECT);
        assert!(session.score <= session.max_score());
    }

    #[test]
    fn test_actions_after_finish_are_ignored() {
        let mut session = loaded_session(single_question_batch(), true);
        answer(&mut session, "4");
        update(&mut session, Action::SelectAnswer("3".to_string()));
        update(&mut session, Action::Submit);
        update(&mut session, Action::Advance);
        assert!(session.finished);
        assert_eq!(session.score, 10);
        assert_eq!(session.selected.as_deref(), Some("4"));
    }

    #[test]
    fn test_quit_effect() {
        let mut session = test_session();
        assert_eq!(update(&mut session, Action::Quit), Effect::Quit);
    }
}
