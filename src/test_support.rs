//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::core::action::{Action, update};
use crate::core::state::QuizSession;
use crate::questions::{QuestionRecord, QuestionSource, SourceError};

/// A source that hands out a fixed result, for tests that don't need HTTP.
pub struct StaticSource(pub Result<Vec<QuestionRecord>, SourceError>);

#[async_trait]
impl QuestionSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_batch(&self) -> Result<Vec<QuestionRecord>, SourceError> {
        self.0.clone()
    }
}

pub fn single_question_batch() -> Vec<QuestionRecord> {
    vec![QuestionRecord::new("2+2?", "4", &["3", "5"])]
}

pub fn sample_batch() -> Vec<QuestionRecord> {
    vec![
        QuestionRecord::new("2+2?", "4", &["3", "5"]),
        QuestionRecord::new("Capital of France?", "Paris", &["Berlin", "Madrid", "Rome"]),
    ]
}

/// Creates a two-step session with a fixed seed and no batch.
pub fn test_session() -> QuizSession {
    QuizSession::seeded(true, 1234)
}

/// Creates a session that has already received `batch` for generation 0.
pub fn loaded_session(batch: Vec<QuestionRecord>, two_step: bool) -> QuizSession {
    let mut session = QuizSession::seeded(two_step, 1234);
    update(
        &mut session,
        Action::BatchLoaded {
            generation: 0,
            batch,
        },
    );
    session
}

#[test]
fn test_static_source_returns_its_batch() {
    let source = StaticSource(Ok(sample_batch()));
    let batch = tokio_test::block_on(source.fetch_batch()).unwrap();
    assert_eq!(batch.len(), 2);
    assert_eq!(source.name(), "static");
}
