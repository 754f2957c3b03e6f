//! Terminal trivia quiz: core state machine, question source and TUI adapter.

pub mod core;
pub mod questions;
pub mod tui;

#[cfg(test)]
pub mod test_support;
