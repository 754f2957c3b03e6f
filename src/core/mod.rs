//! # Core Quiz Logic
//!
//! This module contains the quiz state machine.
//! It knows nothing about any specific UI technology or HTTP client.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • QuizSession (state)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • present() (view)     │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │ Questions  │
//!          │  Adapter   │                │  (HTTP)    │
//!          │ (ratatui)  │                │            │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `QuizSession` struct, all quiz state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`shuffle`]: Fisher–Yates ordering of answer choices
//! - [`view`]: Pure `present()` from state to a `Screen`
//! - [`config`]: Settings file, env vars and CLI overrides

pub mod action;
pub mod config;
pub mod shuffle;
pub mod state;
pub mod view;
