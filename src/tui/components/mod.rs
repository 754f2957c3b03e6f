//! # TUI Components
//!
//! All widgets drawn by the quiz. Every component is stateless and receives
//! its data as props (struct fields) built from a `core::view::Screen`.
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (top status line)
//! ├── question_card.rs   (question, choices, score, action button)
//! ├── finished_card.rs   (final score, Try Again)
//! └── status_card.rs     (loading spinner / fetch failure)
//! ```
//!
//! Each file holds the component, its rendering logic and its tests.

pub mod finished_card;
pub mod question_card;
pub mod status_card;
mod title_bar;

pub use finished_card::FinishedCard;
pub use question_card::QuestionCard;
pub use status_card::StatusCard;
pub use title_bar::TitleBar;
