//! # TitleBar Component
//!
//! Top status line: app name, progress and running score.
//!
//! Stateless. The parent builds it from the current `Screen` each frame:
//!
//! 1. **Question**: `"Trivia Quiz | Question 2/10 | Score: 10"`
//! 2. **Finished**: `"Trivia Quiz | Finished | Score: 70"`
//! 3. **Loading / Failed**: `"Trivia Quiz | Loading..."`

use crate::core::view::Screen;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const APP_TITLE: &str = "Trivia Quiz";

pub struct TitleBar {
    /// Progress or status text shown after the title.
    pub status_message: String,
    /// Score to show, if a quiz is running or done.
    pub score: Option<u32>,
}

impl TitleBar {
    pub fn new(status_message: String, score: Option<u32>) -> Self {
        Self {
            status_message,
            score,
        }
    }

    pub fn from_screen(screen: &Screen) -> Self {
        match screen {
            Screen::Loading => Self::new("Loading...".to_string(), None),
            Screen::Failed { .. } => Self::new("Fetch failed".to_string(), None),
            Screen::Question(view) => Self::new(
                format!("Question {}/{}", view.number, view.total),
                Some(view.score),
            ),
            Screen::Finished { score, .. } => Self::new("Finished".to_string(), Some(*score)),
        }
    }

    pub fn text(&self) -> String {
        match self.score {
            Some(score) => format!("{} | {} | Score: {}", APP_TITLE, self.status_message, score),
            None => format!("{} | {}", APP_TITLE, self.status_message),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
