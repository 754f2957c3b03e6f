//! # FinishedCard Component
//!
//! End-of-quiz screen: final score and the "Try Again" button.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

pub struct FinishedCard {
    pub score: u32,
    pub max_score: u32,
}

impl FinishedCard {
    pub fn new(score: u32, max_score: u32) -> Self {
        Self { score, max_score }
    }
}

impl Component for FinishedCard {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "Quiz Finished!",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(format!(
                "Your Final Score: {} / {}",
                self.score, self.max_score
            )),
            Line::default(),
            Line::from(Span::styled(
                "[ Try Again ]",
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        let [column] = Layout::horizontal([Constraint::Max(48)])
            .flex(Flex::Center)
            .areas(area);
        let [card] = Layout::vertical([Constraint::Length(lines.len() as u16 + 2)])
            .flex(Flex::Center)
            .areas(column);

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().border_type(BorderType::Rounded));
        frame.render_widget(paragraph, card);
    }
}
