//! # StatusCard Component
//!
//! Shown while no question is on screen: a spinner while the batch loads,
//! or the fetch error with a retry button when it failed.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::Component;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub enum StatusCard {
    Loading { spinner_frame: usize },
    Failed { message: String },
}

impl StatusCard {
    fn lines(&self) -> Vec<Line<'static>> {
        match self {
            StatusCard::Loading { spinner_frame } => {
                let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
                vec![Line::from(Span::styled(
                    format!("{} Loading...", spinner),
                    Style::default()
                        .fg(Color::Gray)
                        .add_modifier(Modifier::BOLD),
                ))]
            }
            StatusCard::Failed { message } => vec![
                Line::from(Span::styled(
                    "Could not load questions",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::default(),
                Line::from(Span::styled(
                    "[ Retry ]",
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                )),
            ],
        }
    }
}

impl Component for StatusCard {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = self.lines();
        let [row] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            row,
        );
    }
}
