//! # QuestionCard Component
//!
//! Renders one `QuestionView`: heading, question text, the choice list with
//! selection and correctness styling, validation error, score and the action
//! button.
//!
//! ```text
//! ╭ Question 3 ─────────────────────────────────╮
//! │ science · easy                              │
//! │ Which planet is closest to the sun?         │
//! │                                             │
//! │ 1 ( ) Venus                                 │
//! │ 2 (•) Mercury                      ✓        │
//! │ ...                                         │
//! │                                             │
//! │ Score: 20                        [ Next ]   │
//! ╰─────────────────────────────────────────────╯
//! ```
//!
//! The layout is computed by [`QuestionCard::layout`] so the event loop can
//! hit-test mouse clicks against the exact rows that were drawn.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::core::view::{ChoiceMark, ChoiceView, QuestionView};
use crate::tui::component::Component;

/// Widest the card grows on large terminals.
const CARD_MAX_WIDTH: u16 = 72;
/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;

pub struct QuestionCard<'a> {
    pub view: &'a QuestionView,
}

/// Areas of the card's rows, in screen coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    pub card: Rect,
    pub meta: Rect,
    pub question: Rect,
    pub choices: Vec<Rect>,
    pub error: Rect,
    pub footer: Rect,
}

impl<'a> QuestionCard<'a> {
    pub fn new(view: &'a QuestionView) -> Self {
        Self { view }
    }

    fn block(&self) -> Block<'static> {
        Block::bordered()
            .title(format!(" Question {} ", self.view.number))
            .title_style(
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )
            .border_type(BorderType::Rounded)
            .padding(Padding::horizontal(CONTENT_PAD_H))
    }

    pub fn layout(&self, area: Rect) -> CardLayout {
        let [card] = Layout::horizontal([Constraint::Max(CARD_MAX_WIDTH)])
            .flex(Flex::Center)
            .areas(area);
        let inner = self.block().inner(card);

        let question_height = wrapped_height(&self.view.text, inner.width);
        let choice_count = self.view.choices.len();

        let mut constraints = vec![
            Constraint::Length(1),               // meta
            Constraint::Length(question_height), // question text
            Constraint::Length(1),               // spacer
        ];
        constraints.extend(std::iter::repeat_n(Constraint::Length(1), choice_count));
        constraints.extend([
            Constraint::Length(1), // spacer
            Constraint::Length(1), // error
            Constraint::Min(1),    // footer sits on top of remaining space
        ]);

        let rows = Layout::vertical(constraints).split(inner);
        let choices = rows[3..3 + choice_count].to_vec();
        let error = rows[4 + choice_count];
        let mut footer = rows[5 + choice_count];
        footer.height = footer.height.min(1);

        CardLayout {
            card,
            meta: rows[0],
            question: rows[1],
            choices,
            error,
            footer,
        }
    }

    /// Index of the choice drawn at the given screen cell, if any.
    pub fn choice_at(&self, area: Rect, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.layout(area)
            .choices
            .iter()
            .position(|rect| rect.contains(position))
    }
}

impl<'a> Component for QuestionCard<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let layout = self.layout(area);
        frame.render_widget(self.block(), layout.card);

        let meta: Vec<&str> = [self.view.category.as_deref(), self.view.difficulty.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        frame.render_widget(
            Paragraph::new(meta.join(" · ")).style(Style::default().fg(Color::DarkGray)),
            layout.meta,
        );

        frame.render_widget(
            Paragraph::new(self.view.text.as_str())
                .style(Style::default().add_modifier(Modifier::BOLD))
                .wrap(Wrap { trim: true }),
            layout.question,
        );

        for (index, (choice, rect)) in self.view.choices.iter().zip(&layout.choices).enumerate() {
            frame.render_widget(choice_line(index, choice, self.view.locked), *rect);
        }

        if let Some(error) = &self.view.error_text {
            frame.render_widget(
                Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red)),
                layout.error,
            );
        }

        let button_text = format!("[ {} ]", self.view.button.text());
        let [score_area, button_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(button_text.chars().count() as u16),
        ])
        .areas(layout.footer);

        frame.render_widget(
            Paragraph::new(format!("Score: {}", self.view.score))
                .style(Style::default().add_modifier(Modifier::BOLD)),
            score_area,
        );
        frame.render_widget(
            Paragraph::new(button_text).style(
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            button_area,
        );
    }
}

fn choice_line(index: usize, choice: &ChoiceView, locked: bool) -> Line<'static> {
    let radio = if choice.selected { "(•)" } else { "( )" };

    let style = match choice.mark {
        ChoiceMark::Correct => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        ChoiceMark::Incorrect => Style::default().fg(Color::Red),
        ChoiceMark::Neutral if locked => Style::default().fg(Color::DarkGray),
        ChoiceMark::Neutral if choice.selected => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        ChoiceMark::Neutral => Style::default(),
    };

    let suffix = match choice.mark {
        ChoiceMark::Correct => "  ✓",
        ChoiceMark::Incorrect => "  ✗",
        ChoiceMark::Neutral => "",
    };

    Line::from(vec![
        Span::styled(format!("{} ", index + 1), Style::default().fg(Color::DarkGray)),
        Span::styled(format!("{} {}{}", radio, choice.label, suffix), style),
    ])
}

/// Rows the question text needs at `width`, matching `Paragraph` word wrapping.
fn wrapped_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 1;
    }
    let options = textwrap::Options::new(width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    (textwrap::wrap(text.trim(), options).len() as u16).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::ButtonLabel;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn view(locked: bool, marks: [ChoiceMark; 3], selected: Option<usize>) -> QuestionView {
        let labels = ["3", "4", "5"];
        QuestionView {
            number: 1,
            total: 2,
            text: "What is 2+2?".to_string(),
            category: Some("maths".to_string()),
            difficulty: Some("easy".to_string()),
            choices: labels
                .iter()
                .zip(marks)
                .enumerate()
                .map(|(i, (label, mark))| ChoiceView {
                    label: label.to_string(),
                    selected: selected == Some(i),
                    mark,
                })
                .collect(),
            locked,
            error_text: None,
            score: 0,
            button: if locked {
                ButtonLabel::Next
            } else {
                ButtonLabel::Submit
            },
        }
    }

    fn render_to_text(view: &QuestionView) -> String {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                QuestionCard::new(view).render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_wrapped_height() {
        assert_eq!(wrapped_height("short", 40), 1);
        assert_eq!(wrapped_height("aaaa bbbb cccc", 9), 2);
        assert_eq!(wrapped_height("", 10), 1);
        assert_eq!(wrapped_height("anything", 0), 1);
    }

    #[test]
    fn test_layout_has_one_row_per_choice() {
        let v = view(false, [ChoiceMark::Neutral; 3], None);
        let layout = QuestionCard::new(&v).layout(Rect::new(0, 0, 80, 20));
        assert_eq!(layout.choices.len(), 3);
        assert!(layout.choices.iter().all(|r| r.height == 1));
        assert_eq!(layout.choices[1].y, layout.choices[0].y + 1);
        assert!(layout.card.width <= CARD_MAX_WIDTH);
        assert_eq!(layout.footer.height, 1);
    }

    #[test]
    fn test_choice_at_hits_choice_rows() {
        let v = view(false, [ChoiceMark::Neutral; 3], None);
        let card = QuestionCard::new(&v);
        let area = Rect::new(0, 0, 80, 20);
        let layout = card.layout(area);
        let second = layout.choices[1];

        assert_eq!(card.choice_at(area, second.x + 2, second.y), Some(1));
        assert_eq!(card.choice_at(area, second.x, layout.meta.y), None);
        assert_eq!(card.choice_at(area, 0, 0), None);
    }

    #[test]
    fn test_render_unanswered_card() {
        let text = render_to_text(&view(false, [ChoiceMark::Neutral; 3], Some(0)));
        assert!(text.contains("Question 1"));
        assert!(text.contains("What is 2+2?"));
        assert!(text.contains("maths · easy"));
        assert!(text.contains("(•) 3"));
        assert!(text.contains("( ) 4"));
        assert!(text.contains("Score: 0"));
        assert!(text.contains("[ Submit ]"));
        assert!(!text.contains('✓'));
    }

    #[test]
    fn test_render_locked_card_marks_answers() {
        let text = render_to_text(&view(
            true,
            [ChoiceMark::Incorrect, ChoiceMark::Correct, ChoiceMark::Neutral],
            Some(0),
        ));
        assert!(text.contains("(•) 3  ✗"));
        assert!(text.contains("( ) 4  ✓"));
        assert!(text.contains("[ Next ]"));
    }

    #[test]
    fn test_render_error_text() {
        let mut v = view(false, [ChoiceMark::Neutral; 3], None);
        v.error_text = Some("Please select an answer to proceed.".to_string());
        let text = render_to_text(&v);
        assert!(text.contains("Please select an answer to proceed."));
    }
}
