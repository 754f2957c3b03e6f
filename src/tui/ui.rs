use crate::core::state::QuizSession;
use crate::core::view::{Screen, present};
use crate::tui::component::Component;
use crate::tui::components::{FinishedCard, QuestionCard, StatusCard, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

const KEY_HINTS: &str = "↑/↓ or 1-9 select · Enter confirm · r restart · q quit";

/// Splits the frame into title, main and hint rows.
fn frame_areas(frame_area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame_area)
}

pub fn draw_ui(frame: &mut Frame, session: &QuizSession, spinner_frame: usize) {
    let [title_area, main_area, hint_area] = frame_areas(frame.area());
    let screen = present(session);

    TitleBar::from_screen(&screen).render(frame, title_area);

    match &screen {
        Screen::Loading => StatusCard::Loading { spinner_frame }.render(frame, main_area),
        Screen::Failed { message } => StatusCard::Failed {
            message: message.clone(),
        }
        .render(frame, main_area),
        Screen::Question(view) => QuestionCard::new(view).render(frame, main_area),
        Screen::Finished { score, max_score } => {
            FinishedCard::new(*score, *max_score).render(frame, main_area)
        }
    }

    frame.render_widget(
        Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)),
        hint_area,
    );
}

/// Hit test: which choice (if any) is drawn at the given screen cell.
pub fn hit_test_choice(
    column: u16,
    row: u16,
    frame_area: Rect,
    session: &QuizSession,
) -> Option<usize> {
    let [_title_area, main_area, _hint_area] = frame_areas(frame_area);
    match present(session) {
        Screen::Question(view) => QuestionCard::new(&view).choice_at(main_area, column, row),
        _ => None,
    }
}
