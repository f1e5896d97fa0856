//! Layout components (header, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

const HEADLINE: &str = "Get in Touch";
const SUBHEADLINE: &str = "Please fill out the form and send us your questions.";

/// Split the screen into header, main content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the headline above the form
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            HEADLINE,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            SUBHEADLINE,
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(header, area);
}

/// Draw the status bar: in-flight indicator or the latest status message
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = if app.is_sending() {
        Line::from(Span::styled(
            " Sending…",
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(ref message) = app.state.status_message {
        Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        let error_count = app.state.form.errors.len();
        if error_count > 0 {
            Line::from(Span::styled(
                format!(" {error_count} field(s) need attention"),
                Style::default().fg(Color::Red),
            ))
        } else {
            Line::from(Span::styled(" Ready", Style::default().fg(Color::DarkGray)))
        }
    };

    frame.render_widget(Paragraph::new(line), area);
}
