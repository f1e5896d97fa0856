//! Contact form rendering

use super::field_renderer::{draw_checkbox, draw_help_text, draw_text_field};
use crate::app::App;
use crate::state::FieldName;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the contact form with its Submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Contact ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // First / last name
            Constraint::Length(3),             // Business email
            Constraint::Length(3),             // Company
            Constraint::Length(3),             // Job title
            Constraint::Min(5),                // Message
            Constraint::Length(4),             // Privacy checkbox
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Help text
        ])
        .split(inner);

    let name_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    let text_areas = [
        (FieldName::FirstName, name_row[0]),
        (FieldName::LastName, name_row[1]),
        (FieldName::BusinessEmail, chunks[1]),
        (FieldName::Company, chunks[2]),
        (FieldName::JobTitle, chunks[3]),
        (FieldName::Message, chunks[4]),
    ];

    let form = &app.state.form;
    let active = form.active_field();

    for (field, field_area) in text_areas {
        draw_text_field(
            frame,
            field_area,
            field.label(),
            form.fields.text(field),
            form.errors.get(field),
            active == Some(field),
            field.is_multiline(),
        );
    }

    draw_checkbox(
        frame,
        chunks[5],
        FieldName::PrivacyAccepted.label(),
        form.fields.privacy_accepted,
        form.errors.get(FieldName::PrivacyAccepted),
        active == Some(FieldName::PrivacyAccepted),
    );

    let sending = app.is_sending();
    let label = if sending { "Sending…" } else { "Send Message" };
    render_button(
        frame,
        chunks[6],
        label,
        form.is_submit_focused(),
        !sending,
    );

    draw_help_text(
        frame,
        chunks[7],
        &[
            ("Tab", "next field"),
            ("Space", "toggle"),
            (crate::platform::SUBMIT_SHORTCUT, "send"),
            ("Esc", "quit"),
        ],
    );
}
