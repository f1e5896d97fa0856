//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area);
    forms::draw_contact_form(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Dialogs render on top, errors first
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    } else if let Some(ref notice) = app.state.notice {
        components::render_notice_dialog(frame, notice);
    }
}
