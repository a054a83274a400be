//! UI module for rendering the TUI

mod auth;
mod builder;
mod components;
mod forms;
mod layout;
mod widgets;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    match app.state.current_view {
        View::Auth => auth::draw(frame, main_area, app),
        View::FormBuilder => builder::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Modal notice on top of everything
    if let Some(notice) = &app.state.notice {
        components::render_notice_dialog(frame, notice);
    }
}
