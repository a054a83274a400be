//! Sign-in / sign-up screen

use super::components::{render_button, BUTTON_HEIGHT};
use super::forms::draw_field;
use super::layout::centered_rect;
use crate::app::App;
use crate::state::AuthFocus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const PANEL_WIDTH: u16 = 46;
const PANEL_HEIGHT: u16 = 18;

/// Draw the credential form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let auth = &app.state.auth;
    let form = &auth.form;
    let panel = centered_rect(PANEL_WIDTH, PANEL_HEIGHT, area);

    let block = Block::default()
        .title(format!(" {} ", auth.mode.label()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, panel);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Password
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(BUTTON_HEIGHT), // Toggle
            Constraint::Min(1),                // Error
        ])
        .margin(1)
        .split(panel);

    draw_field(frame, chunks[0], &form.email, form.focus == AuthFocus::Email);
    draw_field(
        frame,
        chunks[1],
        &form.password,
        form.focus == AuthFocus::Password,
    );

    render_button(
        frame,
        chunks[2],
        auth.submit_label(),
        form.focus == AuthFocus::Submit,
        !auth.is_submitting(),
    );
    render_button(
        frame,
        chunks[3],
        auth.mode.toggle_label(),
        form.focus == AuthFocus::Toggle,
        true,
    );

    if let Some(error) = auth.error() {
        let paragraph = Paragraph::new(error.to_string())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, chunks[4]);
    }
}
