//! One-time notice dialog

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render a notice overlay centered on the screen
pub fn render_notice_dialog(frame: &mut Frame, message: &str) {
    let hint = vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to continue"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Notice",
            title_color: Color::Green,
            border_color: Color::Green,
            message,
            hint: Some(hint),
            max_width: 50,
        },
    );
}
