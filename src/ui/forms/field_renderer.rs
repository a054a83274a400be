//! Field rendering utilities for forms

use crate::state::InputField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a single-line input with its label as the border title
pub fn draw_field(frame: &mut Frame, area: Rect, field: &InputField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = if is_active { "▌" } else { "" };

    // Keep the tail (and the cursor) visible when the value overflows
    let inner_width = area.width.saturating_sub(3) as usize;
    let char_count = display_str.chars().count();
    let visible: String = if char_count > inner_width {
        display_str.chars().skip(char_count - inner_width).collect()
    } else {
        display_str
    };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(visible, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(content.block(block), area);
}
