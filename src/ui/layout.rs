//! Layout helpers and the status bar

use crate::app::App;
use crate::state::{BuilderFocus, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// A `width` x `height` rect centered in `area`, clamped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.current_view.route()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        get_view_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if app.state.auth.is_submitting() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "Contacting identity provider...",
            Style::default().fg(Color::Yellow),
        ));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Red)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(app: &App) -> &'static str {
    let builder = &app.state.builder;
    match app.state.current_view {
        View::Auth => "Tab:next  Enter:submit/toggle",
        View::FormBuilder if builder.is_dragging() => "j/k:move  Enter:drop  Esc:cancel",
        View::FormBuilder if builder.editor.is_some() => "Enter:add  Esc:close",
        View::FormBuilder => match builder.focus {
            BuilderFocus::Prompt => "Tab:next  Enter:choose type",
            BuilderFocus::KindButtons => "h/l:type  Enter:add  Tab:next",
            BuilderFocus::Questions => {
                "j/k:select  Space:drag  Alt+↑/↓:move  o:option  f:file  Tab:next"
            }
        },
    }
}
