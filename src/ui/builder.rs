//! Form builder screen

use super::components::{render_button, BUTTON_HEIGHT};
use super::forms::draw_field;
use super::widgets::render_scrollable_list;
use crate::app::App;
use crate::state::{BuilderEditor, BuilderFocus, BuilderState, InputField, Question, QuestionKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the builder: prompt input, kind buttons, question cards
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let builder = &app.state.builder;

    let block = Block::default()
        .title(" Form Builder ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let file_editor = matches!(builder.editor, Some(BuilderEditor::FilePath { .. }));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                  // New question
            Constraint::Length(BUTTON_HEIGHT),                      // Kind buttons
            Constraint::Min(3),                                     // Questions
            Constraint::Length(if file_editor { 3 } else { 0 }),    // File path
        ])
        .margin(1)
        .split(area);

    let prompt = InputField::text_with_value(
        "New Question",
        builder.composer.pending_prompt().to_string(),
    );
    draw_field(
        frame,
        chunks[0],
        &prompt,
        builder.focus == BuilderFocus::Prompt && builder.editor.is_none(),
    );

    draw_kind_buttons(frame, chunks[1], builder);
    draw_questions(frame, chunks[2], builder);

    if let Some(BuilderEditor::FilePath { input, .. }) = &builder.editor {
        draw_field(frame, chunks[3], input, true);
    }
}

fn draw_kind_buttons(frame: &mut Frame, area: Rect, builder: &BuilderState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let focused = builder.focus == BuilderFocus::KindButtons && builder.editor.is_none();
    for (idx, kind) in QuestionKind::ALL.iter().enumerate() {
        render_button(
            frame,
            columns[idx],
            kind.label(),
            focused && builder.selected_kind == idx,
            true,
        );
    }
}

fn draw_questions(frame: &mut Frame, area: Rect, builder: &BuilderState) {
    let focused = builder.focus == BuilderFocus::Questions;
    let title = format!(" Questions ({}) ", builder.composer.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    if builder.composer.is_empty() {
        let empty = Paragraph::new("Type a question above, then pick its type.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = builder
        .composer
        .questions()
        .iter()
        .enumerate()
        .map(|(idx, question)| ListItem::new(card_lines(builder, idx, question)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));

    let selected = if focused {
        Some(
            builder
                .drag
                .and_then(|d| d.destination)
                .unwrap_or(builder.selected_question),
        )
    } else {
        None
    };
    render_scrollable_list(frame, area, list, selected);
}

/// Lines of one question card
fn card_lines<'a>(builder: &'a BuilderState, idx: usize, question: &'a Question) -> Vec<Line<'a>> {
    let is_selected = builder.focus == BuilderFocus::Questions && builder.selected_question == idx;
    let is_source = builder.drag.is_some_and(|d| d.source == idx);
    let is_target = builder.drag.is_some_and(|d| d.is_target(idx) && d.source != idx);

    let (marker, header_style) = if is_source {
        ("≡ ", Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC))
    } else if is_target {
        ("↳ ", Style::default().fg(Color::Yellow))
    } else if is_selected {
        ("▶ ", Style::default().fg(Color::Cyan))
    } else {
        ("  ", Style::default())
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(marker, header_style),
        Span::styled(format!("{}. ", idx + 1), Style::default().fg(Color::DarkGray)),
        Span::styled(question.prompt.as_str(), header_style),
        Span::styled(
            format!("  [{}]", question.kind.badge()),
            Style::default().fg(Color::Magenta),
        ),
    ])];

    let detail = Style::default().fg(Color::Gray);
    let dim = Style::default().fg(Color::DarkGray);

    match question.kind {
        QuestionKind::ShortAnswer => {
            lines.push(Line::from(Span::styled("     ________________", dim)));
        }
        QuestionKind::MultipleChoice | QuestionKind::Checkbox => {
            let bullet = if question.kind == QuestionKind::Checkbox {
                "☐"
            } else {
                "○"
            };
            let options = question.options.as_deref().unwrap_or_default();
            if options.is_empty() {
                lines.push(Line::from(Span::styled("     (no options)", dim)));
            }
            for option in options {
                lines.push(Line::from(Span::styled(
                    format!("     {bullet} {option}"),
                    detail,
                )));
            }
            if matches!(builder.editor, Some(BuilderEditor::Option { index }) if index == idx) {
                lines.push(Line::from(vec![
                    Span::styled("     + ", Style::default().fg(Color::Green)),
                    Span::styled(
                        builder.composer.pending_option(&question.id),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled("▌", Style::default().fg(Color::Cyan)),
                ]));
            }
        }
        QuestionKind::FileUpload => {}
    }

    match &question.attached_file {
        Some(file) => lines.push(Line::from(Span::styled(
            format!("     📎 {}", file.name),
            detail,
        ))),
        None if question.kind == QuestionKind::FileUpload => {
            lines.push(Line::from(Span::styled("     (no file chosen)", dim)));
        }
        None => {}
    }

    lines.push(Line::from(""));
    lines
}
