// Script editor pane rendering.
// - Draws the active tab's buffer with a line-number gutter.
// - Marks the cursor cell and keeps it inside the visible window.
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render_script_pane(frame: &mut Frame, app: &App, area: Rect) {
    let title = app
        .active_tab()
        .map(|tab| tab.title.clone())
        .unwrap_or_else(|| "Script".to_string());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightBlue))
        .title_top(Line::from(title).left_aligned())
        .title_top(
            Line::styled("(ctrl+e runs)", Style::default().fg(Color::DarkGray)).right_aligned(),
        );

    let Some(tab) = app.active_tab() else {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from("No tabs open."),
            Line::from("Press Ctrl+t to create one."),
        ])
        .block(block)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, area);
        return;
    };

    let inner_height = area.height.saturating_sub(2).max(1) as usize;
    let (cursor_row, cursor_col) = tab.buffer.cursor();
    let top = (cursor_row + 1).saturating_sub(inner_height);
    let gutter_width = tab.buffer.lines().len().to_string().len().max(2);

    let lines = tab
        .buffer
        .lines()
        .iter()
        .enumerate()
        .skip(top)
        .take(inner_height)
        .map(|(row, line)| {
            let gutter = Span::styled(
                format!("{:>gutter_width$} ", row + 1),
                Style::default().fg(Color::DarkGray),
            );
            let mut spans = vec![gutter];
            if row == cursor_row {
                spans.extend(cursor_line_spans(line, cursor_col));
            } else {
                spans.push(Span::raw(line.clone()));
            }
            Line::from(spans)
        })
        .collect::<Vec<_>>();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

// Split the cursor line so the cell under the cursor renders inverted; at
// end of line the cursor sits on a synthetic space.
fn cursor_line_spans(line: &str, cursor_col: usize) -> Vec<Span<'static>> {
    let before = line.chars().take(cursor_col).collect::<String>();
    let cursor_char = line.chars().nth(cursor_col).unwrap_or(' ').to_string();
    let after = line.chars().skip(cursor_col + 1).collect::<String>();

    vec![
        Span::raw(before),
        Span::styled(cursor_char, Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(after),
    ]
}
