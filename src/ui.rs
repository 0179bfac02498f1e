// Root UI composition and shared visual components.
// - Builds the global layout (tab bar + script editor + status footer).
// - Renders shared chrome: tab bar, keybind popup, and notice modal.
// - Delegates editor rendering to ui::editor.
mod editor;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{
    app::App,
    model::{MAX_TABS, NoticeKind},
};

const TAB_LABEL_MAX_WIDTH: usize = 20;

pub fn render(frame: &mut Frame, app: &App) {
    let [tabs_area, content, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_tab_bar(frame, app, tabs_area);
    editor::render_script_pane(frame, app, content);
    render_footer(frame, app, footer);

    if app.show_keybinds {
        render_keybinds_popup(frame);
    }
    if app.notice.is_some() {
        render_notice_modal(frame, app);
    }
}

fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let attach_state = if app.attached {
        Line::styled("Attached", Style::default().fg(Color::LightGreen)).right_aligned()
    } else {
        Line::styled("Detached", Style::default().fg(Color::LightRed)).right_aligned()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title_top(Line::from(format!("Tabs {}/{MAX_TABS}", app.tabs.len())).left_aligned())
        .title_top(attach_state);

    if app.tabs.is_empty() {
        let hint = Paragraph::new(Line::styled(
            "no tabs open (ctrl+t)",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let labels = app
        .tabs
        .iter()
        .enumerate()
        .map(|(index, tab)| {
            if index == app.selected
                && let Some(rename) = &app.rename
            {
                rename_label(index, rename)
            } else {
                Line::from(format!(
                    " {} {} ",
                    index + 1,
                    truncate_to_width(&tab.title, TAB_LABEL_MAX_WIDTH)
                ))
            }
        })
        .collect::<Vec<_>>();

    let tabs = Tabs::new(labels)
        .select(app.selected)
        .divider(Span::styled("|", Style::default().fg(Color::DarkGray)))
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(block);

    frame.render_widget(tabs, area);
}

// Header being renamed: show the draft with a visible cursor cell in place
// of the committed title.
fn rename_label(index: usize, rename: &crate::model::Rename) -> Line<'static> {
    let before = rename.draft.chars().take(rename.cursor).collect::<String>();
    let cursor_char = rename
        .draft
        .chars()
        .nth(rename.cursor)
        .unwrap_or(' ')
        .to_string();
    let after = rename
        .draft
        .chars()
        .skip(rename.cursor + 1)
        .collect::<String>();

    Line::from(vec![
        Span::raw(format!(" {} ", index + 1)),
        Span::raw(before),
        Span::styled(cursor_char, Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(after),
        Span::raw(" "),
    ])
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let footer = Line::from(vec![
        Span::raw(app.status_message.clone()),
        Span::styled("  (F1 keybinds)", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(footer), area);
}

fn render_keybinds_popup(frame: &mut Frame) {
    let popup = centered_area(frame.area(), 60, 70);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("Press F1 or Esc to close this window."),
        Line::from(""),
        keybind_section("SESSION"),
        keybind_row("Ctrl+a", "attach to the target"),
        keybind_row("Ctrl+e / F5", "execute the active tab's script"),
        Line::from(""),
        keybind_section("TABS"),
        keybind_row("Ctrl+t", "add tab (max 4)"),
        keybind_row("Ctrl+w", "delete active tab"),
        keybind_row("Ctrl+n / Ctrl+p", "next / previous tab"),
        keybind_row("F2", "rename tab header (Enter commits)"),
        Line::from(""),
        keybind_section("EDITOR"),
        keybind_row("Arrows, Home/End", "move cursor"),
        keybind_row("Enter", "new line"),
        keybind_row("Backspace/Delete", "delete"),
        keybind_row("Tab", "indent"),
        Line::from(""),
        keybind_section("GLOBAL"),
        keybind_row("Ctrl+c", "quit"),
        keybind_row("Enter/Esc", "dismiss notice"),
    ];

    let popup_widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Keybinds"))
        .alignment(Alignment::Left);
    frame.render_widget(popup_widget, popup);
}

fn render_notice_modal(frame: &mut Frame, app: &App) {
    let Some(notice) = &app.notice else {
        return;
    };

    let color = match notice.kind {
        NoticeKind::Info => Color::LightGreen,
        NoticeKind::Warning => Color::Yellow,
        NoticeKind::Error => Color::LightRed,
    };

    let popup = centered_area(frame.area(), 60, 30);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(""),
        Line::from(notice.body.clone()),
        Line::from(""),
        Line::styled(
            "Press Enter or Esc to dismiss.",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let popup_widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(notice.title.clone())
                .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(popup_widget, popup);
}

fn centered_area(outer: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Percentage(height_percent)])
        .flex(Flex::Center)
        .areas(outer);
    let [area] = Layout::horizontal([Constraint::Percentage(width_percent)])
        .flex(Flex::Center)
        .areas(vertical);
    area
}

fn keybind_section(title: &str) -> Line<'_> {
    Line::styled(title, Style::default().add_modifier(Modifier::BOLD))
}

fn keybind_row<'a>(keys: &'a str, action: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{keys:<18}"), Style::default().fg(Color::Cyan)),
        Span::raw(action),
    ])
}

fn truncate_to_width(input: &str, max_width: usize) -> String {
    if input.width() <= max_width {
        return input.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in input.chars() {
        let char_width = ch.width().unwrap_or(0);
        if used + char_width > max_width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += char_width;
    }
    out.push('…');
    out
}
