use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{files_view, help_overlay, picker_view, theme};
use crate::app::{App, Pane};
use crate::manager::SortMode;

/// Text rows inside the content pane for a terminal `height` rows tall:
/// title bar, status bar and the pane's two borders are taken off.
pub fn content_rows(height: u16) -> usize {
    height.saturating_sub(4) as usize
}

pub fn draw_layout(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(3),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    draw_title_bar(f, chunks[0], app);
    files_view::draw_files(f, chunks[1], app);
    draw_status_bar(f, chunks[2], app);

    if let Some(ref state) = app.picker {
        picker_view::draw_picker(f, f.area(), state);
    }

    // Help overlay (on top of everything)
    if app.show_help {
        help_overlay::draw_help(f, f.area());
    }
}

fn draw_title_bar(f: &mut Frame, area: Rect, app: &App) {
    let left = format!(" seqview v{} ", env!("CARGO_PKG_VERSION"));
    let right = match app.manager.current() {
        Some(file) => format!(" {} ", file.path.display()),
        None => String::new(),
    };
    let pad = (area.width as usize).saturating_sub(left.len() + right.chars().count());

    let line = Line::from(vec![
        Span::styled(left, theme::TITLE_BAR),
        Span::styled(" ".repeat(pad), theme::TITLE_BAR),
        Span::styled(right, theme::TITLE_BAR),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn hint_text(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints: Vec<(&str, &str)> = if app.picker.is_some() {
        vec![
            ("Space", "mark"),
            ("Enter", "open"),
            ("s", "select"),
            ("Esc", "close"),
        ]
    } else {
        match app.pane {
            Pane::Files => vec![("o", "open"), ("j/k", "file"), ("l", "content")],
            Pane::Content => vec![("n/p", "file"), ("j/k", "scroll"), ("h", "files")],
        }
    };
    hints.push(("?", "help"));
    hints
}

fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut left_spans: Vec<Span> = Vec::new();

    if let Some(ref err) = app.last_error {
        left_spans.push(Span::styled(format!(" ERR: {} ", err), theme::STATUS_ERROR));
    } else if let Some(ref at) = app.loaded_at {
        left_spans.push(Span::styled(
            format!(" loaded {} ", at.format("%H:%M:%S")),
            theme::STATUS_LOADED,
        ));
    }

    if app.manager.sort_mode() == SortMode::Numeric {
        left_spans.push(Span::styled(" NUMERIC ", theme::STATUS_BAR));
    }

    let hints = hint_text(app);
    let mut hint_spans: Vec<Span> = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            hint_spans.push(Span::styled("  ", theme::STATUS_BAR));
        }
        hint_spans.push(Span::styled(*key, theme::HINT_KEY));
        hint_spans.push(Span::styled(":", theme::HINT_DESC));
        hint_spans.push(Span::styled(*desc, theme::HINT_DESC));
    }
    hint_spans.push(Span::styled(" ", theme::STATUS_BAR));

    let left_width: usize = left_spans.iter().map(|s| s.width()).sum();
    let hint_width: usize = hint_spans.iter().map(|s| s.width()).sum();
    let gap = (area.width as usize).saturating_sub(left_width + hint_width);

    let mut spans = left_spans;
    spans.push(Span::styled(" ".repeat(gap), theme::STATUS_BAR));
    spans.extend(hint_spans);

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
