use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use super::theme;
use super::util::{centered, truncate_width};
use crate::model::picker::{EntryKind, PickerState};

pub fn draw_picker(f: &mut Frame, area: Rect, state: &PickerState) {
    let popup = centered(area, 80, 30);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(format!(" Select files ({} marked) ", state.marked.len()))
        .borders(Borders::ALL)
        .border_style(theme::BORDER_ACTIVE);
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let dir = state.dir.to_string_lossy();
    let header = Paragraph::new(Line::from(Span::styled(
        truncate_width(&dir, chunks[0].width as usize),
        theme::PICKER_PATH,
    )));
    f.render_widget(header, chunks[0]);

    if state.entries.is_empty() {
        let p = Paragraph::new("Empty directory").style(theme::EMPTY_STATE);
        f.render_widget(p, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = state
        .entries
        .iter()
        .map(|entry| {
            let (mark, style) = match entry.kind {
                EntryKind::Parent | EntryKind::Directory => ("    ", theme::PICKER_DIR),
                EntryKind::File if state.is_marked(&entry.path) => ("[x] ", theme::PICKER_MARK),
                EntryKind::File => ("[ ] ", theme::PICKER_FILE),
            };
            let suffix = match entry.kind {
                EntryKind::File => format!("  {}", format_size(entry.size)),
                _ => "/".to_string(),
            };
            ListItem::new(Line::from(vec![
                Span::styled(mark, style),
                Span::styled(entry.name.as_str(), style),
                Span::styled(suffix, theme::LIST_KEY),
            ]))
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.index));

    let list = List::new(items).highlight_style(theme::LIST_SELECTED);
    f.render_stateful_widget(list, chunks[1], &mut list_state);
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{}B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1}K", bytes as f64 / 1024.0)
    } else {
        format!("{:.1}M", bytes as f64 / (1024.0 * 1024.0))
    }
}
