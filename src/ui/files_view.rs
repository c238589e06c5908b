use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use super::theme;
use super::util::truncate_width;
use crate::app::{App, Pane};
use crate::manager::sort_key;

pub fn draw_files(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    draw_list_pane(f, chunks[0], app);
    draw_content_pane(f, chunks[1], app);
}

fn border_for(app: &App, pane: Pane) -> ratatui::style::Style {
    if app.pane == pane {
        theme::BORDER_ACTIVE
    } else {
        theme::BORDER_INACTIVE
    }
}

fn draw_list_pane(f: &mut Frame, area: Rect, app: &App) {
    let title = if app.manager.is_empty() {
        " Files ".to_string()
    } else {
        let pos = app.manager.current_index().map(|i| i + 1).unwrap_or(0);
        format!(" Files {}/{} ", pos, app.manager.len())
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_for(app, Pane::Files));

    if app.manager.is_empty() {
        let p = Paragraph::new("No files (o: open)")
            .style(theme::EMPTY_STATE)
            .block(block);
        f.render_widget(p, area);
        return;
    }

    let items: Vec<ListItem> = app
        .manager
        .files()
        .iter()
        .map(|file| {
            let key = sort_key(&file.name);
            let key = if key.is_empty() { "-".to_string() } else { key };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>6} ", key), theme::LIST_KEY),
                Span::styled(file.name.as_str(), theme::LIST_NORMAL),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(app.manager.current_index());

    let list = List::new(items)
        .block(block)
        .highlight_style(theme::LIST_SELECTED);

    f.render_stateful_widget(list, area, &mut state);
}

fn draw_content_pane(f: &mut Frame, area: Rect, app: &App) {
    let title = if app.display.file_name.is_empty() {
        " Content ".to_string()
    } else {
        format!(" {} ", app.display.file_name)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_for(app, Pane::Content));

    if app.display.file_name.is_empty() {
        let p = Paragraph::new("Select a file to view")
            .style(theme::EMPTY_STATE)
            .block(block);
        f.render_widget(p, area);
        return;
    }

    let lines = &app.display.lines;
    let inner = block.inner(area);
    f.render_widget(block, area);

    let inner_height = inner.height as usize;
    let total = lines.len();
    let scroll_offset = app.display.scroll.min(total.saturating_sub(inner_height));
    let visible_end = (scroll_offset + inner_height).min(total);

    let available = inner.width as usize;
    let num_width = if app.config.line_numbers() {
        format!("{}", total.max(1)).len()
    } else {
        0
    };
    let text_width = if num_width > 0 {
        available.saturating_sub(num_width + 1)
    } else {
        available
    };

    let rendered: Vec<Line> = lines[scroll_offset..visible_end]
        .iter()
        .enumerate()
        .map(|(i, line_text)| {
            let text = truncate_width(line_text, text_width);
            if num_width == 0 {
                return Line::from(Span::styled(text, theme::LIST_NORMAL));
            }
            let num_str = format!("{:>width$} ", scroll_offset + i + 1, width = num_width);
            Line::from(vec![
                Span::styled(num_str, theme::LINE_NUMBER),
                Span::styled(text, theme::LIST_NORMAL),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(rendered), inner);
}
