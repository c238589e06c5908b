use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::theme;
use super::util::centered;

pub fn draw_help(f: &mut Frame, area: Rect) {
    let popup_area = centered(area, 60, 26);

    // Clear background
    f.render_widget(Clear, popup_area);

    let bindings = [
        ("o", "Open file picker"),
        ("n / ]", "Next file"),
        ("p / [", "Previous file (scrolled to end)"),
        ("j/k or Up/Down", "Next/prev file / scroll content"),
        ("h/l or Left/Right", "Switch panes"),
        ("Tab", "Toggle pane"),
        ("g / G", "Jump to top / bottom of file"),
        ("r", "Reload current file"),
        ("", ""),
        ("Picker: Space", "Mark / unmark file"),
        ("Picker: Enter", "Open dir / pick file / confirm marks"),
        ("Picker: s", "Confirm marked files"),
        ("Picker: Bksp", "Parent directory"),
        ("Picker: .", "Toggle hidden files"),
        ("Picker: Esc", "Close picker"),
        ("", ""),
        ("? / Ctrl-H", "Toggle this help"),
        ("q / Ctrl+C", "Quit"),
    ];

    let mut lines = vec![
        Line::from(Span::styled(" Keybindings", theme::HELP_TITLE)),
        Line::from(""),
    ];

    for (key, desc) in &bindings {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:20}", key), theme::HELP_KEY),
            Span::styled(*desc, theme::HELP_DESC),
        ]));
    }

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(theme::BORDER_ACTIVE);

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, popup_area);
}
