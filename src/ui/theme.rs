use ratatui::style::{Color, Modifier, Style};

// Title bar
pub const TITLE_BAR: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

// Status bar
pub const STATUS_BAR: Style = Style::new().fg(Color::White).bg(Color::DarkGray);
pub const STATUS_ERROR: Style = Style::new().fg(Color::Red).bg(Color::DarkGray);
pub const STATUS_LOADED: Style = Style::new().fg(Color::Green).bg(Color::DarkGray);

// List items
pub const LIST_SELECTED: Style = Style::new()
    .fg(Color::White)
    .bg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);
pub const LIST_NORMAL: Style = Style::new().fg(Color::White);
pub const LIST_KEY: Style = Style::new().fg(Color::DarkGray);

// Borders
pub const BORDER_ACTIVE: Style = Style::new().fg(Color::Cyan);
pub const BORDER_INACTIVE: Style = Style::new().fg(Color::DarkGray);

// Help overlay
pub const HELP_TITLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
pub const HELP_KEY: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
pub const HELP_DESC: Style = Style::new().fg(Color::White);

// Footer hints
pub const HINT_KEY: Style = Style::new().fg(Color::Yellow).bg(Color::DarkGray);
pub const HINT_DESC: Style = Style::new().fg(Color::Gray).bg(Color::DarkGray);

// Empty state
pub const EMPTY_STATE: Style = Style::new().fg(Color::DarkGray);

// Content pane
pub const LINE_NUMBER: Style = Style::new().fg(Color::DarkGray);

// Picker
pub const PICKER_DIR: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
pub const PICKER_FILE: Style = Style::new().fg(Color::White);
pub const PICKER_MARK: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
pub const PICKER_PATH: Style = Style::new().fg(Color::Yellow);
