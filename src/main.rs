mod app;
mod config;
mod data;
mod display;
mod error;
mod event;
mod logging;
mod manager;
mod model;
mod renderer;
mod ui;
mod watcher;

use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self as ct_event, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};

use crate::app::App;
use crate::event::AppEvent;
use crate::manager::SortMode;
use crate::model::selection::SelectedFile;

#[derive(Parser)]
#[command(
    name = "seqview",
    version,
    about = "View a selection of text files in filename order",
    override_help = HELP_TEXT,
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Directory relative paths are resolved against (defaults to current directory)
    #[arg(long, global = true)]
    cwd: Option<PathBuf>,

    /// Order by the numeric value of the filename digits instead of as strings
    #[arg(long, global = true)]
    numeric: bool,

    /// Files to open as the initial selection
    files: Vec<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Print the order the given files would be shown in
    Order {
        /// Print JSON instead of plain text
        #[arg(long)]
        json: bool,

        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

const HELP_TEXT: &str = "\
seqview - view a selection of text files in filename order

USAGE:
  seqview [OPTIONS] [FILE]...          Start the viewer with FILEs selected
  seqview order [OPTIONS] FILE...      Print the order FILEs are shown in

ORDERING:
  Files are ordered by the digits in the part of the name before the first
  '.', compared as strings: file10.txt comes before file2.txt. Pass
  --numeric (or set [sort] mode = \"numeric\" in .seqview.toml) to compare
  them as numbers instead.

OPTIONS:
  --cwd <DIR>       Resolve relative paths and read .seqview.toml here
  --numeric         Compare filename digits as numbers
  --json            (order) Print JSON
  -h, --help        Print this help
  -V, --version     Print version

TUI KEYBINDINGS:
  o                  Open file picker
  n / ]  p / [       Next / previous file
  j/k  Up/Down       Next/prev file (list) / scroll (content)
  h/l  Left/Right    Switch panes
  g / G              Jump to top / bottom of file
  r                  Reload current file
  Space / Enter / s  Picker: mark / open / confirm marked
  ?                  Toggle help overlay
  q / Ctrl+C         Quit

LOGGING:
  Logs go to seqview.log in the temp dir (or [log] file in .seqview.toml).
  Set SEQVIEW_LOG=seqview=debug for more detail.";

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.command.is_some() && !cli.files.is_empty() {
        anyhow::bail!("files go after the subcommand, e.g. `seqview order FILE...`");
    }

    let project_cwd = resolve_cwd(cli.cwd)?;
    let config = config::load_project_config(&project_cwd);
    let sort_mode = if cli.numeric {
        SortMode::Numeric
    } else {
        config.sort_mode()
    };

    match cli.command {
        Some(Command::Order { json, files }) => print_order(&project_cwd, &files, sort_mode, json),
        None => {
            logging::init(&config.log_file())?;
            run_tui(App::new(project_cwd, config, sort_mode), cli.files)
        }
    }
}

fn resolve_cwd(cwd: Option<PathBuf>) -> Result<PathBuf> {
    match cwd {
        Some(p) => Ok(std::fs::canonicalize(p)?),
        None => Ok(std::env::current_dir()?),
    }
}

fn print_order(project_cwd: &Path, files: &[PathBuf], mode: SortMode, json: bool) -> Result<()> {
    let selection = files
        .iter()
        .map(|p| SelectedFile::from_path(project_cwd.join(p)))
        .collect();
    let entries = manager::order_entries(selection, mode);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            let key = if entry.key.is_empty() { "-" } else { entry.key.as_str() };
            println!("{:>4}  {:>8}  {}", entry.position + 1, key, entry.path.display());
        }
    }
    Ok(())
}

fn run_tui(app: App, files: Vec<PathBuf>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app, files);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {}", e);
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    files: Vec<PathBuf>,
) -> Result<()> {
    info!(cwd = %app.project_cwd.display(), "starting");

    // Create event channel before the first selection so reads run in the background
    let (tx, rx) = mpsc::channel::<AppEvent>();
    app.event_tx = Some(tx.clone());

    if app.config.watch_enabled() {
        match watcher::start_watcher(tx) {
            Ok(w) => app.watcher = Some(w),
            Err(e) => {
                warn!(error = %e, "file watcher unavailable");
                app.last_error = Some(format!("Watcher: {}", e));
            }
        }
    }

    if files.is_empty() {
        app.open_picker();
    } else {
        app.load_paths(&files);
    }

    app.resize(terminal.size()?.height);

    let tick_rate = Duration::from_millis(app.config.tick_rate());
    let mut last_tick = Instant::now();

    loop {
        // Draw only when dirty
        if app.dirty {
            terminal.draw(|f| ui::draw(f, &app))?;
            app.dirty = false;
        }

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        if ct_event::poll(timeout)? {
            match ct_event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key(&mut app, key);
                    app.mark_dirty();
                }
                Event::Resize(_, height) => {
                    app.resize(height);
                    app.mark_dirty();
                }
                _ => {}
            }
        }

        // Read completions and watcher events
        while let Ok(evt) = rx.try_recv() {
            match evt {
                AppEvent::ReadComplete(completion) => app.handle_read_complete(completion),
                AppEvent::FileChanged(path) => app.handle_file_changed(&path),
            }
            app.mark_dirty();
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            info!("quitting");
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keybindings (always active)
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = !app.show_help;
            return;
        }
        KeyCode::Char('h') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.show_help = !app.show_help;
            return;
        }
        KeyCode::Esc if app.show_help => {
            app.show_help = false;
            return;
        }
        _ => {}
    }

    // Don't process other keys when help is showing
    if app.show_help {
        return;
    }

    if app.picker.is_some() {
        handle_picker_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        KeyCode::Char('o') => app.open_picker(),

        // File stepping
        KeyCode::Char('n') | KeyCode::Char(']') => app.next_file(),
        KeyCode::Char('p') | KeyCode::Char('[') => app.prev_file(),

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.navigate_down(),
        KeyCode::Char('k') | KeyCode::Up => app.navigate_up(),
        KeyCode::Char('h') | KeyCode::Left => app.navigate_left(),
        KeyCode::Char('l') | KeyCode::Right => app.navigate_right(),
        KeyCode::Tab => app.toggle_pane(),

        // Jump
        KeyCode::Char('g') => app.jump_top(),
        KeyCode::Char('G') => app.jump_bottom(),

        KeyCode::Char('r') => app.reload_current(),

        _ => {}
    }
}

fn handle_picker_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.close_picker(),
        KeyCode::Char('j') | KeyCode::Down => app.picker_down(),
        KeyCode::Char('k') | KeyCode::Up => app.picker_up(),
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => app.picker_enter(),
        KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => app.picker_parent(),
        KeyCode::Char(' ') => app.picker_toggle_mark(),
        KeyCode::Char('s') => app.picker_confirm(),
        KeyCode::Char('.') => app.picker_toggle_hidden(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_work_before_and_after_order() {
        let cli = Cli::try_parse_from(["seqview", "--numeric", "order", "a2.txt"]).unwrap();
        assert!(cli.numeric);
        assert!(cli.files.is_empty());
        match cli.command {
            Some(Command::Order { json, files }) => {
                assert!(!json);
                assert_eq!(files, vec![PathBuf::from("a2.txt")]);
            }
            None => panic!("order subcommand not recognised"),
        }

        let cli = Cli::try_parse_from(["seqview", "order", "--numeric", "a2.txt"]).unwrap();
        assert!(cli.numeric);
        assert!(cli.command.is_some());

        let cli =
            Cli::try_parse_from(["seqview", "--cwd", "/tmp", "order", "--json", "f"]).unwrap();
        assert_eq!(cli.cwd, Some(PathBuf::from("/tmp")));
        assert!(matches!(cli.command, Some(Command::Order { json: true, .. })));
    }

    #[test]
    fn bare_files_start_the_viewer() {
        let cli = Cli::try_parse_from(["seqview", "--numeric", "b.txt", "a.txt"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.numeric);
        assert_eq!(cli.files, vec![PathBuf::from("b.txt"), PathBuf::from("a.txt")]);
    }

    #[test]
    fn order_requires_files() {
        assert!(Cli::try_parse_from(["seqview", "order"]).is_err());
    }
}
