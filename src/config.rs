use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::manager::SortMode;

/// How often the tick event fires (ms).
pub const TICK_RATE_MS: u64 = 250;

/// File watcher debounce interval (ms).
pub const DEBOUNCE_MS: u64 = 200;

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = ".seqview.toml";

/// Default log file name, placed in the system temp dir.
pub const LOG_FILE: &str = "seqview.log";

// ---------------------------------------------------------------------------
// Project config (.seqview.toml)
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct ProjectConfig {
    pub display: Option<DisplayConfig>,
    pub sort: Option<SortConfig>,
    pub picker: Option<PickerConfig>,
    pub watch: Option<WatchConfig>,
    pub log: Option<LogConfig>,
}

#[derive(Debug, Deserialize)]
pub struct DisplayConfig {
    pub tick_rate: Option<u64>,
    pub line_numbers: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct SortConfig {
    /// "lexical" (default) or "numeric".
    pub mode: Option<SortMode>,
}

#[derive(Debug, Deserialize)]
pub struct PickerConfig {
    pub show_hidden: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct WatchConfig {
    /// Set to false to stop re-reading the current file when it changes.
    pub enabled: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct LogConfig {
    pub file: Option<PathBuf>,
}

impl ProjectConfig {
    pub fn tick_rate(&self) -> u64 {
        self.display
            .as_ref()
            .and_then(|d| d.tick_rate)
            .unwrap_or(TICK_RATE_MS)
    }

    pub fn line_numbers(&self) -> bool {
        self.display
            .as_ref()
            .and_then(|d| d.line_numbers)
            .unwrap_or(true)
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort.as_ref().and_then(|s| s.mode).unwrap_or_default()
    }

    pub fn show_hidden(&self) -> bool {
        self.picker
            .as_ref()
            .and_then(|p| p.show_hidden)
            .unwrap_or(false)
    }

    pub fn watch_enabled(&self) -> bool {
        self.watch.as_ref().and_then(|w| w.enabled).unwrap_or(true)
    }

    pub fn log_file(&self) -> PathBuf {
        self.log
            .as_ref()
            .and_then(|l| l.file.clone())
            .unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE))
    }
}

/// Load project config from `.seqview.toml` in the given directory.
/// Returns default config if the file doesn't exist or can't be parsed.
pub fn load_project_config(cwd: &Path) -> ProjectConfig {
    let path = cwd.join(CONFIG_FILE);
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        toml::from_str(&content).unwrap_or_default()
    } else {
        ProjectConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_project_config(dir.path());
        assert_eq!(config.tick_rate(), TICK_RATE_MS);
        assert!(config.line_numbers());
        assert_eq!(config.sort_mode(), SortMode::Lexical);
        assert!(!config.show_hidden());
        assert!(config.watch_enabled());
        assert_eq!(config.log_file(), std::env::temp_dir().join(LOG_FILE));
    }

    #[test]
    fn reads_all_sections() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"
[display]
tick_rate = 100
line_numbers = false

[sort]
mode = "numeric"

[picker]
show_hidden = true

[watch]
enabled = false

[log]
file = "/var/tmp/sv.log"
"#,
        )
        .unwrap();

        let config = load_project_config(dir.path());
        assert_eq!(config.tick_rate(), 100);
        assert!(!config.line_numbers());
        assert_eq!(config.sort_mode(), SortMode::Numeric);
        assert!(config.show_hidden());
        assert!(!config.watch_enabled());
        assert_eq!(config.log_file(), PathBuf::from("/var/tmp/sv.log"));
    }

    #[test]
    fn unparsable_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[sort]\nmode = \"sideways\"\n").unwrap();

        let config = load_project_config(dir.path());
        assert_eq!(config.sort_mode(), SortMode::Lexical);
    }
}
