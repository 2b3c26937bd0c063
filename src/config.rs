// Configuration for the idea board
//
// Configuration is loaded in order of precedence:
// 1. Environment variables (highest priority)
// 2. Config file (~/.config/ideaboard/config.toml)
// 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::fmt::Write as _;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Timestamp format for card footers when nothing else is configured
const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Content lengths at which the character counter escalates
const DEFAULT_COUNTER_THRESHOLDS: [usize; 3] = [100, 115, 130];

/// Log file rotation strategy
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LogRotation {
    /// Rotate log files hourly
    Hourly,
    /// Rotate log files daily (default)
    #[default]
    Daily,
    /// Never rotate - single log file
    Never,
}

impl LogRotation {
    /// Parse rotation string from config
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hourly" => Self::Hourly,
            "daily" => Self::Daily,
            "never" => Self::Never,
            _ => Self::Daily, // Default to daily for unknown values
        }
    }

    /// Convert to string for TOML serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
    /// Enable file logging (in addition to the in-TUI log buffer)
    pub file_enabled: bool,
    /// Directory for log files
    pub file_dir: PathBuf,
    /// Log file rotation strategy
    pub file_rotation: LogRotation,
    /// Prefix for log file names (e.g., "ideaboard" -> "ideaboard.2024-01-15.log")
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false, // Opt-in feature
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: "ideaboard".to_string(),
        }
    }
}

/// Logging settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
struct FileLogging {
    level: Option<String>,
    file_enabled: Option<bool>,
    file_dir: Option<String>,
    file_rotation: Option<String>,
    file_prefix: Option<String>,
}

impl LoggingConfig {
    /// Create from file config with defaults
    fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            level: file.level.unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file
                .file_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.file_dir),
            file_rotation: file
                .file_rotation
                .map(|s| LogRotation::from_str(&s))
                .unwrap_or(defaults.file_rotation),
            file_prefix: file.file_prefix.unwrap_or(defaults.file_prefix),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "auto", "dracula", "monokai", "nord", "gruvbox"
    pub theme: String,

    /// strftime format for the card footer timestamps
    pub time_format: String,

    /// Demo mode: seed the board with sample ideas for showcasing the TUI
    pub demo_mode: bool,

    /// Content lengths past which the counter escalates, sorted ascending
    pub counter_thresholds: Vec<usize>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    theme: Option<String>,
    time_format: Option<String>,
    demo_mode: Option<bool>,
    counter_thresholds: Option<Vec<usize>>,

    /// Optional [logging] section
    logging: Option<FileLogging>,
}

impl Config {
    /// Get the config file path: ~/.config/ideaboard/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("ideaboard").join("config.toml"))
    }

    /// Create config template if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Create parent directory
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        let template = r#"# ideaboard configuration
# Uncomment and modify options as needed

# Theme: auto, dracula, monokai, nord, gruvbox
# "auto" inherits your terminal's ANSI palette
# theme = "auto"

# strftime format for the card footer timestamps
# time_format = "%Y-%m-%d %H:%M:%S"

# Seed the board with sample ideas at startup (IDEABOARD_DEMO=1 does the same)
# demo_mode = false

# Content lengths past which the character counter changes color
# counter_thresholds = [100, 115, 130]

# Logging configuration
# [logging]
# level = "info"          # trace, debug, info, warn, error (RUST_LOG overrides)
# file_enabled = false    # Also write logs to rotating files
# file_dir = "./logs"
# file_rotation = "daily" # hourly, daily, never
# file_prefix = "ideaboard"
"#;

        // Write template (ignore errors - config is optional)
        let _ = std::fs::write(&path, template);
    }

    /// Load file config if it exists
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                FileConfig::default()
            }),
            Err(_) => FileConfig::default(), // File doesn't exist, use defaults
        }
    }

    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# ideaboard configuration

# Theme: auto, dracula, monokai, nord, gruvbox
theme = "{theme}"

# strftime format for the card footer timestamps
time_format = "{time_format}"

# Seed the board with sample ideas at startup
demo_mode = {demo_mode}

# Content lengths past which the character counter changes color
counter_thresholds = {thresholds:?}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
file_enabled = {file_enabled}
file_dir = "{file_dir}"
file_rotation = "{file_rotation}"
file_prefix = "{file_prefix}"
"#,
            theme = self.theme,
            time_format = self.time_format,
            demo_mode = self.demo_mode,
            thresholds = self.counter_thresholds,
            log_level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            file_rotation = self.logging.file_rotation.as_str(),
            file_prefix = self.logging.file_prefix,
        )
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml())
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        let mut config = Self::resolve(Self::load_file_config());

        // Theme: env > file > default
        if let Ok(theme) = std::env::var("IDEABOARD_THEME") {
            config.theme = theme;
        }

        // Footer time format: env > file > default
        if let Ok(format) = std::env::var("IDEABOARD_TIME_FORMAT") {
            config.time_format = validated_time_format(format);
        }

        // Demo mode: env > file > default
        if let Ok(demo) = std::env::var("IDEABOARD_DEMO") {
            config.demo_mode = demo == "1" || demo.to_lowercase() == "true";
        }

        config
    }

    /// Apply defaults to whatever the file provided
    fn resolve(file: FileConfig) -> Self {
        let theme = file.theme.unwrap_or_else(|| "auto".to_string());

        let time_format = validated_time_format(
            file.time_format
                .unwrap_or_else(|| DEFAULT_TIME_FORMAT.to_string()),
        );

        // Severity ranking assumes ascending thresholds, so sort whatever
        // the user wrote
        let mut counter_thresholds = file
            .counter_thresholds
            .unwrap_or_else(|| DEFAULT_COUNTER_THRESHOLDS.to_vec());
        counter_thresholds.sort_unstable();

        Self {
            theme,
            time_format,
            demo_mode: file.demo_mode.unwrap_or(false),
            counter_thresholds,
            logging: LoggingConfig::from_file(file.logging),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "auto".to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            demo_mode: false,
            counter_thresholds: DEFAULT_COUNTER_THRESHOLDS.to_vec(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Probe a strftime format against a real timestamp and fall back to the
/// default if chrono cannot render it. A bad format would otherwise panic
/// at draw time, inside the alternate screen.
fn validated_time_format(candidate: String) -> String {
    let mut probe = String::new();
    match write!(probe, "{}", chrono::Utc::now().format(&candidate)) {
        Ok(()) => candidate,
        Err(_) => {
            eprintln!(
                "Warning: invalid time_format {:?}, using {:?}",
                candidate, DEFAULT_TIME_FORMAT
            );
            DEFAULT_TIME_FORMAT.to_string()
        }
    }
}
