use contracts::shared::indicators::ComparisonMode;
use contracts::shared::period::Period;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    /// Seed of the synthetic data source
    pub seed: u64,
    #[serde(default)]
    pub comparison: ComparisonMode,
    /// Selected period; latest selectable when omitted
    #[serde(default)]
    pub period: Option<Period>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, overridden by `RUST_LOG`
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Optional log file, relative paths resolve next to the executable
    #[serde(default)]
    pub file: Option<String>,
}

fn default_filter() -> String {
    "info".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            file: None,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[dashboard]
seed = 20251113
comparison = "month"

[logging]
filter = "info"
file = "target/logs/backend.log"
"#;

/// Locate config.toml next to the executable
pub fn find_config_file() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    let config_path = exe_path.parent()?.join("config.toml");
    config_path.exists().then_some(config_path)
}

/// Load configuration from the given file, or the embedded default
///
/// Called before logging is initialized, so it does not log itself.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config: Config = match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str(&contents)?
        }
        None => toml::from_str(DEFAULT_CONFIG)?,
    };
    Ok(config)
}

/// Resolve a configured path; relative paths are taken relative to the
/// executable directory
pub fn resolve_path(path_str: &str) -> PathBuf {
    let path = Path::new(path_str);

    // If absolute path, use as is
    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    // Fallback: use relative to current directory
    PathBuf::from(path_str)
}
