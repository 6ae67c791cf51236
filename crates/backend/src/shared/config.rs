use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub data: DataConfig,
    /// File the config was read from, `None` for the embedded default
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Directory of backend.log, relative paths resolve against the executable
    pub dir: String,
    /// EnvFilter directive used when RUST_LOG is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: "target/logs".to_string(),
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Fill the in-memory lists with demo records on startup
    pub seed_demo: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self { seed_demo: true }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[logging]
dir = "target/logs"
level = "info"

[data]
seed_demo = true
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Runs before tracing is initialised, so the chosen file is reported
/// through `Config::source` instead of being logged here.
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");
            if config_path.exists() {
                let contents = std::fs::read_to_string(&config_path)?;
                let mut config: Config = toml::from_str(&contents)?;
                config.source = Some(config_path);
                return Ok(config);
            }
        }
    }

    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Log directory from configuration.
/// Resolves relative paths relative to the executable directory
pub fn get_log_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.logging.dir);

    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(dir);
        }
    }

    PathBuf::from(&config.logging.dir)
}
