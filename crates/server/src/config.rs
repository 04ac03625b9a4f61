use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable overriding `server.addr`.
const ADDR_ENV: &str = "TIMETABLE_ADDR";

/// Read `config.toml` and store it in the global `OnceLock`. Only the
/// first call has any effect.
///
/// If the file is missing or unparseable, every section takes its defaults.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let mut config = read_config(CONFIG_PATH);
        if let Ok(addr) = std::env::var(ADDR_ENV) {
            config.server.addr = addr;
        }
        tracing::info!(
            addr = %config.server.addr,
            division = %config.calendar.division,
            holidays_file = config.calendar.holidays_file.as_deref().unwrap_or("-"),
            "configuration loaded"
        );
        config
    })
}

/// Parse a config file, falling back to defaults on any error.
pub fn read_config(path: &str) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents).unwrap_or_else(|e| {
            tracing::warn!("Failed to parse {path}: {e}; using defaults");
            AppConfig::default()
        }),
        Err(e) => {
            tracing::warn!("{path} not found ({e}); using defaults");
            AppConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}
