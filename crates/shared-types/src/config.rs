use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Division used when the config file does not name one.
pub const DEFAULT_DIVISION: &str = "england-and-wales";

/// Listen address used when neither config nor environment sets one.
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

/// `[server]` section of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_addr")]
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
        }
    }
}

fn default_addr() -> String {
    DEFAULT_ADDR.to_string()
}

/// `[calendar]` section of `config.toml`.
///
/// Without a `holidays_file` the built-in England and Wales table is used.
/// `additional_closures` are non-working days on top of whichever table is
/// active.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarConfig {
    #[serde(default = "default_division")]
    pub division: String,
    #[serde(default)]
    pub holidays_file: Option<String>,
    #[serde(default)]
    pub additional_closures: Vec<NaiveDate>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            division: default_division(),
            holidays_file: None,
            additional_closures: Vec::new(),
        }
    }
}

fn default_division() -> String {
    DEFAULT_DIVISION.to_string()
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
}
