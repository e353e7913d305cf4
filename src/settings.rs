//! Settings for the command-line front ends.
//!
//! Loaded from a TOML file; every key is optional.
//!
//! ```
//! use river_crossing::session::Mode;
//! use river_crossing::settings::Settings;
//!
//! let settings = Settings::from_toml_str(r#"
//!     mode = "assisted"
//!     step_delay_ms = 500
//! "#).unwrap();
//!
//! assert_eq!(settings.mode, Mode::Assisted);
//! assert_eq!(settings.step_delay().as_millis(), 500);
//! assert_eq!(settings.log_filter, "river_crossing=info");
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::session::Mode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Mode the interactive game starts in.
    pub mode: Mode,

    /// Pause between crossings during autoplay.
    pub step_delay_ms: u64,

    /// `tracing` filter directive; `RUST_LOG` takes precedence.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: Mode::Auto,
            step_delay_ms: 1500,
            log_filter: "river_crossing=info".to_string(),
        }
    }
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Invalid("log_filter must not be empty".to_string()));
        }
        Ok(())
    }

    #[inline]
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let s = Settings::from_toml_str("").unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.step_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            Settings::from_toml_str("speed = 3"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn blank_log_filter_is_invalid() {
        assert!(matches!(
            Settings::from_toml_str(r#"log_filter = "  ""#),
            Err(ConfigError::Invalid(_))
        ));
    }
}
