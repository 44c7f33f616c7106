//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Local config: `<dir>/.orgtree.toml` (default: cwd)
//! 3. Environment variables: `ORGTREE_*` prefix

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::domain::DEFAULT_INDENT_WIDTH;

/// Local config file name, looked up in the session directory.
pub const CONFIG_FILE_NAME: &str = ".orgtree.toml";

/// Unified configuration for orgtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Spaces per depth level in the rendered team structure
    pub indent_width: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

impl Settings {
    /// Load settings for a session directory (defaults to cwd when `None`).
    ///
    /// A missing config file is fine; a malformed one is an error.
    pub fn load(dir: Option<&Path>) -> Result<Self, ConfigError> {
        let dir = dir.unwrap_or_else(|| Path::new("."));
        let config_path = dir.join(CONFIG_FILE_NAME);

        let mut builder = Config::builder()
            .set_default("indent_width", DEFAULT_INDENT_WIDTH as u64)?;

        if config_path.is_file() {
            builder = builder.add_source(File::from(config_path));
        }

        let settings: Settings = builder
            .add_source(Environment::with_prefix("ORGTREE"))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        // Width 0 would collapse all depths onto one indent level
        if self.indent_width == 0 {
            return Err(ConfigError::Message(
                "indent_width must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_indent_width_matches_render_default() {
        assert_eq!(Settings::default().indent_width, DEFAULT_INDENT_WIDTH);
    }
}
