//! Session settings read from a YAML file.
//!
//! Every field has a default, so a missing file or a partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::chess_errors::ChessErrors;

/// Environment variable naming the YAML configuration file.
pub const CONFIG_PATH_ENV: &str = "CHESS_REFEREE_CONFIG_PATH";
/// Environment variable overriding the log filter.
pub const LOG_LEVEL_ENV: &str = "CHESS_REFEREE_LOG_LEVEL";

/// Settings for one console session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Where `save` writes and `--resume` reads the game.
    pub save_path: PathBuf,
    /// Save after every accepted move.
    pub autosave: bool,
    /// Log filter used when `CHESS_REFEREE_LOG_LEVEL` is unset.
    pub log_level: String,
    /// Print both scores after every move.
    pub show_scores: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from("chess_save.json"),
            autosave: false,
            log_level: "info".into(),
            show_scores: true,
        }
    }
}

impl GameConfig {
    /// Reads the YAML file at `path`. A missing path or file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ChessErrors> {
        match path {
            Some(p) if p.exists() => {
                let content = fs::read_to_string(p)
                    .map_err(|e| ChessErrors::ConfigError(format!("{}: {e}", p.display())))?;
                Self::from_yaml(&content)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, ChessErrors> {
        serde_yaml::from_str(content).map_err(|e| ChessErrors::ConfigError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() -> Result<(), ChessErrors> {
        let cfg = GameConfig::from_yaml("autosave: true\n")?;
        assert!(cfg.autosave);
        assert_eq!(cfg.save_path, PathBuf::from("chess_save.json"));
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.show_scores);
        Ok(())
    }

    #[test]
    fn all_keys_are_read() -> Result<(), ChessErrors> {
        let cfg = GameConfig::from_yaml(
            "save_path: /tmp/game.json\nautosave: false\nlog_level: debug\nshow_scores: false\n",
        )?;
        assert_eq!(cfg.save_path, PathBuf::from("/tmp/game.json"));
        assert_eq!(cfg.log_level, "debug");
        assert!(!cfg.show_scores);
        Ok(())
    }

    #[test]
    fn malformed_yaml_is_a_config_error() {
        assert!(matches!(
            GameConfig::from_yaml("autosave: [not, a, bool]"),
            Err(ChessErrors::ConfigError(_))
        ));
    }

    #[test]
    fn missing_file_yields_defaults() -> Result<(), ChessErrors> {
        let path = Path::new("/nonexistent/chess_referee.yaml");
        assert_eq!(GameConfig::load(Some(path))?, GameConfig::default());
        assert_eq!(GameConfig::load(None)?, GameConfig::default());
        Ok(())
    }
}
