use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::AppError;

/// The three chrome themes. `Dark` is the default when no preference has
/// been stored yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemePreference {
    Light,
    Dark,
    Retro,
}

impl ThemePreference {
    pub fn label(&self) -> &'static str {
        match self {
            ThemePreference::Light => "Light",
            ThemePreference::Dark => "Dark",
            ThemePreference::Retro => "Retro",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ThemePreference::Light => "\u{2600}\u{fe0f}",
            ThemePreference::Dark => "\u{1f319}",
            ThemePreference::Retro => "\u{1f4be}",
        }
    }

    /// Icon + label pair shown on the theme trigger button.
    pub fn trigger_label(&self) -> String {
        format!("{} {} \u{25be}", self.icon(), self.label())
    }

    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::Retro,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_theme")]
    pub theme: ThemePreference,
}

fn default_theme() -> ThemePreference {
    ThemePreference::Dark
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists.
    ///
    /// A file that fails to parse (including one holding a theme name this
    /// build does not recognize) falls back to defaults rather than erroring.
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    fn load_from(config_path: &Path) -> Self {
        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("failed to parse settings: {}; using defaults", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                let _ = default.save_to(config_path);
                default
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    fn save_to(&self, config_path: &Path) -> Result<(), AppError> {
        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(config_path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("resumepad");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme, ThemePreference::Dark);
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings {
            theme: ThemePreference::Light,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_empty_config_uses_default_theme() {
        let json = r#"{}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.theme, ThemePreference::Dark);
    }

    #[test]
    fn test_unrecognized_theme_falls_back_to_default() {
        // A stored theme this build doesn't know is a parse failure, and
        // load_from treats parse failures as "no preference".
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"theme": "Neon"}"#).unwrap();

        let settings = AppSettings::load_from(&path);
        assert_eq!(settings.theme, ThemePreference::Dark);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = AppSettings {
            theme: ThemePreference::Retro,
        };
        settings.save_to(&path).unwrap();

        let loaded = AppSettings::load_from(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = AppSettings::load_from(&path);
        assert_eq!(settings.theme, ThemePreference::Dark);
    }

    #[test]
    fn test_trigger_label_pairs() {
        assert_eq!(ThemePreference::Dark.label(), "Dark");
        assert!(ThemePreference::Light.trigger_label().contains("Light"));
        assert!(ThemePreference::Retro.trigger_label().contains(ThemePreference::Retro.icon()));
    }
}
