//! Persistent user preferences.
//!
//! Stored as TOML at `<config dir>/folio/config.toml`. Loading falls back
//! to defaults when the file is absent, so a fresh install needs no
//! setup. `migrate_config` adds fields introduced by newer versions to an
//! existing file without disturbing user edits or comments.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use toml_edit::{DocumentMut, Item};

use crate::typewriter::Timings;

/// Environment variable overriding the config directory.
///
/// Used by the integration tests to stay out of the real user config.
pub const CONFIG_DIR_ENV: &str = "FOLIO_CONFIG_DIR";

/// Errors from loading, saving, or migrating the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine a configuration directory")]
    NoConfigDir,

    #[error("failed to read or write config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config syntax: {0}")]
    Edit(#[from] toml_edit::TomlError),
}

/// User configuration.
///
/// Unknown themes are tolerated at this layer; the theme module falls
/// back to the default palette when the name does not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Active theme name ("dark" or "light").
    pub theme: String,
    /// Typewriter animation delays.
    pub typewriter: TypewriterConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            typewriter: TypewriterConfig::default(),
        }
    }
}

/// Typewriter delay settings, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    /// Delay after typing a character.
    pub type_delay_ms: u64,
    /// Delay after deleting a character.
    pub delete_delay_ms: u64,
    /// Hold once a phrase is fully typed.
    pub full_pause_ms: u64,
    /// Hold once a phrase is fully deleted.
    pub empty_pause_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_delay_ms: 100,
            delete_delay_ms: 50,
            full_pause_ms: 2000,
            empty_pause_ms: 1000,
        }
    }
}

impl TypewriterConfig {
    /// Convert the millisecond fields into animator timings.
    pub fn timings(&self) -> Timings {
        Timings {
            type_delay: Duration::from_millis(self.type_delay_ms),
            delete_delay: Duration::from_millis(self.delete_delay_ms),
            full_pause: Duration::from_millis(self.full_pause_ms),
            empty_pause: Duration::from_millis(self.empty_pause_ms),
        }
    }
}

impl Config {
    /// Path of the config file.
    ///
    /// Honors [`CONFIG_DIR_ENV`] when set, otherwise uses the platform
    /// config directory.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = match env::var_os(CONFIG_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()
                .ok_or(ConfigError::NoConfigDir)?
                .join("folio"),
        };
        Ok(dir.join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it does not
    /// exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load a config file from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save to the default config path, creating the directory if
    /// needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Result of a config migration.
#[derive(Debug, Clone)]
pub struct MigrateResult {
    /// The migrated file content.
    pub content: String,
    /// Fields that were added, as `section.field` (or a bare top-level
    /// key).
    pub added_fields: Vec<String>,
    /// Sections that did not exist before.
    pub sections_added: Vec<String>,
}

impl MigrateResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Add missing fields to an existing config file.
///
/// Parses `content` as a TOML document and inserts any key the current
/// default config has that the document lacks. Existing values,
/// formatting, and comments are preserved.
pub fn migrate_config(content: &str) -> Result<MigrateResult, ConfigError> {
    let mut doc: DocumentMut = content.parse()?;
    let defaults: DocumentMut = toml::to_string_pretty(&Config::default())?.parse()?;

    let mut added_fields = Vec::new();
    let mut sections_added = Vec::new();

    for (key, item) in defaults.as_table().iter() {
        match item.as_table() {
            Some(section) => {
                let existing = doc.get(key).and_then(Item::as_table);
                if existing.is_none() {
                    sections_added.push(key.to_string());
                }
                for (field, _) in section.iter() {
                    let present = existing.is_some_and(|table| table.contains_key(field));
                    if !present {
                        added_fields.push(format!("{}.{}", key, field));
                    }
                }
                match doc.get_mut(key).and_then(Item::as_table_mut) {
                    Some(table) => {
                        for (field, value) in section.iter() {
                            if !table.contains_key(field) {
                                table.insert(field, value.clone());
                            }
                        }
                    }
                    None => {
                        doc.insert(key, item.clone());
                    }
                }
            }
            None => {
                if doc.get(key).is_none() {
                    added_fields.push(key.to_string());
                    doc.insert(key, item.clone());
                }
            }
        }
    }

    Ok(MigrateResult {
        content: doc.to_string(),
        added_fields,
        sections_added,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_theme_is_dark() {
        let config = Config::default();
        assert_eq!(config.theme, "dark");
    }

    #[test]
    fn default_typewriter_delays_match_the_animator_defaults() {
        let timings = TypewriterConfig::default().timings();
        assert_eq!(timings, Timings::default());
    }

    #[test]
    fn load_from_missing_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sub").join("config.toml");

        let mut config = Config::default();
        config.theme = "light".to_string();
        config.typewriter.type_delay_ms = 5;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let config: Config = toml::from_str("theme = \"light\"\n").unwrap();
        assert_eq!(config.theme, "light");
        assert_eq!(config.typewriter, TypewriterConfig::default());
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = [broken").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn migrate_empty_file_adds_everything() {
        let result = migrate_config("").unwrap();
        assert!(result.has_changes());
        assert!(result.added_fields.contains(&"theme".to_string()));
        assert!(result
            .added_fields
            .contains(&"typewriter.type_delay_ms".to_string()));
        assert_eq!(result.sections_added, vec!["typewriter".to_string()]);

        let migrated: Config = toml::from_str(&result.content).unwrap();
        assert_eq!(migrated, Config::default());
    }

    #[test]
    fn migrate_adds_missing_section_only() {
        let result = migrate_config("theme = \"light\"\n").unwrap();
        assert!(!result.added_fields.contains(&"theme".to_string()));
        assert_eq!(result.sections_added, vec!["typewriter".to_string()]);

        let migrated: Config = toml::from_str(&result.content).unwrap();
        assert_eq!(migrated.theme, "light");
        assert_eq!(migrated.typewriter, TypewriterConfig::default());
    }

    #[test]
    fn migrate_preserves_existing_values_and_comments() {
        let original = "# my settings\ntheme = \"light\"\n\n[typewriter]\ntype_delay_ms = 42\n";
        let result = migrate_config(original).unwrap();

        assert!(result.content.contains("# my settings"));
        assert!(result.content.contains("type_delay_ms = 42"));
        assert!(result
            .added_fields
            .contains(&"typewriter.full_pause_ms".to_string()));
        assert!(result.sections_added.is_empty());

        let migrated: Config = toml::from_str(&result.content).unwrap();
        assert_eq!(migrated.typewriter.type_delay_ms, 42);
        assert_eq!(migrated.typewriter.full_pause_ms, 2000);
    }

    #[test]
    fn migrate_complete_file_reports_no_changes() {
        let complete = toml::to_string_pretty(&Config::default()).unwrap();
        let result = migrate_config(&complete).unwrap();
        assert!(!result.has_changes());
        assert!(result.sections_added.is_empty());
    }
}
