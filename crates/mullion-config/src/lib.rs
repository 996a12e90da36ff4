use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use mullion_core::settings::HeadingTag;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "mullion";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub icon_font: IconFont,
    pub a11y_headings: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconFont {
    FontAwesome,
    LineAwesome,
    Ionicons,
    Streamline,
}

impl IconFont {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconFont::FontAwesome => "font-awesome",
            IconFont::LineAwesome => "line-awesome",
            IconFont::Ionicons => "ionicons",
            IconFont::Streamline => "streamline",
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            icon_font: IconFont::FontAwesome,
            a11y_headings: false,
        }
    }
}

impl AppConfig {
    // Accessible themes demote widget entry titles from h2 to h4.
    pub fn entry_heading(&self) -> HeadingTag {
        if self.a11y_headings {
            HeadingTag::H4
        } else {
            HeadingTag::H2
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    icon_font: Option<IconFont>,
    a11y_headings: Option<bool>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path.clone()) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)))
}

fn merge_config(parsed: ConfigFile) -> AppConfig {
    let mut config = AppConfig::default();

    if let Some(icon_font) = parsed.icon_font {
        config.icon_font = icon_font;
    }

    if let Some(a11y_headings) = parsed.a11y_headings {
        config.a11y_headings = a11y_headings;
    }

    config
}

#[cfg(test)]
mod tests {
    use super::{load_at_path, merge_config, AppConfig, ConfigFile, IconFont};
    use mullion_core::settings::HeadingTag;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            icon_font: Some(IconFont::Streamline),
            a11y_headings: Some(true),
        };
        let merged = merge_config(parsed);
        assert_eq!(merged.icon_font, IconFont::Streamline);
        assert!(merged.a11y_headings);
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("config file not found"));
    }

    #[test]
    fn load_at_path_skips_missing_optional_file() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let config = load_at_path(&missing, false).expect("load");
        assert!(config.is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "icon_font = \"line-awesome\"\na11y_headings = true\n")
            .expect("write config");

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.icon_font, IconFont::LineAwesome);
        assert!(config.a11y_headings);
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "font = \"ionicons\"\n").expect("write config");

        let err = load_at_path(&path, true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("failed to parse"));
    }

    #[test]
    fn entry_heading_follows_a11y_setting() {
        let mut config = AppConfig::default();
        assert_eq!(config.entry_heading(), HeadingTag::H2);
        config.a11y_headings = true;
        assert_eq!(config.entry_heading(), HeadingTag::H4);
    }
}
