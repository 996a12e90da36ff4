use std::str::FromStr;

use crate::error::CoreError;
use crate::markup::join_classes;
use crate::sanitize::{sanitize_hex_color, sanitize_html_class, sanitize_text_field};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconSettings {
    pub title: String,
    pub content: String,
    pub icon: String,
    pub size: IconSize,
    pub align: TextAlign,
    pub color: String,
}

impl Default for IconSettings {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            icon: r"\f000".to_string(),
            size: IconSize::X2,
            align: TextAlign::Left,
            color: "#333333".to_string(),
        }
    }
}

impl IconSettings {
    pub fn sanitized(mut self) -> Self {
        self.title = sanitize_text_field(&self.title);
        self.icon = sanitize_html_class(&self.icon);
        self.color = sanitize_hex_color(&self.color).unwrap_or_default();
        self
    }

    pub fn icon_classes(&self) -> String {
        let size_class = format!("fa-{}", self.size.as_str());
        join_classes(&["fa", &self.icon, &size_class])
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconSize {
    #[serde(rename = "lg")]
    Lg,
    #[default]
    #[serde(rename = "2x")]
    X2,
    #[serde(rename = "3x")]
    X3,
    #[serde(rename = "4x")]
    X4,
    #[serde(rename = "5x")]
    X5,
}

impl IconSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconSize::Lg => "lg",
            IconSize::X2 => "2x",
            IconSize::X3 => "3x",
            IconSize::X4 => "4x",
            IconSize::X5 => "5x",
        }
    }
}

impl FromStr for IconSize {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "lg" => Ok(IconSize::Lg),
            "2x" => Ok(IconSize::X2),
            "3x" => Ok(IconSize::X3),
            "4x" => Ok(IconSize::X4),
            "5x" => Ok(IconSize::X5),
            _ => Err(CoreError::InvalidIconSize(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

impl FromStr for TextAlign {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "left" => Ok(TextAlign::Left),
            "center" => Ok(TextAlign::Center),
            "right" => Ok(TextAlign::Right),
            _ => Err(CoreError::InvalidTextAlign(raw.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{IconSettings, IconSize, TextAlign};

    #[test]
    fn defaults_match_the_classic_widget() {
        let settings = IconSettings::default();
        assert_eq!(settings.icon, r"\f000");
        assert_eq!(settings.size, IconSize::X2);
        assert_eq!(settings.align, TextAlign::Left);
        assert_eq!(settings.color, "#333333");
    }

    #[test]
    fn sanitized_cleans_icon_color_and_title() {
        let settings = IconSettings {
            title: " Spaced  <i>title</i> ".to_string(),
            icon: "fa camera!".to_string(),
            color: "not-a-color".to_string(),
            ..IconSettings::default()
        };
        let clean = settings.sanitized();
        assert_eq!(clean.title, "Spaced title");
        assert_eq!(clean.icon, "facamera");
        assert_eq!(clean.color, "");
    }

    #[test]
    fn icon_classes_compose() {
        let settings = IconSettings {
            icon: "fa-camera".to_string(),
            size: IconSize::X3,
            ..IconSettings::default()
        };
        assert_eq!(settings.icon_classes(), "fa fa-camera fa-3x");
    }

    #[test]
    fn size_and_align_parse_from_stored_values() {
        assert_eq!("2x".parse::<IconSize>().unwrap(), IconSize::X2);
        assert_eq!("lg".parse::<IconSize>().unwrap(), IconSize::Lg);
        assert_eq!("right".parse::<TextAlign>().unwrap(), TextAlign::Right);
        assert!("huge".parse::<IconSize>().is_err());
        assert!("justify".parse::<TextAlign>().is_err());
    }

    #[test]
    fn partial_record_merges_with_defaults() {
        let settings: IconSettings = serde_json::from_str(r#"{"size": "5x"}"#).expect("parse");
        assert_eq!(settings.size, IconSize::X5);
        assert_eq!(settings.color, "#333333");
        assert_eq!(settings.align, TextAlign::Left);
    }
}
