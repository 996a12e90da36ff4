use std::str::FromStr;

use crate::error::CoreError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleSettings {
    pub title: String,
    pub tag: HeadingTag,
}

impl Default for TitleSettings {
    fn default() -> Self {
        Self {
            title: String::new(),
            tag: HeadingTag::H3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingTag {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadingTag::H1 => "h1",
            HeadingTag::H2 => "h2",
            HeadingTag::H3 => "h3",
            HeadingTag::H4 => "h4",
            HeadingTag::H5 => "h5",
            HeadingTag::H6 => "h6",
        }
    }
}

impl FromStr for HeadingTag {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "h1" => Ok(HeadingTag::H1),
            "h2" => Ok(HeadingTag::H2),
            "h3" => Ok(HeadingTag::H3),
            "h4" => Ok(HeadingTag::H4),
            "h5" => Ok(HeadingTag::H5),
            "h6" => Ok(HeadingTag::H6),
            _ => Err(CoreError::InvalidHeadingTag(raw.to_string())),
        }
    }
}
