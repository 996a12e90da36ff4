use std::str::FromStr;

use crate::error::CoreError;
use crate::layout;
use crate::sanitize::{clamp_post_count, strip_tags};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturedSettings {
    pub title: String,
    pub posts_num: Option<u32>,
    pub posts_offset: u32,
    pub orderby: String,
    pub order: String,
    pub exclude_displayed: bool,
    pub exclude_sticky: bool,
    pub show_image: bool,
    pub image_alignment: String,
    pub image_size: String,
    pub show_title: bool,
    pub post_info: String,
    pub show_content: ContentMode,
    pub content_limit: Option<u32>,
    pub more_text: String,
    pub extra_num: Option<u32>,
    pub extra_title: String,
    pub class: String,
    pub taxonomy: String,
    pub term: String,
}

impl Default for FeaturedSettings {
    fn default() -> Self {
        Self {
            title: String::new(),
            posts_num: None,
            posts_offset: 0,
            orderby: String::new(),
            order: String::new(),
            exclude_displayed: false,
            exclude_sticky: false,
            show_image: false,
            image_alignment: String::new(),
            image_size: String::new(),
            show_title: false,
            post_info: String::new(),
            show_content: ContentMode::Excerpt,
            content_limit: None,
            more_text: "[Read More...]".to_string(),
            extra_num: None,
            extra_title: String::new(),
            class: String::new(),
            taxonomy: String::new(),
            term: String::new(),
        }
    }
}

impl FeaturedSettings {
    pub fn sanitized(mut self) -> Self {
        self.posts_num = Some(clamp_post_count(self.posts_num));
        self.title = strip_tags(&self.title);
        self.more_text = strip_tags(&self.more_text);
        self
    }

    // Class attribute for the entry at a loop position.
    pub fn entry_classes(&self, base: &str, index: usize) -> String {
        layout::entry_classes(base, &self.class, index)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentMode {
    #[default]
    #[serde(rename = "excerpt")]
    Excerpt,
    #[serde(rename = "content-limit")]
    ContentLimit,
    #[serde(rename = "content")]
    Full,
    #[serde(rename = "")]
    Hidden,
}

impl ContentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentMode::Excerpt => "excerpt",
            ContentMode::ContentLimit => "content-limit",
            ContentMode::Full => "content",
            ContentMode::Hidden => "",
        }
    }
}

impl FromStr for ContentMode {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "excerpt" => Ok(ContentMode::Excerpt),
            "content-limit" => Ok(ContentMode::ContentLimit),
            "content" => Ok(ContentMode::Full),
            "" => Ok(ContentMode::Hidden),
            _ => Err(CoreError::InvalidContentMode(raw.to_string())),
        }
    }
}
