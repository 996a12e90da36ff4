use crate::markup::inject_class;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomHtmlSettings {
    pub title: String,
    pub content: String,
}

// Themes style text widgets by container class, so the host's opening markup
// gets the text widget class spliced in alongside its own.
pub fn text_widget_container(before_widget: &str) -> String {
    inject_class(before_widget, "widget_text")
}
