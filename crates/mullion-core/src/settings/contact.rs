use crate::phone::{normalize_telephone_display, tel_uri};
use crate::sanitize::strip_tags;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSettings {
    pub title: String,
    pub telephone: String,
    pub fax: String,
    pub email: String,
    pub address: String,
    pub skype: String,
    pub text: String,
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            title: "Contact".to_string(),
            telephone: String::new(),
            fax: String::new(),
            email: String::new(),
            address: String::new(),
            skype: String::new(),
            text: String::new(),
        }
    }
}

impl ContactSettings {
    pub fn sanitized(mut self) -> Self {
        self.title = strip_tags(&self.title);
        self.telephone = strip_tags(&self.telephone);
        self
    }

    pub fn telephone_display(&self) -> Option<String> {
        normalize_telephone_display(&self.telephone)
    }

    pub fn telephone_href(&self) -> Option<String> {
        tel_uri(&self.telephone)
    }
}
