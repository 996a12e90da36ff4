use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialSettings {
    pub title: String,
    pub facebook: String,
    pub twitter: String,
    pub instagram: String,
    pub email: String,
}

impl SocialSettings {
    pub fn sanitized(mut self) -> Self {
        self.facebook = self.facebook.trim().to_string();
        self.twitter = self.twitter.trim().to_string();
        self.instagram = self.instagram.trim().to_string();
        self.email = self.email.trim().to_ascii_lowercase();
        self
    }

    // Render order of the icon list.
    pub fn links(&self) -> [(&'static str, &str); 4] {
        [
            ("facebook", self.facebook.as_str()),
            ("twitter", self.twitter.as_str()),
            ("instagram", self.instagram.as_str()),
            ("email", self.email.as_str()),
        ]
    }
}

// List item class for a slot, the slot name reversed behind a "swi-" prefix.
pub fn slot_class(slot: &str) -> String {
    let reversed: String = slot.chars().rev().collect();
    format!("swi-{}", reversed)
}
