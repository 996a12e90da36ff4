pub mod contact;
pub mod custom_html;
pub mod featured;
pub mod icon;
pub mod social;
pub mod title;

pub use contact::ContactSettings;
pub use custom_html::{text_widget_container, CustomHtmlSettings};
pub use featured::{ContentMode, FeaturedSettings};
pub use icon::{IconSettings, IconSize, TextAlign};
pub use social::{slot_class, SocialSettings};
pub use title::{HeadingTag, TitleSettings};
