pub mod error;
pub mod layout;
pub mod markup;
pub mod phone;
pub mod sanitize;
pub mod settings;

pub use error::CoreError;
pub use layout::{column_classes, column_count, entry_classes};
pub use markup::{inject_class, join_classes};
pub use phone::{normalize_telephone, normalize_telephone_display, tel_uri};
pub use sanitize::{
    clamp_post_count, sanitize_hex_color, sanitize_html_class, sanitize_text_field, strip_tags,
};
pub use settings::*;
