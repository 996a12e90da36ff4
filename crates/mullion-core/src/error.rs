use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid heading tag: {0}")]
    InvalidHeadingTag(String),
    #[error("invalid icon size: {0}")]
    InvalidIconSize(String),
    #[error("invalid text alignment: {0}")]
    InvalidTextAlign(String),
    #[error("invalid content mode: {0}")]
    InvalidContentMode(String),
}
