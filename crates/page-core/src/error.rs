use thiserror::Error;

/// Failures surfaced while binding the page; nothing fails once wired.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PageError {
    #[error("missing element #{id}")]
    MissingElement { id: String },
    #[error("element #{id} is not an HTML element")]
    NotHtmlElement { id: String },
    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },
}
