use thiserror::Error;

/// Everything that can go wrong in the widget. None of it is fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    #[error("At least one character type must be selected")]
    NoCharacterClassSelected,

    #[error("Clipboard write failed: {0}")]
    ClipboardWriteFailed(String),

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, WidgetError>;
