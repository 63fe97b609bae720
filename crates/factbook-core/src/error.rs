use thiserror::Error;

/// Top-level error type for factbook.
#[derive(Debug, Error)]
pub enum FactError {
    /// No collection is registered for the requested language.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// Index outside `[0, len)` for the language's collection.
    #[error("index {index} out of range for language {language} ({len} facts)")]
    OutOfRange {
        language: String,
        index: i64,
        len: usize,
    },

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
