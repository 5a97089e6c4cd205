use thiserror::Error;

/// Programming-contract violations in a rule set or engine wiring.
///
/// These are fatal for the caller and must be logged, never surfaced to an
/// end user as a data issue. Bad *data* is always represented as an
/// `Issue`, not an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown format id {0:?}")]
    UnknownFormat(String),

    #[error("rule set {format_id:?} references unknown column {column:?}")]
    UnknownColumn { format_id: String, column: String },

    #[error("rule set {format_id:?} declares duplicate output header {header:?}")]
    DuplicateOutputHeader { format_id: String, header: String },

    #[error("rule set {format_id:?} has an invalid weight for category {category:?}")]
    InvalidWeight { format_id: String, category: String },
}
