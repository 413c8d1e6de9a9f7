use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("could not read tickets: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed ticket document: {0}")]
    Json(#[from] serde_json::Error),

    /// A date or time field did not match its fixed pattern.
    #[error("field `{field}` has value {value:?}, expected format {pattern}")]
    Format {
        field: &'static str,
        value: String,
        pattern: &'static str,
    },

    #[error("no prices to take a median of")]
    EmptyDataset,
}
