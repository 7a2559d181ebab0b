use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    // Engine failures keep a bare message: the text lands in a table cell
    // that already sits under the engine's own column.
    #[error("{message}")]
    EngineError { engine: &'static str, message: String },

    #[error("malformed response: {message}")]
    MalformedResponse { engine: &'static str, message: String },

    #[error("Render error: {message}")]
    RenderError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ScoreError>;
