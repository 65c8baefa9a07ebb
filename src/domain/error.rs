//! Domain error types.

/// Top-level error type for rankcast.
#[derive(Debug, thiserror::Error)]
pub enum RankcastError {
    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("price series for {ticker} is not strictly ascending by date")]
    SeriesOrder { ticker: String },

    #[error("insufficient data for {ticker}: have {rows} rows, need {minimum}")]
    InsufficientData {
        ticker: String,
        rows: usize,
        minimum: usize,
    },

    #[error("computation failed for {ticker}: {reason}")]
    Computation { ticker: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&RankcastError> for std::process::ExitCode {
    fn from(err: &RankcastError) -> Self {
        let code: u8 = match err {
            RankcastError::Io(_) => 1,
            RankcastError::ConfigParse { .. }
            | RankcastError::ConfigMissing { .. }
            | RankcastError::ConfigInvalid { .. } => 2,
            RankcastError::Data { .. } | RankcastError::SeriesOrder { .. } => 3,
            RankcastError::InsufficientData { .. } | RankcastError::Computation { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
