use thiserror::Error;

#[derive(Error, Debug)]
pub enum OriginError {
    #[error("Invalid torrent ID or hash: {0}")]
    InvalidIdentifier(String),

    #[error("RED_API_KEY environment variable not set.")]
    MissingApiKey,

    #[error("Tracker must be provided using either --tracker or setting the ORIGIN_TRACKER environment variable.")]
    MissingTracker,

    #[error("Invalid tracker: {0}")]
    InvalidTracker(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Malformed file list entry: {0:?}")]
    MalformedFileList(String),

    #[error("Torrent group has no artists")]
    NoArtists,

    #[error("Not a music torrent")]
    NotMusic,

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OriginError {
    /// Process exit status for this failure. Each user-facing class has its own code.
    pub fn exit_code(&self) -> i32 {
        match self {
            OriginError::InvalidIdentifier(_) => 3,
            OriginError::NotMusic => 4,
            OriginError::Unauthorized(_) => 5,
            OriginError::Request(_) | OriginError::Http(_) => 6,
            OriginError::MalformedResponse(_)
            | OriginError::MalformedFileList(_)
            | OriginError::NoArtists => 7,
            OriginError::MissingApiKey => 8,
            OriginError::MissingTracker | OriginError::InvalidTracker(_) => 9,
            OriginError::Config(_) | OriginError::Io(_) => 1,
        }
    }
}

impl From<serde_json::Error> for OriginError {
    fn from(error: serde_json::Error) -> Self {
        OriginError::MalformedResponse(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OriginError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_failure_class() {
        let errors = [
            OriginError::InvalidIdentifier("x".into()),
            OriginError::NotMusic,
            OriginError::Unauthorized("bad key".into()),
            OriginError::Request("failure".into()),
            OriginError::MalformedResponse("eof".into()),
            OriginError::MissingApiKey,
            OriginError::MissingTracker,
        ];
        let mut codes: Vec<i32> = errors.iter().map(|e| e.exit_code()).collect();
        assert_eq!(codes, vec![3, 4, 5, 6, 7, 8, 9]);
        codes.dedup();
        assert_eq!(codes.len(), 7);
        assert_eq!(OriginError::InvalidTracker("ops".into()).exit_code(), 9);
    }

    #[test]
    fn json_errors_are_malformed_responses() {
        let err: OriginError = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert!(matches!(err, OriginError::MalformedResponse(_)));
        assert_eq!(err.exit_code(), 7);
    }
}
