use thiserror::Error;

/// Fatal failures of a playlist load. Any of these aborts the whole load;
/// tracks gathered from earlier pages are discarded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("playlist id is empty")]
    EmptyPlaylistId,

    /// Network failure, or a response with a non-success status.
    #[error("playlist request failed{}: {message}", status_suffix(.status))]
    Transport {
        status: Option<u16>,
        message: String,
    },

    #[error("playlist response body is empty")]
    EmptyResponse,

    #[error("playlist response is not JSON (content-type: {0})")]
    InvalidContentType(String),

    #[error("malformed playlist response: {0}")]
    MalformedResponse(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" ({s})")).unwrap_or_default()
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        LoadError::Transport {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::MalformedResponse(err.to_string())
    }
}
