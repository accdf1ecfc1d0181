/// Failures of a single upstream fetch.
///
/// Clone so one failure can be stored in orchestrator state and still be
/// returned to the caller.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("API Error: {status} {status_text}")]
    Http { status: u16, status_text: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unexpected response shape: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Decode(err.to_string())
        } else {
            Error::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message() {
        let err = Error::Http {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "API Error: 404 Not Found");
    }
}
