use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("HTTP {status} from {url}")]
    Http { status: u16, url: String },
    #[error("Malformed response: {0}")]
    Data(String),
    #[error("Unexpected: {0}")]
    Unexpected(String),
}

impl FetchError {
    pub fn category(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "transport",
            FetchError::Http { .. } => "http",
            FetchError::Data(_) => "data",
            FetchError::Unexpected(_) => "unexpected",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            FetchError::Http {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else if err.is_decode() {
            FetchError::Data(err.to_string())
        } else if err.is_builder() {
            FetchError::Unexpected(err.to_string())
        } else {
            FetchError::Transport(err)
        }
    }
}
