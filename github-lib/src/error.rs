use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitHubClientError {
    #[error("no GitHub token found: set GH_TOKEN or GITHUB_TOKEN, add one to .env, or log in with `gh auth login`")]
    NoToken,

    #[error("authentication failed: the GitHub token is missing or invalid")]
    Unauthorized,

    #[error("{}", rate_limit_message(.reset))]
    RateLimited { reset: Option<i64> },

    #[error("invalid owner name: {0:?}")]
    InvalidOwner(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("GitHub API returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error(transparent)]
    Transport(#[from] reqwest_middleware::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<reqwest::Error> for GitHubClientError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(reqwest_middleware::Error::Reqwest(e))
    }
}

fn rate_limit_message(reset: &Option<i64>) -> String {
    match reset.and_then(|t| chrono::DateTime::from_timestamp(t, 0)) {
        Some(at) => format!("GitHub API rate limit exceeded; resets at {}", at.to_rfc3339()),
        None => String::from("GitHub API rate limit exceeded"),
    }
}
