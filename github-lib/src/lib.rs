mod error;
mod github_client;
mod link_urls;
mod logging_middleware;
mod object_model;
mod result;
mod token;

pub use self::error::GitHubClientError;
pub use self::github_client::{GitHubClient, DEFAULT_API_URL};
pub use self::logging_middleware::LoggingMiddleware;
pub use self::object_model::{Owner, Repo, Visibility};
pub use self::result::GitHubClientResult;
pub use self::token::get_github_token;
