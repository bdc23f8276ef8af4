use crate::error::GitHubClientError;
use crate::result::GitHubClientResult;
use log::debug;
use std::process::Command;

const TOKEN_VARS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];

/// Finds a GitHub token, trying in order: the `GH_TOKEN`/`GITHUB_TOKEN`
/// environment variables, the same keys in a `.env` file, `gh auth token`
/// and `git config hub.oauthtoken`.
pub fn get_github_token() -> GitHubClientResult<String> {
    if let Some(token) = token_from_env(|k| std::env::var(k).ok()) {
        debug!("using GitHub token from environment");
        return Ok(token);
    }

    if let Some(token) = token_from_dotenv() {
        debug!("using GitHub token from .env file");
        return Ok(token);
    }

    if let Some(token) = command_output("gh", &["auth", "token"]) {
        debug!("using GitHub token from gh");
        return Ok(token);
    }

    if let Some(token) = command_output("git", &["config", "--get", "hub.oauthtoken"]) {
        debug!("using GitHub token from git config hub.oauthtoken");
        return Ok(token);
    }

    Err(GitHubClientError::NoToken)
}

fn token_from_env<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    TOKEN_VARS
        .iter()
        .filter_map(|k| lookup(*k))
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

fn token_from_dotenv() -> Option<String> {
    let vars = dotenvy::dotenv_iter()
        .ok()?
        .filter_map(Result::ok)
        .collect::<Vec<_>>();
    token_from_env(|k| vars.iter().find(|(n, _)| n == k).map(|(_, v)| v.clone()))
}

fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let s = String::from_utf8(output.stdout).ok()?;
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}
