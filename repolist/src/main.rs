mod args;
mod config;
mod filter;
mod render;
mod sort;
#[cfg(test)]
mod test_support;

use crate::args::Args;
use crate::config::{Config, OwnerScope};
use crate::filter::Matcher;
use crate::render::Renderer;
use crate::sort::sort_repos;
use anyhow::{Context, Result};
use clap::Parser;
use futures_util::{future, Stream, TryStreamExt};
use github_lib::{get_github_token, GitHubClient, GitHubClientResult, Repo};
use log::{debug, info};
use std::io::{self, Write};

const USER_AGENT: &str = concat!("repolist/", env!("CARGO_PKG_VERSION"));

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = args.to_config();

    let token = get_github_token()?;
    let github = GitHubClient::new(args.api_url.as_str(), &token)?.with_user_agent(USER_AGENT);

    let mut renderer = Renderer::new(io::stdout().lock(), config.output);
    run(&github, &config, &mut renderer).await
}

/// Lists every owner scope in command-line order. Output for a scope is
/// flushed before the next one is fetched, so a failure part-way through
/// leaves the earlier scopes' output in place.
async fn run<W: Write>(
    github: &GitHubClient,
    config: &Config,
    renderer: &mut Renderer<W>,
) -> Result<()> {
    let matcher = Matcher::new(&config.filter);
    debug!("filter: {matcher:?}");

    for scope in &config.scopes {
        let mut repos = list_scope(github, config, scope, &matcher)
            .await
            .with_context(|| format!("failed to list {scope}"))?;
        info!("{} matching repositories for {scope}", repos.len());

        sort_repos(&mut repos, config.sort);
        for repo in &repos {
            renderer.show(repo)?;
        }
        renderer.flush()?;
    }
    renderer.finish()?;
    Ok(())
}

async fn list_scope(
    github: &GitHubClient,
    config: &Config,
    scope: &OwnerScope,
    matcher: &Matcher,
) -> GitHubClientResult<Vec<Repo>> {
    match scope {
        OwnerScope::Authenticated { affiliation } => {
            let repos = github.list_my_repos(
                config.filter.visibility.as_query(),
                affiliation.as_deref(),
            )?;
            collect_matching(repos, matcher).await
        }
        OwnerScope::Owner(owner) => {
            collect_matching(github.list_repos_for_owner(owner)?, matcher).await
        }
    }
}

async fn collect_matching<S>(repos: S, matcher: &Matcher) -> GitHubClientResult<Vec<Repo>>
where
    S: Stream<Item = GitHubClientResult<Repo>>,
{
    repos
        .try_filter(|repo| future::ready(matcher.matches(repo)))
        .try_collect()
        .await
}
