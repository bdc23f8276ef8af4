use crate::config::{FilterConfig, VisibilityFilter};
use github_lib::{Repo, Visibility};

/// Decides which repositories survive a [`FilterConfig`]. Topic and language
/// comparisons are case-insensitive, so the configured values are lowercased
/// once up front.
#[derive(Debug)]
pub struct Matcher {
    config: FilterConfig,
}

impl Matcher {
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            config: FilterConfig {
                language: config.language.as_ref().map(|s| s.to_lowercase()),
                topics: lowercase_all(&config.topics),
                exclude_topics: lowercase_all(&config.exclude_topics),
                ..config.clone()
            },
        }
    }

    pub fn matches(&self, repo: &Repo) -> bool {
        let c = &self.config;
        c.archived.admits(repo.archived)
            && c.forks.admits(repo.fork)
            && self.visibility_matches(repo)
            && self.language_matches(repo)
            && c.topics.iter().all(|t| has_topic(repo, t))
            && !c.exclude_topics.iter().any(|t| has_topic(repo, t))
            && (!c.no_topics || repo.topics.is_empty())
    }

    fn visibility_matches(&self, repo: &Repo) -> bool {
        match self.config.visibility {
            VisibilityFilter::Any => true,
            VisibilityFilter::PublicOnly => repo.visibility() == Visibility::Public,
            VisibilityFilter::PrivateOnly => repo.visibility() == Visibility::Private,
        }
    }

    fn language_matches(&self, repo: &Repo) -> bool {
        let Some(wanted) = &self.config.language else {
            return true;
        };
        repo.language
            .as_deref()
            .is_some_and(|lang| lang.to_lowercase() == *wanted)
    }
}

fn lowercase_all(values: &[String]) -> Vec<String> {
    values.iter().map(|s| s.to_lowercase()).collect()
}

// `topic` is already lowercase.
fn has_topic(repo: &Repo, topic: &str) -> bool {
    repo.topics.iter().any(|t| t.to_lowercase() == topic)
}
