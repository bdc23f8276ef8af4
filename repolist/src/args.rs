use crate::config::{
    Config, FilterConfig, Inclusion, OutputMode, OwnerScope, SortConfig, SortKey,
    VisibilityFilter,
};
use clap::Parser;
use github_lib::DEFAULT_API_URL;

const AFFILIATIONS: [&str; 3] = ["owner", "collaborator", "organization_member"];

/// List & filter GitHub repositories
///
/// With no OWNER arguments, lists the repositories of the authenticated
/// user. Otherwise lists the public repositories of each given user or
/// organization in turn.
#[derive(Debug, Parser)]
#[command(name = "repolist", version)]
pub struct Args {
    #[arg(value_name = "OWNER")]
    pub owners: Vec<String>,

    /// Only show repositories with the given affiliations: a comma-separated
    /// list of "owner", "collaborator", and/or "organization_member" (only
    /// for the authenticated user)
    #[arg(
        long,
        value_name = "AFFILIATION",
        value_parser = parse_affiliation,
        conflicts_with = "owners"
    )]
    pub affiliation: Option<String>,

    /// Include archived repositories
    #[arg(short = 'A', long)]
    pub archived: bool,

    /// Only list archived repositories
    #[arg(long)]
    pub archived_only: bool,

    /// Output an array of JSON objects
    #[arg(long, conflicts_with = "json")]
    pub array: bool,

    /// Include forks
    #[arg(short = 'F', long)]
    pub forks: bool,

    /// Only list forks
    #[arg(long)]
    pub forks_only: bool,

    /// Output a JSON object for each repository
    #[arg(short = 'J', long)]
    pub json: bool,

    /// Only show repositories for the given programming language
    #[arg(short = 'L', long, value_name = "NAME")]
    pub language: Option<String>,

    /// Only show private repositories (only for the authenticated user)
    #[arg(long, conflicts_with_all = ["public_only", "owners"])]
    pub private_only: bool,

    /// Only show public repositories (only for the authenticated user)
    #[arg(long, conflicts_with = "owners")]
    pub public_only: bool,

    /// Reverse the sort order
    #[arg(short = 'R', long)]
    pub reverse: bool,

    /// Sort repositories by the given key
    #[arg(short = 'S', long, value_enum, default_value = "full_name")]
    pub sort_by: SortKey,

    /// Only show repositories with the given topic (repeatable)
    #[arg(short = 't', long, value_name = "TOPIC")]
    pub topic: Vec<String>,

    /// Exclude repositories with the given topic (repeatable)
    #[arg(short = 'T', long, value_name = "TOPIC")]
    pub exclude_topic: Vec<String>,

    /// Only show repositories without any topics
    #[arg(long, conflicts_with_all = ["topic", "exclude_topic"])]
    pub no_topics: bool,

    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL, hide = true)]
    pub api_url: String,
}

impl Args {
    pub fn to_config(&self) -> Config {
        let visibility = if self.private_only {
            VisibilityFilter::PrivateOnly
        } else if self.public_only {
            VisibilityFilter::PublicOnly
        } else {
            VisibilityFilter::Any
        };

        let output = if self.array {
            OutputMode::Array
        } else if self.json {
            OutputMode::JsonLines
        } else {
            OutputMode::Plain
        };

        let scopes = if self.owners.is_empty() {
            vec![OwnerScope::Authenticated {
                affiliation: self.affiliation.clone(),
            }]
        } else {
            self.owners.iter().cloned().map(OwnerScope::Owner).collect()
        };

        Config {
            filter: FilterConfig {
                archived: Inclusion::from_flags(self.archived, self.archived_only),
                forks: Inclusion::from_flags(self.forks, self.forks_only),
                visibility,
                language: self.language.clone(),
                topics: self.topic.clone(),
                exclude_topics: self.exclude_topic.clone(),
                no_topics: self.no_topics,
            },
            sort: SortConfig {
                key: self.sort_by,
                reverse: self.reverse,
            },
            output,
            scopes,
        }
    }
}

fn parse_affiliation(s: &str) -> Result<String, String> {
    if s.split(',').all(|a| AFFILIATIONS.contains(&a)) {
        Ok(s.to_string())
    } else {
        Err(String::from(
            "value must be a comma-separated list of \"owner\", \"collaborator\", and/or \"organization_member\"",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("repolist").chain(args.iter().copied()))
    }

    fn config(args: &[&str]) -> Config {
        parse(args).unwrap().to_config()
    }

    #[test]
    fn defaults() {
        let defaults = config(&[]);
        assert_eq!(defaults.filter.archived, Inclusion::Exclude);
        assert_eq!(defaults.filter.forks, Inclusion::Exclude);
        assert_eq!(defaults.filter.visibility, VisibilityFilter::Any);
        assert_eq!(defaults.sort.key, SortKey::FullName);
        assert!(!defaults.sort.reverse);
        assert_eq!(defaults.output, OutputMode::Plain);
        assert_eq!(
            defaults.scopes,
            vec![OwnerScope::Authenticated { affiliation: None }]
        );
    }

    #[test]
    fn owners_in_command_line_order() {
        assert_eq!(
            config(&["zeta", "alpha"]).scopes,
            vec![
                OwnerScope::Owner(String::from("zeta")),
                OwnerScope::Owner(String::from("alpha"))
            ]
        );
    }

    #[test]
    fn archived_only_wins() {
        assert_eq!(
            config(&["-A", "--archived-only"]).filter.archived,
            Inclusion::Only
        );
        assert_eq!(config(&["--forks-only", "-F"]).filter.forks, Inclusion::Only);
        assert_eq!(config(&["--forks"]).filter.forks, Inclusion::Include);
    }

    #[test]
    fn sort_options() {
        let sort = config(&["--sort-by", "created", "-R"]).sort;
        assert_eq!(sort.key, SortKey::Created);
        assert!(sort.reverse);
        assert_eq!(config(&["-S", "full_name"]).sort.key, SortKey::FullName);
        assert!(parse(&["-S", "stars"]).is_err());
    }

    #[test]
    fn topics_accumulate() {
        let filter = config(&["-t", "cli", "--topic", "api", "-T", "legacy"]).filter;
        assert_eq!(filter.topics, vec!["cli", "api"]);
        assert_eq!(filter.exclude_topics, vec!["legacy"]);
    }

    #[test]
    fn output_modes() {
        assert_eq!(config(&["-J"]).output, OutputMode::JsonLines);
        assert_eq!(config(&["--array"]).output, OutputMode::Array);
        let err = parse(&["--array", "--json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn visibility_only_for_authenticated_user() {
        assert_eq!(
            config(&["--private-only"]).filter.visibility,
            VisibilityFilter::PrivateOnly
        );
        assert_eq!(
            config(&["--public-only"]).filter.visibility,
            VisibilityFilter::PublicOnly
        );
        for flag in ["--private-only", "--public-only"] {
            let err = parse(&[flag, "octocat"]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
        }
        let err = parse(&["--private-only", "--public-only"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn affiliation() {
        assert_eq!(
            config(&["--affiliation", "owner,organization_member"]).scopes,
            vec![OwnerScope::Authenticated {
                affiliation: Some(String::from("owner,organization_member"))
            }]
        );
        assert_eq!(
            parse(&["--affiliation", "owner,friend"]).unwrap_err().kind(),
            ErrorKind::ValueValidation
        );
        assert_eq!(
            parse(&["--affiliation", "owner", "octocat"])
                .unwrap_err()
                .kind(),
            ErrorKind::ArgumentConflict
        );
    }

    #[test]
    fn no_topics_conflicts_with_topic_filters() {
        assert!(config(&["--no-topics"]).filter.no_topics);
        assert!(parse(&["--no-topics", "-t", "cli"]).is_err());
        assert!(parse(&["--no-topics", "-T", "cli"]).is_err());
    }
}
