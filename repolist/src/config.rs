use std::fmt;

/// How repositories carrying a boolean property (archived, fork) are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Inclusion {
    #[default]
    Exclude,
    Include,
    Only,
}

impl Inclusion {
    pub fn from_flags(include: bool, only: bool) -> Self {
        if only {
            Self::Only
        } else if include {
            Self::Include
        } else {
            Self::Exclude
        }
    }

    pub fn admits(self, value: bool) -> bool {
        match self {
            Self::Exclude => !value,
            Self::Include => true,
            Self::Only => value,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisibilityFilter {
    #[default]
    Any,
    PublicOnly,
    PrivateOnly,
}

impl VisibilityFilter {
    /// Value for the API's `visibility` query parameter.
    pub fn as_query(self) -> Option<&'static str> {
        match self {
            Self::Any => None,
            Self::PublicOnly => Some("public"),
            Self::PrivateOnly => Some("private"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FilterConfig {
    pub archived: Inclusion,
    pub forks: Inclusion,
    pub visibility: VisibilityFilter,
    pub language: Option<String>,
    pub topics: Vec<String>,
    pub exclude_topics: Vec<String>,
    pub no_topics: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SortKey {
    #[default]
    #[value(name = "full_name")]
    FullName,
    Created,
    Updated,
    Pushed,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SortConfig {
    pub key: SortKey,
    pub reverse: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    #[default]
    Plain,
    JsonLines,
    Array,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OwnerScope {
    Authenticated { affiliation: Option<String> },
    Owner(String),
}

impl fmt::Display for OwnerScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authenticated { .. } => write!(f, "repositories of the authenticated user"),
            Self::Owner(owner) => write!(f, "repositories of {owner}"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub filter: FilterConfig,
    pub sort: SortConfig,
    pub output: OutputMode,
    pub scopes: Vec<OwnerScope>,
}
