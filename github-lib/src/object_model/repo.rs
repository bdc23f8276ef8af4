use super::owner::Owner;
use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

/// A repository as returned by the GitHub REST API.
///
/// The typed fields cover what listing and filtering need; the complete
/// object is kept alongside them and is what `Serialize` writes back out.
#[derive(Clone, Debug)]
pub struct Repo {
    pub name: String,
    pub full_name: String,
    pub owner: Owner,
    pub private: bool,
    pub archived: bool,
    pub fork: bool,
    pub language: Option<String>,
    pub topics: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub pushed_at: Option<DateTime<Utc>>,
    raw: Value,
}

#[derive(Deserialize)]
struct RepoFields {
    #[serde(rename = "name")]
    name: String,

    #[serde(rename = "full_name")]
    full_name: String,

    #[serde(rename = "owner")]
    owner: Owner,

    #[serde(rename = "private")]
    private: bool,

    #[serde(rename = "archived", default)]
    archived: bool,

    #[serde(rename = "fork", default)]
    fork: bool,

    #[serde(rename = "language", default)]
    language: Option<String>,

    #[serde(rename = "topics", default)]
    topics: Vec<String>,

    #[serde(rename = "created_at")]
    created_at: DateTime<Utc>,

    #[serde(rename = "updated_at")]
    updated_at: DateTime<Utc>,

    #[serde(rename = "pushed_at", default)]
    pushed_at: Option<DateTime<Utc>>,
}

impl Repo {
    pub fn from_value(raw: Value) -> serde_json::Result<Self> {
        let fields = RepoFields::deserialize(&raw)?;
        Ok(Self {
            name: fields.name,
            full_name: fields.full_name,
            owner: fields.owner,
            private: fields.private,
            archived: fields.archived,
            fork: fields.fork,
            language: fields.language,
            topics: fields.topics,
            created_at: fields.created_at,
            updated_at: fields.updated_at,
            pushed_at: fields.pushed_at,
            raw,
        })
    }

    pub fn visibility(&self) -> Visibility {
        if self.private {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

impl<'de> Deserialize<'de> for Repo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Repo::from_value(Value::deserialize(deserializer)?).map_err(D::Error::custom)
    }
}

impl Serialize for Repo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}
