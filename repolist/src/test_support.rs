use github_lib::Repo;
use serde_json::{json, Value};

/// Builds API-shaped repository objects for tests.
pub struct RepoBuilder {
    value: Value,
}

impl RepoBuilder {
    pub fn new(full_name: &str) -> Self {
        let (owner, name) = full_name.split_once('/').unwrap();
        Self {
            value: json!({
                "name": name,
                "full_name": full_name,
                "owner": { "login": owner },
                "private": false,
                "archived": false,
                "fork": false,
                "language": null,
                "topics": [],
                "created_at": "2020-01-01T00:00:00Z",
                "updated_at": "2020-01-01T00:00:00Z",
                "pushed_at": "2020-01-01T00:00:00Z"
            }),
        }
    }

    fn set(mut self, key: &str, value: Value) -> Self {
        self.value[key] = value;
        self
    }

    pub fn archived(self) -> Self {
        self.set("archived", Value::Bool(true))
    }

    pub fn fork(self) -> Self {
        self.set("fork", Value::Bool(true))
    }

    pub fn private(self) -> Self {
        self.set("private", Value::Bool(true))
    }

    pub fn language(self, language: &str) -> Self {
        self.set("language", json!(language))
    }

    pub fn topics(self, topics: &[&str]) -> Self {
        self.set("topics", json!(topics))
    }

    pub fn created(self, at: &str) -> Self {
        self.set("created_at", json!(at))
    }

    pub fn updated(self, at: &str) -> Self {
        self.set("updated_at", json!(at))
    }

    pub fn pushed(self, at: Option<&str>) -> Self {
        self.set("pushed_at", json!(at))
    }

    pub fn build(self) -> Repo {
        Repo::from_value(self.value).unwrap()
    }
}
