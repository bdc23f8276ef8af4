use crate::config::{SortConfig, SortKey};
use github_lib::Repo;
use std::cmp::Ordering;

/// Stable sort of one owner's repositories. Reversing flips the comparison,
/// so equal keys keep their fetched order in both directions.
pub fn sort_repos(repos: &mut [Repo], config: SortConfig) {
    repos.sort_by(|a, b| {
        let ord = compare(a, b, config.key);
        if config.reverse {
            ord.reverse()
        } else {
            ord
        }
    });
}

fn compare(a: &Repo, b: &Repo, key: SortKey) -> Ordering {
    match key {
        SortKey::FullName => a.full_name.cmp(&b.full_name),
        SortKey::Created => a.created_at.cmp(&b.created_at),
        SortKey::Updated => a.updated_at.cmp(&b.updated_at),
        // never-pushed repositories sort first
        SortKey::Pushed => a.pushed_at.cmp(&b.pushed_at),
    }
}
