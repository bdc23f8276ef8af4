mod owner;
mod repo;

pub use self::owner::Owner;
pub use self::repo::{Repo, Visibility};
