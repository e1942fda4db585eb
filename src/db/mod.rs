// Storage module
// In-memory record store for posts and trades. Contents are lost on restart.

pub mod repositories;

pub use repositories::{PostRepository, Repositories, TradeRepository};

/// Owner of the process-wide record lists
#[derive(Default)]
pub struct Store {
    repositories: Repositories,
}

impl Store {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out the repositories, consuming the store
    pub fn into_repositories(self) -> Repositories {
        self.repositories
    }
}
