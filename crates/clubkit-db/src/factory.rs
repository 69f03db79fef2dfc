//! Composition utilities for building the stats store.
//!
//! This module provides factory functions for wiring up the application
//! with the `SQLite` repository. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use clubkit_core::StatsRepository;

use crate::repositories::SqliteStatsRepository;

/// Factory for creating repository instances with `SQLite` backends.
pub struct StatsFactory;

impl StatsFactory {
    /// Build a trait-object stats repository from a pool.
    ///
    /// This is the recommended way for adapters to obtain the repository.
    pub fn stats_repository(pool: SqlitePool) -> Arc<dyn StatsRepository> {
        Arc::new(SqliteStatsRepository::new(pool))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    #[tokio::test]
    async fn factory_builds_working_repository() {
        let pool = setup_test_database().await.unwrap();
        let repo = StatsFactory::stats_repository(pool);

        repo.ensure_member(1).await.unwrap();
        assert!(repo.member_exists(1).await.unwrap());
    }
}
