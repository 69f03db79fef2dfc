//! Repository trait for the member-stats store.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{LeaderboardEntry, LeaderboardKind, MemberStats};

/// Default number of rows returned by a leaderboard query.
pub const DEFAULT_LEADERBOARD_LIMIT: u32 = 5;

/// Access to the bot's `users` table.
///
/// All counter mutations are cumulative adds; absolute writes are not part
/// of the interface so concurrent bot and toolkit access cannot clobber
/// each other's updates.
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Check whether a member row exists.
    async fn member_exists(&self, user_id: i64) -> Result<bool, RepositoryError>;

    /// Insert a member row with zeroed counters if one does not exist.
    async fn ensure_member(&self, user_id: i64) -> Result<(), RepositoryError>;

    /// Fetch a member's counters.
    ///
    /// Returns `Err(RepositoryError::NotFound)` for unknown members.
    async fn get_stats(&self, user_id: i64) -> Result<MemberStats, RepositoryError>;

    /// Add to a member's message counter.
    async fn add_messages(&self, user_id: i64, count: i64) -> Result<(), RepositoryError>;

    /// Add to a member's voice-minutes counter.
    async fn add_voice_minutes(&self, user_id: i64, minutes: i64) -> Result<(), RepositoryError>;

    /// Fetch a member's balance (0 for unknown members, as the bot does).
    async fn balance(&self, user_id: i64) -> Result<i64, RepositoryError>;

    /// Add currency to a member's balance.
    async fn credit(&self, user_id: i64, amount: i64) -> Result<(), RepositoryError>;

    /// Remove currency from a member's balance.
    ///
    /// Fails with `RepositoryError::InsufficientFunds` rather than driving
    /// the balance negative.
    async fn debit(&self, user_id: i64, amount: i64) -> Result<(), RepositoryError>;

    /// Top members ranked by the given counter, highest first.
    async fn leaderboard(
        &self,
        kind: LeaderboardKind,
        limit: u32,
    ) -> Result<Vec<LeaderboardEntry>, RepositoryError>;
}
