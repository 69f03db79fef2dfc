//! `SQLite` implementation of the `StatsRepository` trait.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use clubkit_core::{LeaderboardEntry, LeaderboardKind, MemberStats, RepositoryError, StatsRepository};

/// Column holding the ranked counter for a leaderboard kind.
const fn counter_column(kind: LeaderboardKind) -> &'static str {
    match kind {
        LeaderboardKind::Voice => "voice_time",
        LeaderboardKind::Messages => "messages",
        LeaderboardKind::Balance => "money",
    }
}

/// `SQLite` implementation of the `StatsRepository` trait.
///
/// This struct holds a connection pool and implements all counter
/// operations the toolkit needs against the bot's `users` table.
pub struct SqliteStatsRepository {
    pool: SqlitePool,
}

impl SqliteStatsRepository {
    /// Create a new `SQLite` stats repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Add to one counter column for a member.
    async fn add_counter(
        &self,
        column: &'static str,
        user_id: i64,
        amount: i64,
    ) -> Result<(), RepositoryError> {
        let query = format!("UPDATE users SET {column} = {column} + ? WHERE user_id = ?");
        let result = sqlx::query(&query)
            .bind(amount)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Member {user_id}")));
        }

        Ok(())
    }
}

#[async_trait]
impl StatsRepository for SqliteStatsRepository {
    async fn member_exists(&self, user_id: i64) -> Result<bool, RepositoryError> {
        let row = sqlx::query("SELECT id FROM users WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(row.is_some())
    }

    async fn ensure_member(&self, user_id: i64) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO users (user_id, messages, voice_time, money) VALUES (?, 0, 0, 0) \
             ON CONFLICT(user_id) DO NOTHING",
        )
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(())
    }

    async fn get_stats(&self, user_id: i64) -> Result<MemberStats, RepositoryError> {
        let row = sqlx::query(
            "SELECT user_id, messages, voice_time, money FROM users WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?
        .ok_or_else(|| RepositoryError::NotFound(format!("Member {user_id}")))?;

        Ok(MemberStats {
            user_id: row.get("user_id"),
            messages: row.get("messages"),
            voice_minutes: row.get("voice_time"),
            balance: row.get("money"),
        })
    }

    async fn add_messages(&self, user_id: i64, count: i64) -> Result<(), RepositoryError> {
        self.add_counter("messages", user_id, count).await
    }

    async fn add_voice_minutes(&self, user_id: i64, minutes: i64) -> Result<(), RepositoryError> {
        self.add_counter("voice_time", user_id, minutes).await
    }

    async fn balance(&self, user_id: i64) -> Result<i64, RepositoryError> {
        let row = sqlx::query("SELECT money FROM users WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        // Unknown members read as zero, matching the bot's behavior
        Ok(row.map_or(0, |r| r.get("money")))
    }

    async fn credit(&self, user_id: i64, amount: i64) -> Result<(), RepositoryError> {
        self.add_counter("money", user_id, amount).await
    }

    async fn debit(&self, user_id: i64, amount: i64) -> Result<(), RepositoryError> {
        // Conditional update so the balance can never go negative, even
        // with the bot writing concurrently.
        let result = sqlx::query(
            "UPDATE users SET money = money - ? WHERE user_id = ? AND money >= ?",
        )
        .bind(amount)
        .bind(user_id)
        .bind(amount)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            if !self.member_exists(user_id).await? {
                return Err(RepositoryError::NotFound(format!("Member {user_id}")));
            }
            let balance = self.balance(user_id).await?;
            return Err(RepositoryError::InsufficientFunds {
                user_id,
                balance,
                required: amount,
            });
        }

        Ok(())
    }

    async fn leaderboard(
        &self,
        kind: LeaderboardKind,
        limit: u32,
    ) -> Result<Vec<LeaderboardEntry>, RepositoryError> {
        let column = counter_column(kind);
        let query =
            format!("SELECT user_id, {column} AS value FROM users ORDER BY {column} DESC LIMIT ?");

        let rows = sqlx::query(&query)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(rows
            .iter()
            .map(|row| LeaderboardEntry {
                user_id: row.get("user_id"),
                value: row.get("value"),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    async fn repo() -> SqliteStatsRepository {
        let pool = setup_test_database().await.unwrap();
        SqliteStatsRepository::new(pool)
    }

    #[tokio::test]
    async fn ensure_member_is_idempotent() {
        let repo = repo().await;

        assert!(!repo.member_exists(1).await.unwrap());
        repo.ensure_member(1).await.unwrap();
        repo.ensure_member(1).await.unwrap();
        assert!(repo.member_exists(1).await.unwrap());

        let stats = repo.get_stats(1).await.unwrap();
        assert_eq!(stats, MemberStats::new(1));
    }

    #[tokio::test]
    async fn counters_accumulate() {
        let repo = repo().await;
        repo.ensure_member(7).await.unwrap();

        repo.add_messages(7, 3).await.unwrap();
        repo.add_messages(7, 1).await.unwrap();
        repo.add_voice_minutes(7, 30).await.unwrap();
        repo.credit(7, 100).await.unwrap();

        let stats = repo.get_stats(7).await.unwrap();
        assert_eq!(stats.messages, 4);
        assert_eq!(stats.voice_minutes, 30);
        assert_eq!(stats.balance, 100);
    }

    #[tokio::test]
    async fn counter_update_for_unknown_member_is_not_found() {
        let repo = repo().await;
        assert!(matches!(
            repo.add_messages(99, 1).await,
            Err(RepositoryError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn debit_never_goes_negative() {
        let repo = repo().await;
        repo.ensure_member(5).await.unwrap();
        repo.credit(5, 50).await.unwrap();

        let err = repo.debit(5, 80).await.unwrap_err();
        assert!(matches!(
            err,
            RepositoryError::InsufficientFunds {
                balance: 50,
                required: 80,
                ..
            }
        ));

        repo.debit(5, 50).await.unwrap();
        assert_eq!(repo.balance(5).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn balance_for_unknown_member_is_zero() {
        let repo = repo().await;
        assert_eq!(repo.balance(1234).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn leaderboard_orders_and_limits() {
        let repo = repo().await;
        for (user, minutes) in [(1, 10), (2, 50), (3, 30), (4, 40)] {
            repo.ensure_member(user).await.unwrap();
            repo.add_voice_minutes(user, minutes).await.unwrap();
        }

        let top = repo
            .leaderboard(LeaderboardKind::Voice, 3)
            .await
            .unwrap();

        assert_eq!(top.len(), 3);
        assert_eq!(top[0], LeaderboardEntry { user_id: 2, value: 50 });
        assert_eq!(top[1], LeaderboardEntry { user_id: 4, value: 40 });
        assert_eq!(top[2], LeaderboardEntry { user_id: 3, value: 30 });
    }
}
