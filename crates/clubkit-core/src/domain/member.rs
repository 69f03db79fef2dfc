//! Member activity records.
//!
//! These mirror the `users` table the bot maintains: one row per Discord
//! member with cumulative message, voice, and currency counters.

use serde::{Deserialize, Serialize};

/// Cumulative activity counters for a single guild member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberStats {
    /// Discord user ID (snowflake).
    pub user_id: i64,
    /// Total messages counted.
    pub messages: i64,
    /// Total minutes spent in voice channels.
    pub voice_minutes: i64,
    /// Virtual currency balance.
    pub balance: i64,
}

impl MemberStats {
    /// A fresh record with all counters at zero.
    #[must_use]
    pub const fn new(user_id: i64) -> Self {
        Self {
            user_id,
            messages: 0,
            voice_minutes: 0,
            balance: 0,
        }
    }
}

/// Which counter a leaderboard is ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaderboardKind {
    /// Ranked by voice minutes.
    Voice,
    /// Ranked by message count.
    Messages,
    /// Ranked by currency balance.
    Balance,
}

impl LeaderboardKind {
    /// Human-readable label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Voice => "voice minutes",
            Self::Messages => "messages",
            Self::Balance => "balance",
        }
    }
}

/// One row of a leaderboard query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Discord user ID.
    pub user_id: i64,
    /// Value of the ranked counter.
    pub value: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_member_starts_at_zero() {
        let stats = MemberStats::new(42);
        assert_eq!(stats.user_id, 42);
        assert_eq!(stats.messages, 0);
        assert_eq!(stats.voice_minutes, 0);
        assert_eq!(stats.balance, 0);
    }

    #[test]
    fn leaderboard_labels() {
        assert_eq!(LeaderboardKind::Voice.label(), "voice minutes");
        assert_eq!(LeaderboardKind::Balance.label(), "balance");
    }
}
