//! Domain types for the member-stats store.

mod member;

pub use member::{LeaderboardEntry, LeaderboardKind, MemberStats};
