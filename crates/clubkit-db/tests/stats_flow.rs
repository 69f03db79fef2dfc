//! Integration tests for the stats store against a real database file.
//!
//! In-module unit tests cover each repository method in isolation; this
//! suite runs the flows the CLI performs, from `setup_database` through
//! the trait object the factory hands out.

use clubkit_core::{LeaderboardKind, RepositoryError};
use clubkit_db::{StatsFactory, setup_database};
use tempfile::tempdir;

#[tokio::test]
async fn setup_creates_file_and_parent_dirs() {
    let temp = tempdir().unwrap();
    let db_path = temp.path().join("data").join("club.db");

    setup_database(&db_path).await.unwrap();
    assert!(db_path.exists());
}

#[tokio::test]
async fn setup_is_idempotent_over_existing_data() {
    let temp = tempdir().unwrap();
    let db_path = temp.path().join("club.db");

    let pool = setup_database(&db_path).await.unwrap();
    let repo = StatsFactory::stats_repository(pool);
    repo.ensure_member(100).await.unwrap();
    repo.credit(100, 50).await.unwrap();

    // A second setup run must not touch existing rows
    let pool = setup_database(&db_path).await.unwrap();
    let repo = StatsFactory::stats_repository(pool);
    assert_eq!(repo.balance(100).await.unwrap(), 50);
}

#[tokio::test]
async fn economy_flow_keeps_balances_consistent() {
    let temp = tempdir().unwrap();
    let pool = setup_database(&temp.path().join("club.db")).await.unwrap();
    let repo = StatsFactory::stats_repository(pool);

    repo.ensure_member(1).await.unwrap();
    repo.ensure_member(2).await.unwrap();

    repo.credit(1, 100).await.unwrap();
    repo.debit(1, 30).await.unwrap();
    repo.credit(2, 30).await.unwrap();

    assert_eq!(repo.balance(1).await.unwrap(), 70);
    assert_eq!(repo.balance(2).await.unwrap(), 30);

    // Overdraft is rejected and leaves the balance alone
    let err = repo.debit(2, 31).await.unwrap_err();
    assert!(matches!(err, RepositoryError::InsufficientFunds { .. }));
    assert_eq!(repo.balance(2).await.unwrap(), 30);
}

#[tokio::test]
async fn leaderboards_rank_by_each_counter() {
    let temp = tempdir().unwrap();
    let pool = setup_database(&temp.path().join("club.db")).await.unwrap();
    let repo = StatsFactory::stats_repository(pool);

    for (user, messages, minutes, money) in [(1, 5, 60, 10), (2, 20, 15, 40), (3, 10, 90, 25)] {
        repo.ensure_member(user).await.unwrap();
        repo.add_messages(user, messages).await.unwrap();
        repo.add_voice_minutes(user, minutes).await.unwrap();
        repo.credit(user, money).await.unwrap();
    }

    let by_messages = repo.leaderboard(LeaderboardKind::Messages, 5).await.unwrap();
    assert_eq!(
        by_messages.iter().map(|e| e.user_id).collect::<Vec<_>>(),
        [2, 3, 1]
    );

    let by_voice = repo.leaderboard(LeaderboardKind::Voice, 2).await.unwrap();
    assert_eq!(
        by_voice.iter().map(|e| e.user_id).collect::<Vec<_>>(),
        [3, 1]
    );

    let by_balance = repo.leaderboard(LeaderboardKind::Balance, 5).await.unwrap();
    assert_eq!(by_balance[0].user_id, 2);
    assert_eq!(by_balance[0].value, 40);
}
