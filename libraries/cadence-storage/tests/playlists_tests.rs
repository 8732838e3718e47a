//! Integration tests for playlists vertical slice
//!
//! Tests playlist membership operations including:
//! - Existence probes
//! - Member moves in both directions, no-op moves and rejected bounds
//! - Conditional (move-if-exists) writes
//! - Coordinator end-to-end over a real database
//! - Store failures surfacing as errors rather than `false`


use cadence_core::{
    CadenceError, ExistenceProber, MoveRequest, PlaylistId, ReorderCoordinator,
};
use cadence_storage::{playlists, PoolSettings, SqliteMediaIndex};
use std::time::Duration;
use test_helpers::*;

#[tokio::test]
async fn test_exists_reports_present_and_missing_playlists() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist_id = create_test_playlist(pool, "Road Trip").await;

    assert!(playlists::exists(pool, playlist_id).await.unwrap());
    assert!(!playlists::exists(pool, PlaylistId::new(playlist_id.get() + 1))
        .await
        .unwrap());
    assert!(!playlists::exists(pool, PlaylistId::new(-1)).await.unwrap());
}

#[tokio::test]
async fn test_move_forward_shifts_members_back() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist_id = create_playlist_with_members(pool, "Test", &[10, 20, 30, 40, 50]).await;

    let moved = playlists::move_member(pool, playlist_id, 1, 3).await.unwrap();
    assert!(moved);

    assert_eq!(member_ids(pool, playlist_id).await, vec![10, 30, 40, 20, 50]);
}

#[tokio::test]
async fn test_move_backward_shifts_members_forward() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist_id = create_playlist_with_members(pool, "Test", &[10, 20, 30, 40, 50]).await;

    let moved = playlists::move_member(pool, playlist_id, 4, 0).await.unwrap();
    assert!(moved);

    assert_eq!(member_ids(pool, playlist_id).await, vec![50, 10, 20, 30, 40]);
}

#[tokio::test]
async fn test_positions_stay_dense_after_moves() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist_id = create_playlist_with_members(pool, "Test", &[1, 2, 3, 4, 5, 6]).await;

    for (from, to) in [(0, 5), (5, 2), (3, 1), (2, 4)] {
        assert!(playlists::move_member(pool, playlist_id, from, to).await.unwrap());
    }

    let order = playlists::member_order(pool, playlist_id)
        .await
        .unwrap()
        .unwrap();
    let positions: Vec<i32> = order.iter().map(|m| m.position).collect();
    assert_eq!(positions, vec![0, 1, 2, 3, 4, 5]);

    let mut ids: Vec<i64> = order.iter().map(|m| m.member_id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[tokio::test]
async fn test_same_position_move_is_accepted_and_changes_nothing() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist_id = create_playlist_with_members(pool, "Test", &[7, 8, 9]).await;

    assert!(playlists::move_member(pool, playlist_id, 1, 1).await.unwrap());
    assert_eq!(member_ids(pool, playlist_id).await, vec![7, 8, 9]);
}

#[tokio::test]
async fn test_out_of_range_moves_are_rejected_without_corruption() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist_id = create_playlist_with_members(pool, "Test", &[7, 8, 9]).await;

    for (from, to) in [(0, 3), (3, 0), (-1, 1), (1, -1), (0, i32::MAX)] {
        let moved = playlists::move_member(pool, playlist_id, from, to).await.unwrap();
        assert!(!moved, "move {} -> {} should be rejected", from, to);
    }

    assert_eq!(member_ids(pool, playlist_id).await, vec![7, 8, 9]);
}

#[tokio::test]
async fn test_empty_playlist_exists_but_rejects_moves() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist_id = create_test_playlist(pool, "Empty").await;

    assert!(playlists::exists(pool, playlist_id).await.unwrap());
    assert!(!playlists::move_member(pool, playlist_id, 0, 0).await.unwrap());
    assert_eq!(
        playlists::member_order(pool, playlist_id).await.unwrap(),
        Some(vec![])
    );
}

#[tokio::test]
async fn test_move_on_deleted_playlist_is_rejected() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist_id = create_playlist_with_members(pool, "Gone", &[1, 2]).await;
    delete_playlist(pool, playlist_id).await;

    assert!(!playlists::move_member(pool, playlist_id, 0, 1).await.unwrap());
    assert!(playlists::member_order(pool, playlist_id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_move_leaves_other_playlists_untouched() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let first = create_playlist_with_members(pool, "First", &[1, 2, 3]).await;
    let second = create_playlist_with_members(pool, "Second", &[4, 5, 6]).await;

    assert!(playlists::move_member(pool, first, 0, 2).await.unwrap());

    assert_eq!(member_ids(pool, first).await, vec![2, 3, 1]);
    assert_eq!(member_ids(pool, second).await, vec![4, 5, 6]);
}

#[tokio::test]
async fn test_duplicate_members_move_by_position() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist_id = create_playlist_with_members(pool, "Repeats", &[5, 9, 5]).await;

    assert!(playlists::move_member(pool, playlist_id, 2, 0).await.unwrap());
    assert_eq!(member_ids(pool, playlist_id).await, vec![5, 5, 9]);
}

#[tokio::test]
async fn test_conditional_move_checks_existence_in_same_write() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist_id = create_playlist_with_members(pool, "Test", &[1, 2, 3]).await;

    assert!(playlists::move_member_if_exists(pool, playlist_id, 2, 0)
        .await
        .unwrap());
    assert_eq!(member_ids(pool, playlist_id).await, vec![3, 1, 2]);

    assert!(!playlists::move_member_if_exists(pool, PlaylistId::new(9999), 0, 1)
        .await
        .unwrap());
    assert!(!playlists::move_member_if_exists(pool, playlist_id, 0, 3)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_coordinator_reference_scenario() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();
    let index = SqliteMediaIndex::new(pool.clone());
    let coordinator = ReorderCoordinator::new(index.clone(), index);

    let request = MoveRequest::new(PlaylistId::new(123), 0, 1);

    // No playlist 123 yet
    assert!(!coordinator.move_item_to(request).await.unwrap());

    sqlx::query("INSERT INTO playlists (id, name) VALUES (123, 'Reference')")
        .execute(pool)
        .await
        .unwrap();
    for (position, member_id) in [(0_i64, 100_i64), (1, 200)] {
        sqlx::query(
            "INSERT INTO playlist_members (playlist_id, member_id, position) VALUES (123, ?, ?)",
        )
        .bind(member_id)
        .bind(position)
        .execute(pool)
        .await
        .unwrap();
    }

    assert!(coordinator.move_item_to(request).await.unwrap());
    assert_eq!(member_ids(pool, PlaylistId::new(123)).await, vec![200, 100]);

    assert!(coordinator.move_item_to_atomic(request).await.unwrap());
    assert_eq!(member_ids(pool, PlaylistId::new(123)).await, vec![100, 200]);
}

#[tokio::test]
async fn test_closed_pool_surfaces_store_unavailable() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist_id = create_playlist_with_members(pool, "Test", &[1, 2]).await;
    let index = SqliteMediaIndex::new(pool.clone());

    pool.close().await;

    let err = index.exists(playlist_id).await.unwrap_err();
    assert!(matches!(err, CadenceError::StoreUnavailable(_)));

    let coordinator = ReorderCoordinator::new(index.clone(), index);
    let result = coordinator
        .move_item_to(MoveRequest::new(playlist_id, 0, 1))
        .await;
    assert!(matches!(result, Err(CadenceError::StoreUnavailable(_))));
}

#[tokio::test]
async fn test_concurrent_moves_keep_order_a_permutation() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let members: Vec<i64> = (1..=8).collect();
    let playlist_id = create_playlist_with_members(pool, "Busy", &members).await;
    let index = SqliteMediaIndex::new(pool.clone());

    let mut handles = Vec::new();
    for i in 0..8 {
        let index = index.clone();
        handles.push(tokio::spawn(async move {
            let coordinator = ReorderCoordinator::new(index.clone(), index);
            coordinator
                .move_item_to(MoveRequest::new(playlist_id, i, 7 - i))
                .await
        }));
    }

    for handle in handles {
        // Individual moves may lose a write conflict; none may error out
        handle.await.unwrap().unwrap();
    }

    let order = playlists::member_order(pool, playlist_id)
        .await
        .unwrap()
        .unwrap();
    let positions: Vec<i32> = order.iter().map(|m| m.position).collect();
    assert_eq!(positions, (0..8).collect::<Vec<i32>>());

    let mut ids: Vec<i64> = order.iter().map(|m| m.member_id).collect();
    ids.sort_unstable();
    assert_eq!(ids, members);
}

#[tokio::test]
async fn test_move_while_database_is_locked_returns_false() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let playlist_id = create_playlist_with_members(pool, "Locked", &[1, 2, 3]).await;

    // A second pool that gives up immediately instead of waiting on the lock
    let impatient = cadence_storage::create_pool_with(
        &test_db.db_url,
        PoolSettings {
            max_connections: 1,
            busy_timeout: Duration::ZERO,
        },
    )
    .await
    .unwrap();

    let mut holder = pool.acquire().await.unwrap();
    sqlx::query("BEGIN IMMEDIATE")
        .execute(&mut *holder)
        .await
        .unwrap();

    let result = playlists::move_member(&impatient, playlist_id, 0, 2).await;
    assert!(matches!(result, Ok(false)), "expected Ok(false), got {result:?}");

    sqlx::query("ROLLBACK").execute(&mut *holder).await.unwrap();
    drop(holder);

    assert_eq!(member_ids(pool, playlist_id).await, vec![1, 2, 3]);
}
