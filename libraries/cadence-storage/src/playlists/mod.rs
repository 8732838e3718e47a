//! Playlist membership order
//!
//! Existence probes, member order reads and single-member moves. Moves run
//! inside one transaction and renumber the affected range in two passes so
//! `UNIQUE (playlist_id, position)` holds after every statement.

use cadence_core::{error::Result, types::*};
use sqlx::{Row, SqliteConnection, SqlitePool};
use tracing::{debug, warn};

/// Check whether a playlist record exists
pub async fn exists(pool: &SqlitePool, playlist_id: PlaylistId) -> Result<bool> {
    let row = sqlx::query("SELECT 1 FROM playlists WHERE id = ? LIMIT 1")
        .bind(playlist_id)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}

/// Get the members of a playlist ordered by position
///
/// Returns `None` when the playlist does not exist.
pub async fn member_order(
    pool: &SqlitePool,
    playlist_id: PlaylistId,
) -> Result<Option<Vec<PlaylistMember>>> {
    if !exists(pool, playlist_id).await? {
        return Ok(None);
    }

    let rows = sqlx::query(
        r#"
        SELECT member_id, position
        FROM playlist_members
        WHERE playlist_id = ?
        ORDER BY position
        "#,
    )
    .bind(playlist_id)
    .fetch_all(pool)
    .await?;

    Ok(Some(
        rows.into_iter()
            .map(|row| PlaylistMember {
                member_id: row.get("member_id"),
                position: row.get::<i64, _>("position") as Position,
            })
            .collect(),
    ))
}

/// Move the member at `from` to `to`
///
/// `Ok(false)` when either position is outside the current member range
/// (which includes a playlist that no longer exists) or when SQLite reports
/// a write conflict.
pub async fn move_member(
    pool: &SqlitePool,
    playlist_id: PlaylistId,
    from: Position,
    to: Position,
) -> Result<bool> {
    let outcome = async {
        let mut tx = pool.begin().await?;
        let moved = move_within(&mut tx, MoveRequest::new(playlist_id, from, to)).await?;
        if moved {
            tx.commit().await?;
        }
        Ok::<_, sqlx::Error>(moved)
    }
    .await;

    fold_conflict(outcome, playlist_id)
}

/// Check existence and move inside the same transaction
pub async fn move_member_if_exists(
    pool: &SqlitePool,
    playlist_id: PlaylistId,
    from: Position,
    to: Position,
) -> Result<bool> {
    let outcome = async {
        let mut tx = pool.begin().await?;

        let found = sqlx::query("SELECT 1 FROM playlists WHERE id = ? LIMIT 1")
            .bind(playlist_id)
            .fetch_optional(&mut *tx)
            .await?
            .is_some();
        if !found {
            debug!(%playlist_id, "Conditional move on missing playlist");
            return Ok(false);
        }

        let moved = move_within(&mut tx, MoveRequest::new(playlist_id, from, to)).await?;
        if moved {
            tx.commit().await?;
        }
        Ok::<_, sqlx::Error>(moved)
    }
    .await;

    fold_conflict(outcome, playlist_id)
}

async fn move_within(
    conn: &mut SqliteConnection,
    request: MoveRequest,
) -> std::result::Result<bool, sqlx::Error> {
    let MoveRequest {
        playlist_id,
        from,
        to,
    } = request;

    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM playlist_members WHERE playlist_id = ?")
            .bind(playlist_id)
            .fetch_one(&mut *conn)
            .await?;

    let (from, to) = (i64::from(from), i64::from(to));
    if from < 0 || to < 0 || from >= count || to >= count {
        debug!(%playlist_id, from, to, count, "Move positions out of range");
        return Ok(false);
    }

    if request.is_noop() {
        return Ok(true);
    }

    let (low, high, shift) = if from < to {
        (from, to, -1_i64)
    } else {
        (to, from, 1_i64)
    };

    // Park the affected range on distinct negative slots
    sqlx::query(
        r#"
        UPDATE playlist_members
        SET position = -1 - position
        WHERE playlist_id = ?
          AND position BETWEEN ? AND ?
        "#,
    )
    .bind(playlist_id)
    .bind(low)
    .bind(high)
    .execute(&mut *conn)
    .await?;

    // Land the moved member on `to`, everything else one slot over
    sqlx::query(
        r#"
        UPDATE playlist_members
        SET position = CASE
            WHEN position = -1 - ? THEN ?
            ELSE (-1 - position) + ?
        END
        WHERE playlist_id = ?
          AND position < 0
        "#,
    )
    .bind(from)
    .bind(to)
    .bind(shift)
    .bind(playlist_id)
    .execute(&mut *conn)
    .await?;

    sqlx::query("UPDATE playlists SET updated_at = datetime('now') WHERE id = ?")
        .bind(playlist_id)
        .execute(&mut *conn)
        .await?;

    Ok(true)
}

/// Fold write conflicts into a rejected move; every other failure is fatal
fn fold_conflict(
    outcome: std::result::Result<bool, sqlx::Error>,
    playlist_id: PlaylistId,
) -> Result<bool> {
    match outcome {
        Ok(moved) => Ok(moved),
        Err(err) if is_write_conflict(&err) => {
            warn!(%playlist_id, error = %err, "Playlist move hit a write conflict");
            Ok(false)
        }
        Err(err) => Err(err.into()),
    }
}

/// `SQLITE_BUSY` / `SQLITE_LOCKED`, including their extended variants
pub(crate) fn is_write_conflict(err: &sqlx::Error) -> bool {
    const SQLITE_BUSY: i32 = 5;
    const SQLITE_LOCKED: i32 = 6;

    err.as_database_error()
        .and_then(|db| db.code())
        .and_then(|code| code.parse::<i32>().ok())
        .is_some_and(|code| matches!(code & 0xff, SQLITE_BUSY | SQLITE_LOCKED))
}
