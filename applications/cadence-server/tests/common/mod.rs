/// Common test utilities and fixtures
use cadence_server::{config::ServerConfig, AppState};
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test application backed by a real SQLite file in a temp dir
pub struct TestApp {
    pub state: AppState,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut config = ServerConfig::default();
        config.storage.database_url =
            format!("sqlite://{}", temp_dir.path().join("test.db").display());

        let state = cadence_server::connect(&config)
            .await
            .expect("Failed to connect test database");

        Self {
            state,
            _temp_dir: temp_dir,
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        self.state.dispatcher.store().pool()
    }

    /// Seed a playlist with explicit id and ordered members
    pub async fn seed_playlist(&self, id: i64, member_ids: &[i64]) {
        sqlx::query("INSERT INTO playlists (id, name) VALUES (?, 'Fixture')")
            .bind(id)
            .execute(self.pool())
            .await
            .expect("Failed to create playlist");

        for (position, member_id) in member_ids.iter().enumerate() {
            sqlx::query(
                "INSERT INTO playlist_members (playlist_id, member_id, position) VALUES (?, ?, ?)",
            )
            .bind(id)
            .bind(*member_id)
            .bind(position as i64)
            .execute(self.pool())
            .await
            .expect("Failed to add member");
        }
    }
}
