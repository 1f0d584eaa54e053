use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use advocate_directory::db::DbPool;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// File-backed SQLite database living in a temp directory for one test.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let database_url = dir.path().join(name).to_string_lossy().into_owned();

        let mut conn =
            SqliteConnection::establish(&database_url).expect("failed to open test database");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("failed to run migrations");

        let manager = ConnectionManager::<SqliteConnection>::new(&database_url);
        let pool = Pool::builder()
            .build(manager)
            .expect("failed to build pool");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
