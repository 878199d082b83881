use crate::TestDb;
use std::borrow::Cow;
use std::path::Path;
use tempfile::TempDir;
use thiserror::Error;

/// File-backed sqlite database in a temporary directory.
///
/// Unlike `sqlite::memory:` the file can be shared by every connection of a pool, which is what
/// the concurrency tests need.
pub struct SqliteDb {
    // Removed together with the database file on drop
    temp_dir: TempDir,
    uri: String,
}

#[derive(Error, Debug)]
pub enum SqliteError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("temporary path is not valid utf-8")]
    InvalidPath,
}

impl SqliteDb {
    pub fn new() -> Result<Self, SqliteError> {
        let temp_dir = TempDir::with_prefix("lumera-sqlite-db")?;
        let file = temp_dir.path().join("db.sqlite");
        let uri = format!("sqlite://{}?mode=rwc", file.to_str().ok_or(SqliteError::InvalidPath)?);

        tracing::info!(uri = ?uri, "return sqlite db uri");
        Ok(Self { temp_dir, uri })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }
}

impl TestDb for SqliteDb {
    fn db_uri(&self) -> Cow<'_, str> {
        self.uri.as_str().into()
    }
}
