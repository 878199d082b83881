use sea_orm::{ConnectionTrait, DatabaseBackend, DbErr};

const SQLITE: &str = include_str!("schema/sqlite.sql");
const POSTGRES: &str = include_str!("schema/postgres.sql");

/// Creates all tables if they are missing.
pub async fn apply<C: ConnectionTrait>(conn: &C) -> Result<(), DbErr> {
    let schema = match conn.get_database_backend() {
        DatabaseBackend::Sqlite => SQLITE,
        DatabaseBackend::Postgres => POSTGRES,
        DatabaseBackend::MySql => return Err(DbErr::Custom("mysql is not supported".to_owned())),
    };
    tracing::debug!(backend = ?conn.get_database_backend(), "applying schema");
    conn.execute_unprepared(schema).await?;
    Ok(())
}
