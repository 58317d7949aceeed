use crate::libs::config::DbConfig;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error_anyhow};
use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Shared database handle.
///
/// Wraps one bounded `PgPool` built at process start and passed explicitly
/// to every repository and helper. Cloning is cheap; all clones share the
/// same pool.
#[derive(Clone)]
pub struct Db {
    pub pool: PgPool,
}

impl Db {
    /// Connects to PostgreSQL using the given configuration.
    ///
    /// Connection failure is returned, not fatal; the embedding program
    /// decides whether to abort.
    pub async fn connect(config: &DbConfig) -> Result<Db> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.connection_url())
            .await
            .map_err(|err| msg_error_anyhow!(Message::DbConnectionFailed(err.to_string())))?;

        msg_debug!(Message::DbConnected(config.dbname.clone()));
        Ok(Db { pool })
    }

    /// Verifies the database is reachable.
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|_| msg_error_anyhow!(Message::DbPingFailed))?;
        Ok(())
    }
}
