//! Database schema refresh management.
//!
//! Provides a destructive refresh for the scheduling schema: every entity
//! table is dropped and recreated in declaration order, leaving a clean,
//! empty database. This is a full-table reset, not per-row deletion, and
//! is the only way rows are ever destroyed in this layer.
//!
//! ## Features
//!
//! - **Ordered Refresh**: Entities are processed in the order given, so
//!   foreign keys always point at freshly created tables
//! - **Fail Fast**: The first failing statement aborts remaining work and
//!   propagates; there is no partial-failure rollback and no retry
//! - **Schema Probes**: Table existence and row-count helpers for callers
//!   and tests
//!
//! ## Usage
//!
//! ```rust,no_run
//! use agenda::db::db::Db;
//! use agenda::db::migrations::{Entity, SchemaManager};
//! use agenda::libs::config::DbConfig;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let db = Db::connect(&DbConfig::from_env()).await?;
//! let message = SchemaManager::new(&db).refresh(Entity::ALL).await?;
//! # Ok(())
//! # }
//! ```

use crate::db::appointments::{SCHEMA_APPOINTMENTS, SCHEMA_APPOINTMENT_USER};
use crate::db::calendars::SCHEMA_CALENDARS;
use crate::db::db::Db;
use crate::db::task_lists::SCHEMA_TASK_LISTS;
use crate::db::users::SCHEMA_USERS;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info, msg_success};
use anyhow::Result;
use sqlx::PgPool;

const INDEX_CALENDARS_USER: &str = "CREATE INDEX IF NOT EXISTS idx_calendars_user_id ON calendars(user_id)";
const INDEX_APPOINTMENTS_OWNER: &str = "CREATE INDEX IF NOT EXISTS idx_appointments_owner ON appointments(owner_id, owner_type)";
const INDEX_APPOINTMENTS_START: &str = "CREATE INDEX IF NOT EXISTS idx_appointments_start_time ON appointments(start_time)";
const TABLE_EXISTS: &str = "SELECT EXISTS (
    SELECT 1 FROM information_schema.tables
    WHERE table_schema = 'public' AND table_name = $1
)";

/// An entity shape known to the refresh system.
///
/// Each variant names one table together with the DDL that recreates it.
/// `ALL` lists every entity in dependency order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Users,
    Calendars,
    Appointments,
    TaskLists,
    AppointmentUser,
}

impl Entity {
    /// Every entity, ordered so that referenced tables are created first.
    pub const ALL: &'static [Entity] = &[
        Entity::Users,
        Entity::Calendars,
        Entity::Appointments,
        Entity::TaskLists,
        Entity::AppointmentUser,
    ];

    pub fn table(&self) -> &'static str {
        match self {
            Entity::Users => "users",
            Entity::Calendars => "calendars",
            Entity::Appointments => "appointments",
            Entity::TaskLists => "task_lists",
            Entity::AppointmentUser => "appointment_user",
        }
    }

    /// DDL run after the drop: the CREATE TABLE plus any indexes.
    fn statements(&self) -> &'static [&'static str] {
        match self {
            Entity::Users => &[SCHEMA_USERS],
            Entity::Calendars => &[SCHEMA_CALENDARS, INDEX_CALENDARS_USER],
            Entity::Appointments => &[SCHEMA_APPOINTMENTS, INDEX_APPOINTMENTS_OWNER, INDEX_APPOINTMENTS_START],
            Entity::TaskLists => &[SCHEMA_TASK_LISTS],
            Entity::AppointmentUser => &[SCHEMA_APPOINTMENT_USER],
        }
    }
}

/// Orchestrates the drop-and-recreate cycle for a set of entities.
pub struct SchemaManager {
    pool: PgPool,
}

impl SchemaManager {
    pub fn new(db: &Db) -> Self {
        SchemaManager { pool: db.pool.clone() }
    }

    /// Drops and recreates each entity's table in order.
    ///
    /// Returns the refresh-complete message on success. The first error
    /// aborts remaining entities; tables already recreated stay in place.
    pub async fn refresh(&self, entities: &[Entity]) -> Result<String> {
        msg_info!(Message::RefreshStarted(entities.len()));

        for entity in entities {
            msg_debug!(Message::RefreshingEntity(entity.table().to_string()));
            if let Err(err) = self.recreate(entity).await {
                msg_error!(Message::RefreshFailed(entity.table().to_string(), err.to_string()));
                return Err(err);
            }
        }

        msg_success!(Message::RefreshCompleted);
        Ok(Message::RefreshCompleted.to_string())
    }

    async fn recreate(&self, entity: &Entity) -> Result<()> {
        // CASCADE clears foreign keys of tables refreshed later in the order
        let drop_table = format!("DROP TABLE IF EXISTS {} CASCADE", entity.table());
        sqlx::query(&drop_table).execute(&self.pool).await?;

        for statement in entity.statements() {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Checks whether a table exists in the public schema.
    pub async fn table_exists(&self, table: &str) -> Result<bool> {
        let exists = sqlx::query_scalar(TABLE_EXISTS)
            .bind(table)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// Counts the rows of an entity's table.
    pub async fn row_count(&self, entity: &Entity) -> Result<i64> {
        let count = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", entity.table()))
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
