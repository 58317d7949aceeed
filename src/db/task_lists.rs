use crate::db::db::Db;
use crate::libs::appointment::Appointment;
use crate::libs::owner::OwnerKind;
use crate::libs::task_list::TaskList;
use anyhow::Result;
use sqlx::PgPool;

pub(crate) const SCHEMA_TASK_LISTS: &str = "CREATE TABLE IF NOT EXISTS task_lists (
    id BIGSERIAL PRIMARY KEY,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    name TEXT NOT NULL DEFAULT ''
)";
const INSERT_TASK_LIST: &str = "INSERT INTO task_lists (name) VALUES ($1) RETURNING id";
const SELECT_TASK_LIST_BY_ID: &str = "SELECT * FROM task_lists WHERE id = $1";
const SELECT_OWNED_APPOINTMENTS: &str = "
    SELECT * FROM appointments
    WHERE owner_id = $1 AND owner_type = $2
    ORDER BY start_time
";

pub struct TaskLists {
    pool: PgPool,
}

impl TaskLists {
    pub fn new(db: &Db) -> Self {
        TaskLists { pool: db.pool.clone() }
    }

    pub async fn insert(&self, name: &str) -> Result<i64> {
        let id = sqlx::query_scalar(INSERT_TASK_LIST)
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    pub async fn fetch_by_id(&self, id: i64) -> Result<Option<TaskList>> {
        let task_list = sqlx::query_as(SELECT_TASK_LIST_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(task_list)
    }

    /// Appointments owned by this task list through the polymorphic owner columns.
    pub async fn fetch_appointments(&self, task_list_id: i64) -> Result<Vec<Appointment>> {
        let appointments = sqlx::query_as(SELECT_OWNED_APPOINTMENTS)
            .bind(task_list_id)
            .bind(OwnerKind::TaskList.as_str())
            .fetch_all(&self.pool)
            .await?;
        Ok(appointments)
    }
}
