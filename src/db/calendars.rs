use crate::db::db::Db;
use crate::libs::appointment::Appointment;
use crate::libs::calendar::Calendar;
use crate::libs::owner::OwnerKind;
use anyhow::Result;
use sqlx::PgPool;

pub(crate) const SCHEMA_CALENDARS: &str = "CREATE TABLE IF NOT EXISTS calendars (
    id BIGSERIAL PRIMARY KEY,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    name TEXT NOT NULL,
    user_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE
)";
const INSERT_CALENDAR: &str = "INSERT INTO calendars (name, user_id) VALUES ($1, $2) RETURNING id";
const SELECT_CALENDAR_BY_ID: &str = "SELECT * FROM calendars WHERE id = $1";
const SELECT_CALENDARS_BY_USER: &str = "SELECT * FROM calendars WHERE user_id = $1 ORDER BY id";
const SELECT_OWNED_APPOINTMENTS: &str = "
    SELECT * FROM appointments
    WHERE owner_id = $1 AND owner_type = $2
    ORDER BY start_time
";

pub struct Calendars {
    pool: PgPool,
}

impl Calendars {
    pub fn new(db: &Db) -> Self {
        Calendars { pool: db.pool.clone() }
    }

    pub async fn insert(&self, name: &str, user_id: i64) -> Result<i64> {
        let id = sqlx::query_scalar(INSERT_CALENDAR)
            .bind(name)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    pub async fn fetch_by_id(&self, id: i64) -> Result<Option<Calendar>> {
        let calendar = sqlx::query_as(SELECT_CALENDAR_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(calendar)
    }

    pub async fn fetch_by_user(&self, user_id: i64) -> Result<Vec<Calendar>> {
        let calendars = sqlx::query_as(SELECT_CALENDARS_BY_USER)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(calendars)
    }

    /// Appointments owned by this calendar through the polymorphic owner columns.
    pub async fn fetch_appointments(&self, calendar_id: i64) -> Result<Vec<Appointment>> {
        let appointments = sqlx::query_as(SELECT_OWNED_APPOINTMENTS)
            .bind(calendar_id)
            .bind(OwnerKind::Calendar.as_str())
            .fetch_all(&self.pool)
            .await?;
        Ok(appointments)
    }
}
