use crate::db::db::Db;
use crate::libs::appointment::{Appointment, AppointmentWindow};
use crate::libs::calendar::Calendar;
use crate::libs::messages::Message;
use crate::libs::owner::OwnerKind;
use crate::libs::user::{NewUser, User};
use crate::msg_error_anyhow;
use anyhow::Result;
use sqlx::PgPool;

pub(crate) const SCHEMA_USERS: &str = "CREATE TABLE IF NOT EXISTS users (
    id BIGSERIAL PRIMARY KEY,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    username TEXT NOT NULL,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL
)";
const INSERT_USER: &str = "INSERT INTO users (username, first_name, last_name) VALUES ($1, $2, $3) RETURNING id";
const SELECT_USER_BY_USERNAME: &str = "SELECT * FROM users WHERE username = $1 LIMIT 1";
const SELECT_CALENDAR_BY_USER: &str = "SELECT * FROM calendars WHERE user_id = $1 LIMIT 1";
const SELECT_APPOINTMENTS_BY_OWNER: &str = "
    SELECT * FROM appointments
    WHERE owner_id = $1 AND owner_type = $2
    ORDER BY start_time
";
const SELECT_USERNAMES_WITH_RANGE_APPOINTMENT: &str = "
    SELECT DISTINCT users.username FROM users
    JOIN calendars ON users.id = calendars.user_id
    JOIN appointments ON calendars.id = appointments.owner_id AND appointments.owner_type = $1
    JOIN appointment_user ON appointments.id = appointment_user.appointment_id
    WHERE appointments.start_time BETWEEN $2 AND $3
      AND appointments.subject = $4
      AND calendars.name LIKE $5
    ORDER BY users.username
";

/// A user together with its calendar and that calendar's appointments.
#[derive(Debug, Clone)]
pub struct UserWithCalendar {
    pub user: User,
    pub calendar: Calendar,
    pub appointments: Vec<Appointment>,
}

pub struct Users {
    pool: PgPool,
}

impl Users {
    pub fn new(db: &Db) -> Self {
        Users { pool: db.pool.clone() }
    }

    pub async fn insert(&self, user: &NewUser) -> Result<i64> {
        let id = sqlx::query_scalar(INSERT_USER)
            .bind(&user.username)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    pub async fn fetch_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as(SELECT_USER_BY_USERNAME)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// Fetches a user with its calendar and the calendar's appointments,
    /// the way the seeding helper lays them out.
    pub async fn fetch_with_calendar(&self, username: &str) -> Result<UserWithCalendar> {
        let user: User = self
            .fetch_by_username(username)
            .await?
            .ok_or_else(|| msg_error_anyhow!(Message::UserNotFound(username.to_string())))?;

        let calendar: Calendar = sqlx::query_as(SELECT_CALENDAR_BY_USER)
            .bind(user.id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| msg_error_anyhow!(Message::CalendarNotFoundForUser(username.to_string())))?;

        let appointments = sqlx::query_as(SELECT_APPOINTMENTS_BY_OWNER)
            .bind(calendar.id)
            .bind(OwnerKind::Calendar.as_str())
            .fetch_all(&self.pool)
            .await?;

        Ok(UserWithCalendar { user, calendar, appointments })
    }

    /// Range query scope: usernames of attendees of calendar-owned
    /// appointments whose start time falls inside `window`, whose subject
    /// matches exactly, and whose calendar name contains `calendar_name`.
    ///
    /// Results are distinct and ordered by username.
    pub async fn usernames_with_appointment_between(
        &self,
        window: &AppointmentWindow,
        subject: &str,
        calendar_name: &str,
    ) -> Result<Vec<String>> {
        let usernames = sqlx::query_scalar(SELECT_USERNAMES_WITH_RANGE_APPOINTMENT)
            .bind(OwnerKind::Calendar.as_str())
            .bind(window.from)
            .bind(window.to)
            .bind(subject)
            .bind(format!("%{}%", calendar_name))
            .fetch_all(&self.pool)
            .await?;
        Ok(usernames)
    }
}
