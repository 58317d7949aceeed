use crate::db::db::Db;
use crate::libs::appointment::{Appointment, AppointmentWindow, NewAppointment};
use crate::libs::messages::Message;
use crate::libs::owner::OwnerKind;
use crate::libs::user::User;
use crate::msg_debug;
use anyhow::Result;
use chrono::Duration;
use sqlx::PgPool;

pub(crate) const SCHEMA_APPOINTMENTS: &str = "CREATE TABLE IF NOT EXISTS appointments (
    id BIGSERIAL PRIMARY KEY,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    subject TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    start_time TIMESTAMPTZ NOT NULL,
    length_minutes BIGINT NOT NULL DEFAULT 0,
    owner_id BIGINT NOT NULL,
    owner_type TEXT NOT NULL CHECK (owner_type IN ('calendar', 'task_list'))
)";
pub(crate) const SCHEMA_APPOINTMENT_USER: &str = "CREATE TABLE IF NOT EXISTS appointment_user (
    appointment_id BIGINT NOT NULL REFERENCES appointments(id) ON DELETE CASCADE,
    user_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    PRIMARY KEY (appointment_id, user_id)
)";
const INSERT_APPOINTMENT: &str = "
    INSERT INTO appointments (subject, description, start_time, length_minutes, owner_id, owner_type)
    VALUES ($1, $2, $3, $4, $5, $6)
    RETURNING id
";
const SELECT_APPOINTMENT_BY_ID: &str = "SELECT * FROM appointments WHERE id = $1";
const SELECT_APPOINTMENT_BY_SUBJECT: &str = "SELECT * FROM appointments WHERE subject = $1 ORDER BY id LIMIT 1";
const SELECT_APPOINTMENTS_IN_WINDOW: &str = "
    SELECT appointments.* FROM appointments
    JOIN calendars ON appointments.owner_id = calendars.id AND appointments.owner_type = $1
    WHERE calendars.name = $2
      AND appointments.start_time BETWEEN $3 AND $4
      AND appointments.subject LIKE $5
    ORDER BY appointments.id
";
const UPDATE_APPOINTMENT: &str = "
    UPDATE appointments
    SET subject = $2, description = $3, start_time = $4, length_minutes = $5,
        owner_id = $6, owner_type = $7, updated_at = now()
    WHERE id = $1
";
const INSERT_ATTENDEE: &str = "
    INSERT INTO appointment_user (appointment_id, user_id)
    VALUES ($1, $2)
    ON CONFLICT (appointment_id, user_id) DO NOTHING
";
const DELETE_ATTENDEE: &str = "DELETE FROM appointment_user WHERE appointment_id = $1 AND user_id = $2";
const SELECT_ATTENDEES: &str = "
    SELECT users.* FROM users
    JOIN appointment_user ON users.id = appointment_user.user_id
    WHERE appointment_user.appointment_id = $1
    ORDER BY users.username
";

pub struct Appointments {
    pool: PgPool,
}

impl Appointments {
    pub fn new(db: &Db) -> Self {
        Appointments { pool: db.pool.clone() }
    }

    /// Inserts an appointment. The owner discriminator is carried as an
    /// [`crate::libs::owner::OwnerKind`], so an unrecognized tag cannot
    /// reach the database.
    pub async fn insert(&self, appointment: &NewAppointment) -> Result<i64> {
        let id = sqlx::query_scalar(INSERT_APPOINTMENT)
            .bind(&appointment.subject)
            .bind(&appointment.description)
            .bind(appointment.start_time)
            .bind(appointment.length_minutes)
            .bind(appointment.owner_id)
            .bind(appointment.owner_kind.as_str())
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    pub async fn fetch_by_id(&self, id: i64) -> Result<Option<Appointment>> {
        let appointment = sqlx::query_as(SELECT_APPOINTMENT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(appointment)
    }

    pub async fn fetch_by_subject(&self, subject: &str) -> Result<Option<Appointment>> {
        let appointment = sqlx::query_as(SELECT_APPOINTMENT_BY_SUBJECT)
            .bind(subject)
            .fetch_optional(&self.pool)
            .await?;
        Ok(appointment)
    }

    /// Calendar-owned appointments on the named calendar whose start time
    /// falls inside `window` and whose subject contains `keyword`.
    pub async fn fetch_in_window(
        &self,
        calendar_name: &str,
        window: &AppointmentWindow,
        keyword: &str,
    ) -> Result<Vec<Appointment>> {
        let appointments = sqlx::query_as(SELECT_APPOINTMENTS_IN_WINDOW)
            .bind(OwnerKind::Calendar.as_str())
            .bind(calendar_name)
            .bind(window.from)
            .bind(window.to)
            .bind(format!("%{}%", keyword))
            .fetch_all(&self.pool)
            .await?;
        Ok(appointments)
    }

    /// Shifts every matching appointment one hour forward and rewrites its
    /// description to `"<subject> event"`, saving row by row.
    ///
    /// The first failing save aborts the loop; rows already saved stay
    /// updated. Callers that need atomicity must not rely on this helper.
    pub async fn shift_in_window(
        &self,
        calendar_name: &str,
        window: &AppointmentWindow,
        keyword: &str,
    ) -> Result<usize> {
        let mut appointments = self.fetch_in_window(calendar_name, window, keyword).await?;
        if appointments.is_empty() {
            msg_debug!(Message::NoAppointmentsInWindow);
            return Ok(0);
        }

        for appointment in appointments.iter_mut() {
            appointment.start_time = appointment.start_time + Duration::hours(1);
            appointment.description = format!("{} event", appointment.subject);
            self.save(appointment).await?;
        }

        msg_debug!(Message::AppointmentsUpdated(appointments.len()));
        Ok(appointments.len())
    }

    /// Persists the full row of an already-loaded appointment.
    ///
    /// The owner tag is re-validated before it is written back.
    pub async fn save(&self, appointment: &Appointment) -> Result<()> {
        let owner_kind = appointment.owner_kind()?;
        sqlx::query(UPDATE_APPOINTMENT)
            .bind(appointment.id)
            .bind(&appointment.subject)
            .bind(&appointment.description)
            .bind(appointment.start_time)
            .bind(appointment.length_minutes)
            .bind(appointment.owner_id)
            .bind(owner_kind.as_str())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Adds a user to the appointment's attendee list; duplicate pairs are ignored.
    pub async fn add_attendee(&self, appointment_id: i64, user_id: i64) -> Result<()> {
        sqlx::query(INSERT_ATTENDEE)
            .bind(appointment_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn remove_attendee(&self, appointment_id: i64, user_id: i64) -> Result<()> {
        sqlx::query(DELETE_ATTENDEE)
            .bind(appointment_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn fetch_attendees(&self, appointment_id: i64) -> Result<Vec<User>> {
        let attendees = sqlx::query_as(SELECT_ATTENDEES)
            .bind(appointment_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(attendees)
    }
}
