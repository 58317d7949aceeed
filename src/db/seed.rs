//! Seeding helpers for the scheduling schema.
//!
//! Inserts a whole user → calendar → appointment graph. The graph is
//! decomposed into an explicit ordered sequence of inserts inside one
//! transaction: either every row lands or none does. The seeded user is
//! also registered as an attendee of the seeded appointment, so the
//! attendee join table is populated for range queries.
//!
//! Seeding is intentionally not idempotent: no uniqueness is enforced at
//! this layer, and repeating a seed with identical inputs duplicates rows.

use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::owner::OwnerKind;
use crate::msg_success;
use anyhow::Result;
use chrono::{DateTime, Utc};

const INSERT_USER: &str = "INSERT INTO users (username, first_name, last_name) VALUES ($1, $2, $3) RETURNING id";
const INSERT_CALENDAR: &str = "INSERT INTO calendars (name, user_id) VALUES ($1, $2) RETURNING id";
const INSERT_APPOINTMENT: &str = "
    INSERT INTO appointments (subject, start_time, owner_id, owner_type)
    VALUES ($1, $2, $3, $4)
    RETURNING id
";
const INSERT_ATTENDEE: &str = "INSERT INTO appointment_user (appointment_id, user_id) VALUES ($1, $2)";

/// Scalar inputs for one seeded user graph.
#[derive(Debug, Clone)]
pub struct SeedUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub calendar_name: String,
    pub appointment_subject: String,
    pub start_time: DateTime<Utc>,
}

impl SeedUser {
    pub fn new(
        username: &str,
        first_name: &str,
        last_name: &str,
        calendar_name: &str,
        appointment_subject: &str,
        start_time: DateTime<Utc>,
    ) -> Self {
        SeedUser {
            username: username.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            calendar_name: calendar_name.to_string(),
            appointment_subject: appointment_subject.to_string(),
            start_time,
        }
    }
}

/// Seeds one user with a calendar and a single calendar-owned appointment.
///
/// Returns the seed-complete message on success; on any failure the
/// transaction rolls back and no partial graph remains.
pub async fn seed_user(db: &Db, seed: &SeedUser) -> Result<String> {
    let mut tx = db.pool.begin().await?;

    let user_id: i64 = sqlx::query_scalar(INSERT_USER)
        .bind(&seed.username)
        .bind(&seed.first_name)
        .bind(&seed.last_name)
        .fetch_one(&mut *tx)
        .await?;

    let calendar_id: i64 = sqlx::query_scalar(INSERT_CALENDAR)
        .bind(&seed.calendar_name)
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

    let appointment_id: i64 = sqlx::query_scalar(INSERT_APPOINTMENT)
        .bind(&seed.appointment_subject)
        .bind(seed.start_time)
        .bind(calendar_id)
        .bind(OwnerKind::Calendar.as_str())
        .fetch_one(&mut *tx)
        .await?;

    sqlx::query(INSERT_ATTENDEE)
        .bind(appointment_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    msg_success!(Message::SeedCompleted);
    Ok(Message::SeedCompleted.to_string())
}
