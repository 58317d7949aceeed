use crate::libs::owner::OwnerKind;
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub subject: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub length_minutes: i64,
    pub owner_id: i64,
    pub owner_type: String,
}

impl Appointment {
    /// Parses the stored discriminator back into its tagged variant.
    pub fn owner_kind(&self) -> Result<OwnerKind> {
        OwnerKind::from_str(&self.owner_type)
    }
}

#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub subject: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub length_minutes: i64,
    pub owner_id: i64,
    pub owner_kind: OwnerKind,
}

impl NewAppointment {
    pub fn new(subject: &str, start_time: DateTime<Utc>, owner_id: i64, owner_kind: OwnerKind) -> Self {
        NewAppointment {
            subject: subject.to_string(),
            description: String::new(),
            start_time,
            length_minutes: 0,
            owner_id,
            owner_kind,
        }
    }
}

/// Inclusive time window used by the range query and the update helper.
/// "Between" semantics are delegated to SQL `BETWEEN`.
#[derive(Debug, Clone, Copy)]
pub struct AppointmentWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl AppointmentWindow {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        AppointmentWindow { from, to }
    }
}
