//! Display implementation for agenda application messages.
//!
//! The single source of truth for all user-facing message text. Structured
//! message data is converted into human-readable strings here, so every
//! helper that reports an outcome goes through one formatting point.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === DATABASE MESSAGES ===
            Message::DbConnected(dbname) => format!("Connected to database '{}'", dbname),
            Message::DbConnectionFailed(error) => format!("Failed to connect to database: {}", error),
            Message::DbPingFailed => "Database is not reachable".to_string(),

            // === SCHEMA MESSAGES ===
            Message::RefreshStarted(count) => format!("Refreshing {} database entities", count),
            Message::RefreshingEntity(table) => format!("Recreating table '{}'", table),
            Message::RefreshCompleted => "Refresh database successfully done".to_string(),
            Message::RefreshFailed(table, error) => format!("Failed to refresh table '{}': {}", table, error),
            Message::TableMissing(table) => format!("Table '{}' does not exist", table),

            // === SEEDING MESSAGES ===
            Message::SeedCompleted => "Seeding database successfully done".to_string(),
            Message::SeedFailed(username) => format!("Failed to seed user '{}'", username),

            // === USER MESSAGES ===
            Message::UserNotFound(username) => format!("User '{}' not found", username),
            Message::CalendarNotFoundForUser(username) => format!("No calendar found for user '{}'", username),

            // === APPOINTMENT MESSAGES ===
            Message::AppointmentNotFound(id) => format!("Appointment with ID {} not found", id),
            Message::AppointmentsUpdated(count) => format!("Updated {} appointment(s)", count),
            Message::NoAppointmentsInWindow => "No appointments found in the given window".to_string(),
            Message::OwnerKindInvalid(tag) => format!("Unknown appointment owner type '{}' (expected 'calendar' or 'task_list')", tag),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigLoaded => "Configuration loaded successfully".to_string(),
            Message::ConfigInvalidPort(value) => format!("Invalid database port '{}'", value),
        };

        write!(f, "{}", text)
    }
}
