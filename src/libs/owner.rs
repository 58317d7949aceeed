//! Polymorphic owner discriminator for appointments.
//!
//! An appointment row belongs to exactly one calendar or one task list.
//! The `owner_type` column stores which, and only the two tags defined
//! here ever reach SQL: callers construct an [`OwnerKind`] up front and
//! every query binds [`OwnerKind::as_str`] instead of a free-form string.

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerKind {
    Calendar,
    TaskList,
}

impl OwnerKind {
    /// The tag stored in the `owner_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            OwnerKind::Calendar => "calendar",
            OwnerKind::TaskList => "task_list",
        }
    }
}

impl fmt::Display for OwnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OwnerKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "calendar" => Ok(OwnerKind::Calendar),
            "task_list" => Ok(OwnerKind::TaskList),
            other => Err(msg_error_anyhow!(Message::OwnerKindInvalid(other.to_string()))),
        }
    }
}
