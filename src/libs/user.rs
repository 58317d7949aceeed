use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl NewUser {
    pub fn new(username: &str, first_name: &str, last_name: &str) -> Self {
        NewUser {
            username: username.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
}
