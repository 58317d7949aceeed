//! # Agenda - Calendar Scheduling Data Layer
//!
//! A PostgreSQL data-access layer for a calendar/scheduling domain:
//! users, calendars, appointments, task lists and attendee relationships.
//!
//! ## Features
//!
//! - **Schema Management**: Ordered drop-and-recreate of every entity table
//! - **Data Seeding**: User → calendar → appointment graphs inserted in one transaction
//! - **Range Queries**: Attendee search joined across users, calendars, appointments and the join table
//! - **Bulk Updates**: Windowed appointment shift with description rewrite
//! - **Polymorphic Owners**: Appointments owned by a calendar or a task list via a validated discriminator
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
//! SchemaManager::new(&db).refresh(Entity::ALL).await?;
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod libs;
