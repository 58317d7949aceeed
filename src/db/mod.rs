//! Database layer for the agenda data-access crate.
//!
//! A data persistence layer built on PostgreSQL through sqlx, offering
//! typed operations for every entity in the calendar/scheduling domain.
//! The connection pool is constructed once from [`crate::libs::config`]
//! and passed explicitly into each repository; no module holds global
//! state.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Connection pool and schema refresh
//! - **Scheduling Entities**: Users, calendars, appointments, task lists
//! - **Attendee Relationships**: Many-to-many join between appointments and users
//! - **Seeding**: Whole user → calendar → appointment graphs in one transaction
//!
//! ## Usage
//!
//! ```rust,no_run
//! use agenda::db::db::Db;
//! use agenda::db::migrations::{Entity, SchemaManager};
//! use agenda::db::users::Users;
//! use agenda::libs::config::DbConfig;
//! use agenda::libs::user::NewUser;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let db = Db::connect(&DbConfig::from_env()).await?;
//! SchemaManager::new(&db).refresh(Entity::ALL).await?;
//!
//! let users = Users::new(&db);
//! users.insert(&NewUser::new("younesious", "Younes", "Mahmoudi")).await?;
//! # Ok(())
//! # }
//! ```

/// Core database connection module.
///
/// Provides the `Db` struct that owns the PostgreSQL connection pool
/// shared by every repository.
pub mod db;

/// Schema refresh system.
///
/// Drops and recreates entity tables in declaration order and provides
/// existence/row-count probes used by callers and tests.
pub mod migrations;

/// Seeding helpers.
///
/// Inserts a whole user → calendar → appointment graph inside one
/// explicit transaction.
pub mod seed;

/// User repository.
///
/// CRUD for users plus the range-bounded attendee search joined across
/// users, calendars, appointments and the attendee join table.
pub mod users;

/// Calendar repository.
///
/// Calendars belong to one user and own appointments through the
/// polymorphic owner columns.
pub mod calendars;

/// Appointment repository.
///
/// Appointment CRUD, attendee management and the windowed
/// shift-and-rewrite update helper.
pub mod appointments;

/// Task list repository.
///
/// The second possible appointment owner; exercises the `task_list`
/// discriminator tag.
pub mod task_lists;
