#[derive(Debug, Clone)]
pub enum Message {
    // === DATABASE MESSAGES ===
    DbConnected(String), // database name
    DbConnectionFailed(String),
    DbPingFailed,

    // === SCHEMA MESSAGES ===
    RefreshStarted(usize),           // entity count
    RefreshingEntity(String),        // table name
    RefreshCompleted,
    RefreshFailed(String, String),   // table name, error
    TableMissing(String),

    // === SEEDING MESSAGES ===
    SeedCompleted,
    SeedFailed(String), // username

    // === USER MESSAGES ===
    UserNotFound(String),      // username
    CalendarNotFoundForUser(String),

    // === APPOINTMENT MESSAGES ===
    AppointmentNotFound(i64),
    AppointmentsUpdated(usize),
    NoAppointmentsInWindow,
    OwnerKindInvalid(String),

    // === CONFIGURATION MESSAGES ===
    ConfigLoaded,
    ConfigInvalidPort(String),
}
