/// Primary keys are opaque TEXT strings issued by the delegated auth
/// subsystem, not database-generated integers.
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
