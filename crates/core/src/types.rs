/// User and profile primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Widget and list-item keys are UUIDv7 hex strings minted at insert time.
pub type WidgetId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
