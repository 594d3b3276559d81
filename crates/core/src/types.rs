/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (ledger entries, birth dates) carry no timezone.
pub type Date = chrono::NaiveDate;

/// Monetary amounts are stored as integer cents.
pub type Cents = i64;
