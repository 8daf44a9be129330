/// Student ids are PostgreSQL BIGINT identity columns.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Dates of birth carry no time zone.
pub type Date = chrono::NaiveDate;
