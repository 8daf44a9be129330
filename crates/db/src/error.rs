use roster_core::types::DbId;

/// Errors a [`StudentStore`](crate::store::StudentStore) backend can report.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Another student already owns this (normalized) email.
    #[error("email {0} is already taken")]
    EmailTaken(String),

    /// A client-supplied id collides with an existing student.
    #[error("student id {0} is already taken")]
    IdTaken(DbId),

    /// Every id up to `i64::MAX` has been handed out.
    #[error("no student ids left to assign")]
    IdsExhausted,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Name of the unique index guarding student emails.
pub const EMAIL_CONSTRAINT: &str = "uq_students_email";

/// Name of the primary key constraint on `students`.
pub const PKEY_CONSTRAINT: &str = "students_pkey";

/// PostgreSQL SQLSTATE for unique violations.
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL SQLSTATE raised when `nextval` runs past the sequence maximum.
const SEQUENCE_LIMIT_EXCEEDED: &str = "2200H";

impl StoreError {
    /// Translate a unique violation on `students` into the matching variant.
    ///
    /// `email` and `id` are the values the failed statement tried to write;
    /// they only end up in the error message. An exhausted id sequence becomes
    /// [`StoreError::IdsExhausted`]. Anything else is passed through as
    /// [`StoreError::Database`].
    pub fn from_write(err: sqlx::Error, email: Option<&str>, id: Option<DbId>) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(SEQUENCE_LIMIT_EXCEEDED) {
                return StoreError::IdsExhausted;
            }
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                match db_err.constraint() {
                    Some(EMAIL_CONSTRAINT) => {
                        return StoreError::EmailTaken(email.unwrap_or_default().to_string())
                    }
                    Some(PKEY_CONSTRAINT) => {
                        if let Some(id) = id {
                            return StoreError::IdTaken(id);
                        }
                    }
                    _ => {}
                }
            }
        }
        StoreError::Database(err)
    }
}
