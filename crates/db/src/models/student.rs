//! Student entity model and DTOs.

use roster_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A student row from the `students` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Student {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub date_of_birth: Date,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudent {
    /// Server-assigned when omitted.
    #[serde(default)]
    pub id: Option<DbId>,
    pub name: String,
    pub email: String,
    pub date_of_birth: Date,
}

/// DTO for updating a student. Only `Some` fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStudent {
    pub name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<Date>,
}

impl UpdateStudent {
    /// True when the update would not change anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.date_of_birth.is_none()
    }
}
