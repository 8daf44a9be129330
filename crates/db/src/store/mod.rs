//! Backend-agnostic student storage.
//!
//! The API holds an `Arc<dyn StudentStore>`, so handlers and the service
//! layer never see which backend is configured. [`PgStudentStore`] is the
//! production backend; [`MemoryStudentStore`] keeps everything in process and
//! backs the HTTP test suite.

mod memory;
mod postgres;

use async_trait::async_trait;
use roster_core::types::DbId;

pub use memory::MemoryStudentStore;
pub use postgres::PgStudentStore;

use crate::error::StoreError;
use crate::models::student::{CreateStudent, Student, UpdateStudent};

/// Persistence operations for students.
///
/// Implementations must enforce email uniqueness atomically with the write
/// and report violations as [`StoreError::EmailTaken`]. Emails arrive
/// normalized and are compared verbatim.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// All students, ordered by id ascending.
    async fn list(&self) -> Result<Vec<Student>, StoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Student>, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, StoreError>;

    async fn create(&self, input: &CreateStudent) -> Result<Student, StoreError>;

    /// Returns `None` if no student has this id.
    async fn update(&self, id: DbId, input: &UpdateStudent)
        -> Result<Option<Student>, StoreError>;

    /// Returns `true` if a student was removed.
    async fn delete(&self, id: DbId) -> Result<bool, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}
