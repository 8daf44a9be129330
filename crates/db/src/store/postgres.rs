use async_trait::async_trait;
use roster_core::types::DbId;

use super::StudentStore;
use crate::error::StoreError;
use crate::models::student::{CreateStudent, Student, UpdateStudent};
use crate::repositories::StudentRepo;
use crate::DbPool;

/// [`StudentStore`] backed by PostgreSQL through [`StudentRepo`].
#[derive(Clone)]
pub struct PgStudentStore {
    pool: DbPool,
}

impl PgStudentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentStore for PgStudentStore {
    async fn list(&self) -> Result<Vec<Student>, StoreError> {
        Ok(StudentRepo::list(&self.pool).await?)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Student>, StoreError> {
        Ok(StudentRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, StoreError> {
        Ok(StudentRepo::find_by_email(&self.pool, email).await?)
    }

    async fn create(&self, input: &CreateStudent) -> Result<Student, StoreError> {
        StudentRepo::create(&self.pool, input)
            .await
            .map_err(|e| StoreError::from_write(e, Some(input.email.as_str()), input.id))
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateStudent,
    ) -> Result<Option<Student>, StoreError> {
        StudentRepo::update(&self.pool, id, input)
            .await
            .map_err(|e| StoreError::from_write(e, input.email.as_deref(), None))
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(StudentRepo::delete(&self.pool, id).await?)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
