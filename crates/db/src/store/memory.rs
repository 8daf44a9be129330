use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use roster_core::types::DbId;
use tokio::sync::RwLock;

use super::StudentStore;
use crate::error::StoreError;
use crate::models::student::{CreateStudent, Student, UpdateStudent};

#[derive(Debug)]
struct Inner {
    students: BTreeMap<DbId, Student>,
    /// `None` once a student holds `DbId::MAX`.
    next_id: Option<DbId>,
}

impl Inner {
    fn email_owner(&self, email: &str) -> Option<DbId> {
        self.students
            .values()
            .find(|s| s.email == email)
            .map(|s| s.id)
    }
}

/// In-process [`StudentStore`]. Uniqueness checks and writes happen under a
/// single write lock, so concurrent writers cannot both claim an email.
#[derive(Debug)]
pub struct MemoryStudentStore {
    inner: RwLock<Inner>,
}

impl Default for MemoryStudentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStudentStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                students: BTreeMap::new(),
                next_id: Some(1),
            }),
        }
    }
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn list(&self) -> Result<Vec<Student>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.students.values().cloned().collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Student>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.students.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Student>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .email_owner(email)
            .and_then(|id| inner.students.get(&id).cloned()))
    }

    async fn create(&self, input: &CreateStudent) -> Result<Student, StoreError> {
        let mut inner = self.inner.write().await;

        if inner.email_owner(&input.email).is_some() {
            return Err(StoreError::EmailTaken(input.email.clone()));
        }

        let id = match input.id {
            Some(id) if inner.students.contains_key(&id) => {
                return Err(StoreError::IdTaken(id));
            }
            Some(id) => id,
            None => inner.next_id.ok_or(StoreError::IdsExhausted)?,
        };
        inner.next_id = match (inner.next_id, id.checked_add(1)) {
            (Some(next), Some(after)) => Some(next.max(after)),
            _ => None,
        };

        let now = Utc::now();
        let student = Student {
            id,
            name: input.name.clone(),
            email: input.email.clone(),
            date_of_birth: input.date_of_birth,
            created_at: now,
            updated_at: now,
        };
        inner.students.insert(id, student.clone());
        Ok(student)
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateStudent,
    ) -> Result<Option<Student>, StoreError> {
        let mut inner = self.inner.write().await;

        if let Some(email) = &input.email {
            if inner.email_owner(email).is_some_and(|owner| owner != id) {
                return Err(StoreError::EmailTaken(email.clone()));
            }
        }

        let Some(student) = inner.students.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = &input.name {
            student.name = name.clone();
        }
        if let Some(email) = &input.email {
            student.email = email.clone();
        }
        if let Some(dob) = input.date_of_birth {
            student.date_of_birth = dob;
        }
        student.updated_at = Utc::now();
        Ok(Some(student.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        Ok(inner.students.remove(&id).is_some())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
