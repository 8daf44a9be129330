//! Student business rules on top of a [`StudentStore`].
//!
//! Handlers only translate HTTP to and from these calls. Every check that
//! decides between 404, 409 and success lives here:
//!
//! - create: id uniqueness, then email uniqueness, then field rules
//! - update: existence, email uniqueness against *other* students, then
//!   field rules
//! - delete: existence
//!
//! A taken email is a 409 whatever else the payload holds, so the lookup
//! runs on the canonical email before any field is validated.
//!
//! The pre-checks give clear error messages; the store still enforces
//! uniqueness on write, and a violation it reports maps to the same 409.

use std::sync::Arc;

use chrono::Utc;
use roster_core::error::CoreError;
use roster_core::student::{
    canonical_email, normalize_email, validate_date_of_birth, validate_name,
};
use roster_core::types::{Date, DbId};
use roster_db::models::student::{CreateStudent, Student, UpdateStudent};
use roster_db::store::StudentStore;

use crate::error::AppResult;

#[derive(Clone)]
pub struct StudentService {
    store: Arc<dyn StudentStore>,
}

impl StudentService {
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Student>> {
        Ok(self.store.list().await?)
    }

    pub async fn get(&self, id: DbId) -> AppResult<Student> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::student_not_found(id).into())
    }

    pub async fn create(&self, input: &CreateStudent) -> AppResult<Student> {
        let email = canonical_email(&input.email);

        if let Some(id) = input.id {
            if self.store.find_by_id(id).await?.is_some() {
                return Err(CoreError::Conflict(format!(
                    "Student with id {id} already exists"
                ))
                .into());
            }
        }
        if self.store.find_by_email(&email).await?.is_some() {
            return Err(email_taken(&email));
        }

        let input = CreateStudent {
            id: input.id,
            name: validate_name(&input.name)?,
            email: normalize_email(&email)?,
            date_of_birth: input.date_of_birth,
        };
        validate_date_of_birth(input.date_of_birth, today())?;

        Ok(self.store.create(&input).await?)
    }

    pub async fn update(&self, id: DbId, input: &UpdateStudent) -> AppResult<Student> {
        let current = self.get(id).await?;

        let email = input.email.as_deref().map(canonical_email);
        if let Some(email) = email.as_deref().filter(|e| *e != current.email) {
            if let Some(owner) = self.store.find_by_email(email).await? {
                if owner.id != id {
                    return Err(email_taken(email));
                }
            }
        }

        let input = UpdateStudent {
            name: input.name.as_deref().map(validate_name).transpose()?,
            email: email.as_deref().map(normalize_email).transpose()?,
            date_of_birth: input.date_of_birth,
        };
        if let Some(dob) = input.date_of_birth {
            validate_date_of_birth(dob, today())?;
        }
        if input.is_empty() {
            return Ok(current);
        }

        self.store
            .update(id, &input)
            .await?
            .ok_or_else(|| CoreError::student_not_found(id).into())
    }

    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        if self.store.delete(id).await? {
            Ok(())
        } else {
            Err(CoreError::student_not_found(id).into())
        }
    }

    /// True when the backing store answers.
    pub async fn is_healthy(&self) -> bool {
        self.store.health_check().await.is_ok()
    }
}

fn today() -> Date {
    Utc::now().date_naive()
}

fn email_taken(email: &str) -> crate::error::AppError {
    CoreError::Conflict(format!("email {email} is already taken")).into()
}
