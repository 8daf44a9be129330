//! Repository for the `students` table.

use roster_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::{CreateStudent, Student, UpdateStudent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, date_of_birth, created_at, updated_at";

/// Provides CRUD operations for students.
///
/// Inputs are expected to be normalized already (see `roster_core::student`).
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student, returning the created row.
    ///
    /// When `input.id` is set the row is inserted with that id and the
    /// identity sequence is moved past it so later server-assigned ids do not
    /// collide.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let Some(id) = input.id else {
            let query = format!(
                "INSERT INTO students (name, email, date_of_birth)
                 VALUES ($1, $2, $3)
                 RETURNING {COLUMNS}"
            );
            return sqlx::query_as::<_, Student>(&query)
                .bind(&input.name)
                .bind(&input.email)
                .bind(input.date_of_birth)
                .fetch_one(pool)
                .await;
        };

        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO students (id, name, email, date_of_birth)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let student = sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.date_of_birth)
            .fetch_one(&mut *tx)
            .await?;
        sqlx::query(
            "SELECT setval(pg_get_serial_sequence('students', 'id'),
                           GREATEST((SELECT MAX(id) FROM students), 1))",
        )
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        tracing::debug!(student_id = id, "Inserted student with client-supplied id");
        Ok(student)
    }

    /// Find a student by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a student by normalized email.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE email = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all students ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students ORDER BY id ASC");
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }

    /// Update a student. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudent,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                date_of_birth = COALESCE($4, date_of_birth)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.date_of_birth)
            .fetch_optional(pool)
            .await
    }

    /// Delete a student by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
