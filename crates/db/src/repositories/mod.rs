//! Repository structs, one per table.

mod student_repo;

pub use student_repo::StudentRepo;
