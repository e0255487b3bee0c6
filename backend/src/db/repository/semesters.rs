//! Core semester repository trait for CRUD operations.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::term::{NewSemester, Semester, SemesterId};

/// Repository trait for semester storage operations.
///
/// Semesters are created and listed, never edited or deleted; the storage
/// surface is deliberately small.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait SemesterRepository: Send + Sync {
    /// Check if the backing store is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if the store is healthy
    /// - `Ok(false)` if the store is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// List all semesters in the order the backing store returns them.
    ///
    /// # Returns
    /// * `Ok(Vec<Semester>)` - Complete semester listing
    /// * `Err(RepositoryError)` - If the operation fails
    async fn list_semesters(&self) -> RepositoryResult<Vec<Semester>>;

    /// Retrieve a single semester by ID.
    ///
    /// # Returns
    /// * `Ok(Semester)` - The semester record
    /// * `Err(RepositoryError::NotFound)` - If the semester doesn't exist
    /// * `Err(RepositoryError)` - If the operation fails
    async fn get_semester(&self, semester_id: &SemesterId) -> RepositoryResult<Semester>;

    /// Persist a new semester and return the created record.
    ///
    /// The payload is assumed to have passed scheduling validation; the
    /// repository assigns the identifier.
    ///
    /// # Returns
    /// * `Ok(Semester)` - The created record, including its assigned ID
    /// * `Err(RepositoryError)` - If the operation fails
    async fn create_semester(&self, semester: &NewSemester) -> RepositoryResult<Semester>;
}
