//! Quarter repository trait for CRUD operations.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::term::{NewQuarter, Quarter, SemesterId};

/// Repository trait for quarter storage operations.
///
/// Quarters are always scoped to a parent semester; like semesters they are
/// created and listed, never edited or deleted.
#[async_trait]
pub trait QuarterRepository: Send + Sync {
    /// List all quarters across every semester.
    ///
    /// # Returns
    /// * `Ok(Vec<Quarter>)` - Complete quarter listing
    /// * `Err(RepositoryError)` - If the operation fails
    async fn list_quarters(&self) -> RepositoryResult<Vec<Quarter>>;

    /// List the quarters attached to one semester, in storage order.
    ///
    /// An unknown semester ID yields an empty list, not an error; the
    /// listing is a filter, not a lookup.
    async fn quarters_for_semester(
        &self,
        semester_id: &SemesterId,
    ) -> RepositoryResult<Vec<Quarter>>;

    /// Persist a new quarter and return the created record.
    ///
    /// The payload is assumed to have passed scheduling validation; the
    /// repository assigns the identifier.
    ///
    /// # Returns
    /// * `Ok(Quarter)` - The created record, including its assigned ID
    /// * `Err(RepositoryError::NotFound)` - If the parent semester doesn't exist
    /// * `Err(RepositoryError)` - If the operation fails
    async fn create_quarter(&self, quarter: &NewQuarter) -> RepositoryResult<Quarter>;
}
