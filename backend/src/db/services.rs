//! High-level database service layer.
//!
//! This module provides repository-agnostic storage operations that work
//! with any implementation of the repository traits. Cross-cutting concerns
//! such as operation logging live here so they stay consistent regardless
//! of the storage backend.
//!
//! # Usage
//!
//! ```no_run
//! use terms_rust::db::{services, repositories::LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!
//!     let semesters = services::list_semesters(&repo).await?;
//!     println!("Found {} semesters", semesters.len());
//!
//!     Ok(())
//! }
//! ```

use log::info;

use super::repository::{RepositoryResult, TermRepository};
use crate::models::term::{NewQuarter, NewSemester, Quarter, Semester, SemesterId};

// ==================== Health & Connection ====================

/// Check if the backing store is healthy.
///
/// This is a simple pass-through to the repository's health check.
pub async fn health_check<R: TermRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Semester Operations ====================

/// List all semesters with full date ranges.
pub async fn list_semesters<R: TermRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<Semester>> {
    info!("Service layer: listing all semesters");
    repo.list_semesters().await
}

/// Retrieve a single semester by ID.
///
/// # Returns
/// * `Ok(Semester)` - The semester record
/// * `Err` if the semester is not found or the query fails
pub async fn get_semester<R: TermRepository + ?Sized>(
    repo: &R,
    semester_id: &SemesterId,
) -> RepositoryResult<Semester> {
    info!("Service layer: loading semester by id {}", semester_id);
    repo.get_semester(semester_id).await
}

/// Persist a validated semester and return the created record.
pub async fn create_semester<R: TermRepository + ?Sized>(
    repo: &R,
    semester: &NewSemester,
) -> RepositoryResult<Semester> {
    info!(
        "Service layer: storing semester '{}' ({} - {})",
        semester.title, semester.start_date, semester.end_date
    );
    repo.create_semester(semester).await
}

// ==================== Quarter Operations ====================

/// List all quarters across every semester.
pub async fn list_quarters<R: TermRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<Quarter>> {
    info!("Service layer: listing all quarters");
    repo.list_quarters().await
}

/// List the quarters attached to one semester.
pub async fn quarters_for_semester<R: TermRepository + ?Sized>(
    repo: &R,
    semester_id: &SemesterId,
) -> RepositoryResult<Vec<Quarter>> {
    repo.quarters_for_semester(semester_id).await
}

/// Persist a validated quarter and return the created record.
pub async fn create_quarter<R: TermRepository + ?Sized>(
    repo: &R,
    quarter: &NewQuarter,
) -> RepositoryResult<Quarter> {
    info!(
        "Service layer: storing quarter '{}' under semester {} ({} - {})",
        quarter.title, quarter.semester_id, quarter.start_date, quarter.end_date
    );
    repo.create_quarter(quarter).await
}
