//! Term catalog assembly and submission orchestration.
//!
//! The catalog is loaded wholesale: semesters and quarters are fetched
//! concurrently and combined into one nested snapshot; if either fetch fails
//! the load fails as a unit and no partial data is exposed. Submissions
//! validate against a fresh snapshot, then create through the repository.
//! There is no optimistic update: callers re-fetch the catalog after a
//! confirmed create instead of merging locally.

use log::info;

use super::validation::{self, TermDraft, ValidationResult};
use crate::db::repository::{RepositoryError, TermRepository};
use crate::db::services as db_services;
use crate::models::term::{NewQuarter, NewSemester, Quarter, Semester, SemesterId, TermCatalog};

/// Error returned by catalog submissions.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The candidate violated one or more scheduling rules; nothing was
    /// stored. The result carries one message per violated rule.
    #[error("term rejected by validation ({} rule violation(s))", .0.len())]
    Rejected(ValidationResult),

    /// The backing store failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl CatalogError {
    /// The validation result for a rejection, if that is what this is.
    pub fn validation(&self) -> Option<&ValidationResult> {
        match self {
            CatalogError::Rejected(result) => Some(result),
            CatalogError::Repository(_) => None,
        }
    }
}

/// Load the full term catalog as one nested snapshot.
///
/// Semesters and quarters are fetched concurrently; both fetches must
/// succeed or the combined load fails.
pub async fn load_term_catalog<R: TermRepository + ?Sized>(
    repo: &R,
) -> Result<TermCatalog, RepositoryError> {
    info!("Catalog: loading term snapshot");

    let (semesters, quarters) = tokio::join!(
        db_services::list_semesters(repo),
        db_services::list_quarters(repo)
    );

    let catalog = TermCatalog::assemble(semesters?, quarters?);
    info!("Catalog: snapshot holds {} semester(s)", catalog.len());
    Ok(catalog)
}

/// Validate a candidate semester against the current catalog and create it.
///
/// On rejection the store is untouched and the keyed messages are returned
/// for inline display; the caller keeps the entered values and may retry.
pub async fn submit_semester<R: TermRepository + ?Sized>(
    repo: &R,
    draft: &TermDraft,
) -> Result<Semester, CatalogError> {
    let existing = db_services::list_semesters(repo).await?;

    let outcome = validation::validate_new_semester(draft, &existing);
    if !outcome.is_valid() {
        info!(
            "Catalog: semester '{}' rejected ({} rule violation(s))",
            draft.title,
            outcome.len()
        );
        return Err(CatalogError::Rejected(outcome));
    }

    // The presence rules just passed, so both dates are set.
    let (Some(start_date), Some(end_date)) = (draft.start_date, draft.end_date) else {
        return Err(RepositoryError::internal("validated draft missing dates").into());
    };

    let created = db_services::create_semester(
        repo,
        &NewSemester {
            title: draft.title.clone(),
            start_date,
            end_date,
        },
    )
    .await?;

    Ok(created)
}

/// Validate a candidate quarter against its parent semester and siblings,
/// then create it.
///
/// Parent lookup and sibling listing run concurrently; an unknown parent is
/// a repository error, not a validation failure.
pub async fn submit_quarter<R: TermRepository + ?Sized>(
    repo: &R,
    semester_id: &SemesterId,
    draft: &TermDraft,
) -> Result<Quarter, CatalogError> {
    let (parent, siblings) = tokio::join!(
        db_services::get_semester(repo, semester_id),
        db_services::quarters_for_semester(repo, semester_id)
    );
    let (parent, siblings) = (parent?, siblings?);

    let outcome = validation::validate_new_quarter(draft, &parent, &siblings);
    if !outcome.is_valid() {
        info!(
            "Catalog: quarter '{}' rejected under semester {} ({} rule violation(s))",
            draft.title,
            semester_id,
            outcome.len()
        );
        return Err(CatalogError::Rejected(outcome));
    }

    let (Some(start_date), Some(end_date)) = (draft.start_date, draft.end_date) else {
        return Err(RepositoryError::internal("validated draft missing dates").into());
    };

    let created = db_services::create_quarter(
        repo,
        &NewQuarter {
            title: draft.title.clone(),
            start_date,
            end_date,
            semester_id: semester_id.clone(),
        },
    )
    .await?;

    Ok(created)
}
