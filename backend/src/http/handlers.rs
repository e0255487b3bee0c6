//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! catalog service layer for business logic.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;

use super::dto::{
    CreateQuarterRequest, CreateSemesterRequest, HealthResponse, QuarterDto, QuarterListResponse,
    SemesterDto, SemesterListResponse, TermCatalogResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;
use crate::models::term::{parse_iso_date, SemesterId};
use crate::services::catalog;
use crate::services::validation::TermDraft;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Map a form date field onto the draft representation.
///
/// Absent and empty values are "missing" (the validator reports them);
/// anything else must parse as a calendar date.
fn parse_optional_date(raw: Option<&str>, field: &str) -> Result<Option<NaiveDate>, AppError> {
    match raw.map(str::trim) {
        None => Ok(None),
        Some("") => Ok(None),
        Some(value) => parse_iso_date(value).map(Some).map_err(|_| {
            AppError::BadRequest(format!("Invalid {}: '{}' is not a calendar date", field, value))
        }),
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the backing
/// store is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Semesters
// =============================================================================

/// GET /v1/semesters
///
/// List all semesters in the catalog.
pub async fn list_semesters(State(state): State<AppState>) -> HandlerResult<SemesterListResponse> {
    let semesters = db_services::list_semesters(state.repository.as_ref()).await?;

    let semester_dtos: Vec<SemesterDto> = semesters.into_iter().map(Into::into).collect();
    let total = semester_dtos.len();

    Ok(Json(SemesterListResponse {
        semesters: semester_dtos,
        total,
    }))
}

/// POST /v1/semesters
///
/// Validate and create a new semester. Rejections return 422 with the
/// field-keyed messages; the store is untouched.
pub async fn create_semester(
    State(state): State<AppState>,
    Json(request): Json<CreateSemesterRequest>,
) -> Result<(StatusCode, Json<SemesterDto>), AppError> {
    let draft = TermDraft {
        title: request.title,
        start_date: parse_optional_date(request.start_date.as_deref(), "startDate")?,
        end_date: parse_optional_date(request.end_date.as_deref(), "endDate")?,
    };

    let created = catalog::submit_semester(state.repository.as_ref(), &draft).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

// =============================================================================
// Quarters
// =============================================================================

/// GET /v1/quarters
///
/// List all quarters across every semester.
pub async fn list_quarters(State(state): State<AppState>) -> HandlerResult<QuarterListResponse> {
    let quarters = db_services::list_quarters(state.repository.as_ref()).await?;

    let quarter_dtos: Vec<QuarterDto> = quarters.into_iter().map(Into::into).collect();
    let total = quarter_dtos.len();

    Ok(Json(QuarterListResponse {
        quarters: quarter_dtos,
        total,
    }))
}

/// POST /v1/quarters
///
/// Validate and create a new quarter under its parent semester.
pub async fn create_quarter(
    State(state): State<AppState>,
    Json(request): Json<CreateQuarterRequest>,
) -> Result<(StatusCode, Json<QuarterDto>), AppError> {
    let semester_id = SemesterId::new(request.semester_id);
    let draft = TermDraft {
        title: request.title,
        start_date: parse_optional_date(request.start_date.as_deref(), "startDate")?,
        end_date: parse_optional_date(request.end_date.as_deref(), "endDate")?,
    };

    let created =
        catalog::submit_quarter(state.repository.as_ref(), &semester_id, &draft).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

// =============================================================================
// Nested Catalog
// =============================================================================

/// GET /v1/terms
///
/// Get the full catalog as one nested snapshot, quarters grouped under their
/// parent semesters. Fails as a unit if either underlying listing fails.
pub async fn get_terms(State(state): State<AppState>) -> HandlerResult<TermCatalogResponse> {
    let catalog = catalog::load_term_catalog(state.repository.as_ref()).await?;

    let total = catalog.len();
    let semesters = catalog.semesters.into_iter().map(Into::into).collect();

    Ok(Json(TermCatalogResponse { semesters, total }))
}
