//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Field names follow the admin frontend's camelCase wire spelling; dates are
//! exchanged as ISO-8601 `YYYY-MM-DD` strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::term::{Quarter, Semester, SemesterTerms};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Backing store connection status
    pub database: String,
}

/// Semester record for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterDto {
    pub id: String,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl From<Semester> for SemesterDto {
    fn from(semester: Semester) -> Self {
        Self {
            id: semester.id.0,
            title: semester.title,
            start_date: semester.start_date,
            end_date: semester.end_date,
        }
    }
}

/// Quarter record for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterDto {
    pub id: String,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub semester_id: String,
}

impl From<Quarter> for QuarterDto {
    fn from(quarter: Quarter) -> Self {
        Self {
            id: quarter.id.0,
            title: quarter.title,
            start_date: quarter.start_date,
            end_date: quarter.end_date,
            semester_id: quarter.semester_id.0,
        }
    }
}

/// Semester list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemesterListResponse {
    /// List of semesters
    pub semesters: Vec<SemesterDto>,
    /// Total count
    pub total: usize,
}

/// Quarter list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuarterListResponse {
    /// List of quarters
    pub quarters: Vec<QuarterDto>,
    /// Total count
    pub total: usize,
}

/// One semester with its quarters nested inside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemesterTermsDto {
    #[serde(flatten)]
    pub semester: SemesterDto,
    pub quarters: Vec<QuarterDto>,
}

impl From<SemesterTerms> for SemesterTermsDto {
    fn from(entry: SemesterTerms) -> Self {
        Self {
            semester: entry.semester.into(),
            quarters: entry.quarters.into_iter().map(Into::into).collect(),
        }
    }
}

/// Nested term catalog response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermCatalogResponse {
    /// Semesters with their quarters nested
    pub semesters: Vec<SemesterTermsDto>,
    /// Total semester count
    pub total: usize,
}

/// Request body for creating a new semester.
///
/// Dates arrive as strings so that empty form fields reach the validator as
/// "missing" rather than failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSemesterRequest {
    /// Title for the semester
    pub title: String,
    /// Start date (`YYYY-MM-DD`), may be empty or absent
    #[serde(default)]
    pub start_date: Option<String>,
    /// End date (`YYYY-MM-DD`), may be empty or absent
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Request body for creating a new quarter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuarterRequest {
    /// Title for the quarter
    pub title: String,
    /// Start date (`YYYY-MM-DD`), may be empty or absent
    #[serde(default)]
    pub start_date: Option<String>,
    /// End date (`YYYY-MM-DD`), may be empty or absent
    #[serde(default)]
    pub end_date: Option<String>,
    /// Parent semester ID
    pub semester_id: String,
}
