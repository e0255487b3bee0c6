//! Remote repository implementation backed by the upstream platform API.
//!
//! The institution-wide term catalog is owned by the platform's REST backend;
//! this repository delegates every operation to it. Endpoint shapes follow
//! the admin frontend contract: list endpoints wrap their payload in an
//! envelope (`{"semesters": [...]}`, `{"quarters": [...]}`), create endpoints
//! return the created record. Dates arrive as full ISO-8601 timestamps and
//! are truncated to their `YYYY-MM-DD` prefix.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::db::repository::{
    ErrorContext, QuarterRepository, RepositoryError, RepositoryResult, SemesterRepository,
};
use crate::models::term::{
    parse_iso_date, NewQuarter, NewSemester, Quarter, QuarterId, Semester, SemesterId,
};

/// Connection settings for the upstream term API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the platform API, without a trailing slash.
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

pub(crate) fn default_timeout_secs() -> u64 {
    30
}

impl RemoteConfig {
    /// Load connection settings from environment variables.
    ///
    /// Reads `TERMS_API_URL` (required) and `TERMS_API_TIMEOUT_SECS`
    /// (optional, default 30).
    pub fn from_env() -> RepositoryResult<Self> {
        let base_url = std::env::var("TERMS_API_URL").map_err(|_| {
            RepositoryError::configuration(
                "TERMS_API_URL must be set for the remote repository".to_string(),
            )
        })?;

        let timeout_secs = std::env::var("TERMS_API_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(default_timeout_secs);

        Ok(Self {
            base_url,
            timeout_secs,
        })
    }
}

/// Repository delegating to the upstream platform REST API.
pub struct RemoteRepository {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteRepository {
    /// Build a repository with a dedicated HTTP client.
    pub fn new(config: &RemoteConfig) -> RepositoryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                RepositoryError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

// =============================================================================
// Wire types
// =============================================================================

#[derive(Debug, Deserialize)]
struct SemesterListEnvelope {
    semesters: Vec<WireSemester>,
}

#[derive(Debug, Deserialize)]
struct QuarterListEnvelope {
    quarters: Vec<WireQuarter>,
}

#[derive(Debug, Deserialize)]
struct WireSemester {
    #[serde(rename = "_id")]
    id: String,
    title: String,
    #[serde(rename = "startDate")]
    start_date: String,
    #[serde(rename = "endDate")]
    end_date: String,
}

#[derive(Debug, Deserialize)]
struct WireQuarter {
    #[serde(rename = "_id")]
    id: String,
    title: String,
    #[serde(rename = "startDate")]
    start_date: String,
    #[serde(rename = "endDate")]
    end_date: String,
    #[serde(rename = "semester")]
    semester_id: String,
}

#[derive(Debug, Serialize)]
struct CreateSemesterBody<'a> {
    title: &'a str,
    #[serde(rename = "startDate")]
    start_date: NaiveDate,
    #[serde(rename = "endDate")]
    end_date: NaiveDate,
}

#[derive(Debug, Serialize)]
struct CreateQuarterBody<'a> {
    title: &'a str,
    #[serde(rename = "startDate")]
    start_date: NaiveDate,
    #[serde(rename = "endDate")]
    end_date: NaiveDate,
    semester: &'a str,
}

fn parse_date_field(raw: &str, field: &str) -> RepositoryResult<NaiveDate> {
    parse_iso_date(raw).map_err(|e| {
        RepositoryError::validation_with_context(
            format!("Unparseable {} '{}'", field, raw),
            ErrorContext::new("decode_term").with_details(e.to_string()),
        )
    })
}

impl WireSemester {
    fn into_semester(self) -> RepositoryResult<Semester> {
        Ok(Semester {
            id: SemesterId::new(self.id),
            title: self.title,
            start_date: parse_date_field(&self.start_date, "startDate")?,
            end_date: parse_date_field(&self.end_date, "endDate")?,
        })
    }
}

impl WireQuarter {
    fn into_quarter(self) -> RepositoryResult<Quarter> {
        Ok(Quarter {
            id: QuarterId::new(self.id),
            title: self.title,
            start_date: parse_date_field(&self.start_date, "startDate")?,
            end_date: parse_date_field(&self.end_date, "endDate")?,
            semester_id: SemesterId::new(self.semester_id),
        })
    }
}

// =============================================================================
// Trait implementations
// =============================================================================

#[async_trait]
impl SemesterRepository for RemoteRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        // The upstream API has no dedicated health endpoint; probing the
        // semester listing doubles as the reachability check.
        match self.client.get(self.url("/semester/get")).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(e) if e.is_timeout() || e.is_connect() => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn list_semesters(&self) -> RepositoryResult<Vec<Semester>> {
        let envelope: SemesterListEnvelope = self
            .client
            .get(self.url("/semester/get"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        envelope
            .semesters
            .into_iter()
            .map(WireSemester::into_semester)
            .collect()
    }

    async fn get_semester(&self, semester_id: &SemesterId) -> RepositoryResult<Semester> {
        // The upstream API only exposes list endpoints; single lookups
        // filter client-side, exactly as the admin frontend does.
        self.list_semesters()
            .await?
            .into_iter()
            .find(|semester| semester.id == *semester_id)
            .ok_or_else(|| {
                RepositoryError::not_found(format!("Semester {} not found", semester_id))
            })
    }

    async fn create_semester(&self, semester: &NewSemester) -> RepositoryResult<Semester> {
        let body = CreateSemesterBody {
            title: &semester.title,
            start_date: semester.start_date,
            end_date: semester.end_date,
        };

        let created: WireSemester = self
            .client
            .post(self.url("/semester/create"))
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        created.into_semester()
    }
}

#[async_trait]
impl QuarterRepository for RemoteRepository {
    async fn list_quarters(&self) -> RepositoryResult<Vec<Quarter>> {
        let envelope: QuarterListEnvelope = self
            .client
            .get(self.url("/quarter/get"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        envelope
            .quarters
            .into_iter()
            .map(WireQuarter::into_quarter)
            .collect()
    }

    async fn quarters_for_semester(
        &self,
        semester_id: &SemesterId,
    ) -> RepositoryResult<Vec<Quarter>> {
        Ok(self
            .list_quarters()
            .await?
            .into_iter()
            .filter(|quarter| quarter.semester_id == *semester_id)
            .collect())
    }

    async fn create_quarter(&self, quarter: &NewQuarter) -> RepositoryResult<Quarter> {
        let body = CreateQuarterBody {
            title: &quarter.title,
            start_date: quarter.start_date,
            end_date: quarter.end_date,
            semester: quarter.semester_id.value(),
        };

        let created: WireQuarter = self
            .client
            .post(self.url("/quarter/create"))
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        created.into_quarter()
    }
}
