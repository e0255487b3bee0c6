//! In-memory local repository implementation.
//!
//! This module provides a local implementation of the term repository traits
//! suitable for unit testing and local development. All data is stored in
//! memory using Vec structures, preserving creation order for deterministic,
//! isolated execution.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::db::repository::{
    QuarterRepository, RepositoryError, RepositoryResult, SemesterRepository,
};
use crate::models::term::{NewQuarter, NewSemester, Quarter, QuarterId, Semester, SemesterId};

/// In-memory local repository.
///
/// Stores semesters and quarters in insertion order and assigns sequential
/// string identifiers, making it ideal for unit tests and local development
/// that need isolation and speed.
///
/// # Example
/// ```ignore
/// let repo = LocalRepository::new();
/// let created = repo.create_semester(&new_semester).await.unwrap();
/// assert_eq!(created.id.value(), "sem-1");
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    semesters: Vec<Semester>,
    quarters: Vec<Quarter>,

    // ID counters
    next_semester_id: u64,
    next_quarter_id: u64,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            semesters: Vec::new(),
            quarters: Vec::new(),
            next_semester_id: 1,
            next_quarter_id: 1,
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Insert a semester record verbatim, bypassing ID assignment.
    ///
    /// Test setup helper for fixtures that need fixed identifiers.
    pub fn seed_semester(&self, semester: Semester) {
        let mut data = self.data.write().unwrap();
        data.semesters.push(semester);
    }

    /// Insert a quarter record verbatim, bypassing ID assignment.
    pub fn seed_quarter(&self, quarter: Quarter) {
        let mut data = self.data.write().unwrap();
        data.quarters.push(quarter);
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Get the number of semesters stored.
    pub fn semester_count(&self) -> usize {
        self.data.read().unwrap().semesters.len()
    }

    /// Get the number of quarters stored.
    pub fn quarter_count(&self) -> usize {
        self.data.read().unwrap().quarters.len()
    }

    /// Check if a semester exists.
    pub fn has_semester(&self, semester_id: &SemesterId) -> bool {
        self.data
            .read()
            .unwrap()
            .semesters
            .iter()
            .any(|semester| semester.id == *semester_id)
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self) -> RepositoryResult<()> {
        let data = self.data.read().unwrap();
        if !data.is_healthy {
            return Err(RepositoryError::connection(
                "Term store is not healthy".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SemesterRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        let data = self.data.read().unwrap();
        Ok(data.is_healthy)
    }

    async fn list_semesters(&self) -> RepositoryResult<Vec<Semester>> {
        self.check_health()?;

        let data = self.data.read().unwrap();
        Ok(data.semesters.clone())
    }

    async fn get_semester(&self, semester_id: &SemesterId) -> RepositoryResult<Semester> {
        self.check_health()?;

        let data = self.data.read().unwrap();
        data.semesters
            .iter()
            .find(|semester| semester.id == *semester_id)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::not_found(format!("Semester {} not found", semester_id))
            })
    }

    async fn create_semester(&self, semester: &NewSemester) -> RepositoryResult<Semester> {
        self.check_health()?;

        let mut data = self.data.write().unwrap();
        let id = SemesterId::new(format!("sem-{}", data.next_semester_id));
        data.next_semester_id += 1;

        let record = Semester {
            id,
            title: semester.title.clone(),
            start_date: semester.start_date,
            end_date: semester.end_date,
        };
        data.semesters.push(record.clone());

        Ok(record)
    }
}

#[async_trait]
impl QuarterRepository for LocalRepository {
    async fn list_quarters(&self) -> RepositoryResult<Vec<Quarter>> {
        self.check_health()?;

        let data = self.data.read().unwrap();
        Ok(data.quarters.clone())
    }

    async fn quarters_for_semester(
        &self,
        semester_id: &SemesterId,
    ) -> RepositoryResult<Vec<Quarter>> {
        self.check_health()?;

        let data = self.data.read().unwrap();
        Ok(data
            .quarters
            .iter()
            .filter(|quarter| quarter.semester_id == *semester_id)
            .cloned()
            .collect())
    }

    async fn create_quarter(&self, quarter: &NewQuarter) -> RepositoryResult<Quarter> {
        self.check_health()?;

        let mut data = self.data.write().unwrap();

        // Referential check: the parent must already be stored.
        if !data
            .semesters
            .iter()
            .any(|semester| semester.id == quarter.semester_id)
        {
            return Err(RepositoryError::not_found(format!(
                "Semester {} not found",
                quarter.semester_id
            )));
        }

        let id = QuarterId::new(format!("qtr-{}", data.next_quarter_id));
        data.next_quarter_id += 1;

        let record = Quarter {
            id,
            title: quarter.title.clone(),
            start_date: quarter.start_date,
            end_date: quarter.end_date,
            semester_id: quarter.semester_id.clone(),
        };
        data.quarters.push(record.clone());

        Ok(record)
    }
}
