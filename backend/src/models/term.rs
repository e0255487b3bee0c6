//! Semester and Quarter records and the nested catalog snapshot.
//!
//! Terms carry calendar dates only (no time-of-day). Date intervals are
//! closed: a term occupies every day from `start_date` through `end_date`
//! inclusive, so two terms conflict when they share any calendar day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Semester identifier (backend-assigned, opaque).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SemesterId(pub String);

/// Quarter identifier (backend-assigned, opaque).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QuarterId(pub String);

impl SemesterId {
    pub fn new(value: impl Into<String>) -> Self {
        SemesterId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl QuarterId {
    pub fn new(value: impl Into<String>) -> Self {
        QuarterId(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SemesterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for QuarterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Top-level academic term with a fixed date range.
///
/// Immutable once created; the catalog has no edit or delete path for
/// semesters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    pub id: SemesterId,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Sub-term nested within exactly one semester's date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quarter {
    pub id: QuarterId,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub semester_id: SemesterId,
}

/// Payload for creating a semester, after validation has passed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSemester {
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Payload for creating a quarter, after validation has passed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewQuarter {
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub semester_id: SemesterId,
}

/// One semester together with the quarters attached to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemesterTerms {
    pub semester: Semester,
    pub quarters: Vec<Quarter>,
}

/// Wholesale snapshot of the term catalog.
///
/// Assembled from full semester and quarter listings; never updated
/// incrementally. Callers re-assemble after each confirmed write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermCatalog {
    pub semesters: Vec<SemesterTerms>,
}

impl TermCatalog {
    /// Group quarters under their parent semesters, preserving the order
    /// both listings arrived in. Quarters referencing an unknown semester
    /// are dropped.
    pub fn assemble(semesters: Vec<Semester>, quarters: Vec<Quarter>) -> Self {
        let semesters = semesters
            .into_iter()
            .map(|semester| {
                let quarters = quarters
                    .iter()
                    .filter(|quarter| quarter.semester_id == semester.id)
                    .cloned()
                    .collect();
                SemesterTerms { semester, quarters }
            })
            .collect();

        Self { semesters }
    }

    pub fn len(&self) -> usize {
        self.semesters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.semesters.is_empty()
    }

    pub fn find_semester(&self, semester_id: &SemesterId) -> Option<&SemesterTerms> {
        self.semesters
            .iter()
            .find(|entry| entry.semester.id == *semester_id)
    }

    /// The chronologically latest semester, by start date.
    ///
    /// Backends do not guarantee response order, so this is derived rather
    /// than read off the end of the list.
    pub fn latest_semester(&self) -> Option<&Semester> {
        self.semesters
            .iter()
            .map(|entry| &entry.semester)
            .max_by_key(|semester| semester.start_date)
    }
}

/// Parse an ISO-8601 date string, tolerating a trailing time component.
///
/// The upstream API exchanges full timestamps; only the leading `YYYY-MM-DD`
/// portion is meaningful for term boundaries.
pub fn parse_iso_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn semester(id: &str, title: &str, start: NaiveDate, end: NaiveDate) -> Semester {
        Semester {
            id: SemesterId::new(id),
            title: title.to_string(),
            start_date: start,
            end_date: end,
        }
    }

    fn quarter(id: &str, semester_id: &str, start: NaiveDate, end: NaiveDate) -> Quarter {
        Quarter {
            id: QuarterId::new(id),
            title: id.to_string(),
            start_date: start,
            end_date: end,
            semester_id: SemesterId::new(semester_id),
        }
    }

    #[test]
    fn test_parse_iso_date_bare() {
        assert_eq!(
            parse_iso_date("2024-09-01").unwrap(),
            date(2024, 9, 1)
        );
    }

    #[test]
    fn test_parse_iso_date_truncates_timestamp() {
        assert_eq!(
            parse_iso_date("2024-12-15T00:00:00.000Z").unwrap(),
            date(2024, 12, 15)
        );
    }

    #[test]
    fn test_parse_iso_date_rejects_garbage() {
        assert!(parse_iso_date("not-a-date").is_err());
        assert!(parse_iso_date("").is_err());
    }

    #[test]
    fn test_assemble_groups_quarters_by_parent() {
        let semesters = vec![
            semester("sem-1", "Fall", date(2024, 9, 1), date(2024, 12, 15)),
            semester("sem-2", "Spring", date(2025, 1, 10), date(2025, 5, 20)),
        ];
        let quarters = vec![
            quarter("qtr-1", "sem-1", date(2024, 9, 1), date(2024, 10, 15)),
            quarter("qtr-2", "sem-2", date(2025, 1, 10), date(2025, 3, 1)),
            quarter("qtr-3", "sem-1", date(2024, 10, 16), date(2024, 12, 15)),
        ];

        let catalog = TermCatalog::assemble(semesters, quarters);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.semesters[0].quarters.len(), 2);
        assert_eq!(catalog.semesters[0].quarters[0].id.value(), "qtr-1");
        assert_eq!(catalog.semesters[0].quarters[1].id.value(), "qtr-3");
        assert_eq!(catalog.semesters[1].quarters.len(), 1);
    }

    #[test]
    fn test_assemble_drops_orphan_quarters() {
        let semesters = vec![semester("sem-1", "Fall", date(2024, 9, 1), date(2024, 12, 15))];
        let quarters = vec![quarter("qtr-1", "sem-9", date(2024, 9, 1), date(2024, 10, 1))];

        let catalog = TermCatalog::assemble(semesters, quarters);

        assert_eq!(catalog.semesters[0].quarters.len(), 0);
    }

    #[test]
    fn test_latest_semester_ignores_insertion_order() {
        let semesters = vec![
            semester("sem-2", "Spring", date(2025, 1, 10), date(2025, 5, 20)),
            semester("sem-1", "Fall", date(2024, 9, 1), date(2024, 12, 15)),
        ];
        let catalog = TermCatalog::assemble(semesters, vec![]);

        let latest = catalog.latest_semester().unwrap();
        assert_eq!(latest.id.value(), "sem-2");
    }

    #[test]
    fn test_find_semester() {
        let semesters = vec![semester("sem-1", "Fall", date(2024, 9, 1), date(2024, 12, 15))];
        let catalog = TermCatalog::assemble(semesters, vec![]);

        assert!(catalog.find_semester(&SemesterId::new("sem-1")).is_some());
        assert!(catalog.find_semester(&SemesterId::new("sem-2")).is_none());
    }

    #[test]
    fn test_semester_id_display() {
        let id = SemesterId::new("sem-42");
        assert_eq!(format!("{}", id), "sem-42");
        assert_eq!(id.value(), "sem-42");
    }
}
