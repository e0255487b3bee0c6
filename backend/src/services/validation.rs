//! Scheduling validation for candidate Semesters and Quarters.
//!
//! These rules run before anything is sent to the storage backend. They are
//! pure functions over an in-memory snapshot of the existing terms and
//! produce a field-keyed map of human-readable messages, so the admin form
//! can display every violated rule at once next to the matching input.
//!
//! Validation rules include:
//! - Required fields (title, start date, end date)
//! - Date ordering (start strictly before end)
//! - Semester succession (a new semester starts after the latest one ends)
//! - Quarter containment within the parent semester's date range
//! - Quarter overlap against sibling quarters of the same semester
//!
//! Date intervals are closed: a term occupies every day from its start date
//! through its end date inclusive, and two terms overlap when they share any
//! calendar day. Boundary-touching counts as overlap for semesters and
//! quarters alike.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::term::{Quarter, Semester};

/// Form field or rule a validation message is keyed by.
///
/// Keys serialize in the wire spelling used by the admin frontend, so a
/// result map can be rendered next to the matching form inputs directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum TermField {
    Title,
    StartDate,
    EndDate,
    Date,
    Overlap,
    Range,
}

impl TermField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TermField::Title => "title",
            TermField::StartDate => "startDate",
            TermField::EndDate => "endDate",
            TermField::Date => "date",
            TermField::Overlap => "overlap",
            TermField::Range => "range",
        }
    }
}

/// Field-keyed validation errors for one candidate term.
///
/// An empty result means the candidate may be submitted. At most one message
/// is recorded per field key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationResult {
    errors: BTreeMap<TermField, String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn contains(&self, field: TermField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn message(&self, field: TermField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<TermField, String> {
        &self.errors
    }

    /// Record a violation against a field key.
    pub fn reject(&mut self, field: TermField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }
}

/// Candidate term as captured by the admin form, before any rule has run.
///
/// Dates are optional because the form submits empty fields; the validator
/// reports missing ones instead of refusing the input outright.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TermDraft {
    pub title: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl TermDraft {
    pub fn new(
        title: impl Into<String>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            title: title.into(),
            start_date,
            end_date,
        }
    }
}

/// Closed-interval overlap: the intervals share at least one calendar day.
fn intervals_overlap(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    a_start <= b_end && a_end >= b_start
}

fn check_required_fields(draft: &TermDraft, result: &mut ValidationResult) {
    if draft.title.trim().is_empty() {
        result.reject(TermField::Title, "Title is required");
    }
    if draft.start_date.is_none() {
        result.reject(TermField::StartDate, "Start date is required");
    }
    if draft.end_date.is_none() {
        result.reject(TermField::EndDate, "End date is required");
    }
}

/// Decide whether a candidate semester may be persisted.
///
/// All applicable rules are checked and every violation is recorded under its
/// own key; the checks do not short-circuit between rule categories. The
/// succession rule compares against the chronologically latest existing
/// semester (by start date), not the last fetched element; backends do not
/// guarantee response order. An empty `existing` list skips the succession
/// rule entirely, so the first semester ever created is unconstrained.
///
/// Pure and side-effect free; the caller owns the subsequent create call.
pub fn validate_new_semester(draft: &TermDraft, existing: &[Semester]) -> ValidationResult {
    let mut result = ValidationResult::new();

    check_required_fields(draft, &mut result);

    if let (Some(start), Some(end)) = (draft.start_date, draft.end_date) {
        if start >= end {
            result.reject(TermField::Date, "Start date must be before end date");
        }

        if let Some(latest) = existing.iter().max_by_key(|semester| semester.start_date) {
            if start <= latest.end_date {
                result.reject(
                    TermField::Overlap,
                    format!("New semester must start after {}", latest.end_date),
                );
            }
        }
    }

    result
}

/// Decide whether a candidate quarter may be persisted under `parent`.
///
/// Containment is checked with boundary dates inclusive: a quarter may start
/// on the day its semester starts and end on the day it ends. The sibling
/// scan stops at the first conflicting quarter, so at most one overlap
/// message is produced naming that quarter.
///
/// Pure and side-effect free.
pub fn validate_new_quarter(
    draft: &TermDraft,
    parent: &Semester,
    siblings: &[Quarter],
) -> ValidationResult {
    let mut result = ValidationResult::new();

    check_required_fields(draft, &mut result);

    if let (Some(start), Some(end)) = (draft.start_date, draft.end_date) {
        if start >= end {
            result.reject(TermField::Date, "Start date must be before end date");
        }

        if start < parent.start_date || end > parent.end_date {
            result.reject(
                TermField::Range,
                format!(
                    "Quarter must be within semester ({} - {})",
                    parent.start_date, parent.end_date
                ),
            );
        }

        for quarter in siblings {
            if intervals_overlap(start, end, quarter.start_date, quarter.end_date) {
                result.reject(
                    TermField::Overlap,
                    format!(
                        "Quarter overlaps with \"{}\" ({} - {})",
                        quarter.title, quarter.start_date, quarter.end_date
                    ),
                );
                break;
            }
        }
    }

    result
}
