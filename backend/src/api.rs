//! Public API surface for the term catalog backend.
//!
//! This file consolidates the types exchanged across layer boundaries.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::term::{
    NewQuarter, NewSemester, Quarter, QuarterId, Semester, SemesterId, SemesterTerms, TermCatalog,
};

pub use crate::services::validation::{TermDraft, TermField, ValidationResult};
