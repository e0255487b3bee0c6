//! Business logic services for the term catalog.
//!
//! - [`validation`]: pure scheduling rules for candidate terms
//! - [`catalog`]: snapshot assembly and validate-then-create orchestration

pub mod catalog;
pub mod validation;

pub use catalog::{load_term_catalog, submit_quarter, submit_semester, CatalogError};
pub use validation::{
    validate_new_quarter, validate_new_semester, TermDraft, TermField, ValidationResult,
};
