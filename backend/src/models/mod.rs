//! Domain models for the term catalog.

pub mod term;

pub use term::{
    NewQuarter, NewSemester, Quarter, QuarterId, Semester, SemesterId, SemesterTerms, TermCatalog,
};
