//! # Terms Rust Backend
//!
//! Academic term catalog backend for the learning platform admin.
//!
//! This crate owns the Semester/Quarter term catalog: it loads the catalog
//! from a storage backend, validates candidate terms against the scheduling
//! rules before anything is persisted, and exposes the catalog as a REST API
//! via Axum for the admin frontend.
//!
//! ## Features
//!
//! - **Scheduling Validation**: pure, field-keyed validation of new Semesters
//!   and Quarters (date ordering, semester succession, quarter containment
//!   and sibling overlap)
//! - **Catalog Assembly**: wholesale snapshot loading with quarters nested
//!   under their parent semesters
//! - **Storage Backends**: in-memory repository for development and tests,
//!   optional remote repository speaking the upstream platform API
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: consolidated public types exchanged across layer boundaries
//! - [`models`]: domain models for semesters, quarters, and the catalog
//! - [`services`]: validation rules and catalog orchestration
//! - [`db`]: repository traits, implementations, factory, and configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!

#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
