//! Storage module for the term catalog.
//!
//! This module provides abstractions for storage operations via the
//! Repository pattern, allowing different backends to be swapped easily.
//!
//! # Architecture
//!
//! The storage module follows a layered architecture:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, catalog services)          │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs)                             │
//! │  - Operation logging                                     │
//! │  - Cross-cutting concerns                                │
//! └───────────────────┬─────────────────────────────────────┘
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/) - Abstract Interface    │
//! │  - SemesterRepository / QuarterRepository                │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴────────────────┐
//!     │                                 │
//! ┌───▼──────────────┐     ┌──────────▼──────────────┐
//! │ Remote Repository │     │ Local Repository        │
//! │ (platform API)    │     │ (in-memory)             │
//! └──────────────────┘     └─────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! **For new code, use the service layer:**
//! ```ignore
//! use terms_rust::db::{services, factory::RepositoryFactory};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = RepositoryFactory::from_env()?;
//!     let semesters = services::list_semesters(repo.as_ref()).await?;
//!     Ok(())
//! }
//! ```

#[cfg(not(any(feature = "remote-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod services;

// Remote connection settings are colocated with the repository implementation.
#[cfg(feature = "remote-repo")]
pub use repositories::remote::RemoteConfig;
#[cfg(not(feature = "remote-repo"))]
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    _private: (),
}

// ==================== Service Layer (Recommended for new code) ====================
// Use these high-level functions that work with any repository implementation

pub use services::{
    create_quarter, create_semester, get_semester, health_check, list_quarters, list_semesters,
    quarters_for_semester,
};

// ==================== Repository Pattern Exports ====================

pub use factory::{RepositoryFactory, RepositoryType};
pub use repo_config::RepositoryConfig;
pub use repositories::LocalRepository;
#[cfg(feature = "remote-repo")]
pub use repositories::RemoteRepository;
pub use repository::{
    ErrorContext, QuarterRepository, RepositoryError, RepositoryResult, SemesterRepository,
    TermRepository,
};

use anyhow::{Context, Result};
use std::sync::{Arc, OnceLock};

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn TermRepository>> = OnceLock::new();

fn create_selected_repository() -> RepositoryResult<Arc<dyn TermRepository>> {
    match RepositoryType::from_env() {
        #[cfg(feature = "remote-repo")]
        RepositoryType::Remote => {
            let config = RemoteConfig::from_env()?;
            let remote = RepositoryFactory::create_remote(&config)?;
            Ok(remote as Arc<dyn TermRepository>)
        }
        #[cfg(not(feature = "remote-repo"))]
        RepositoryType::Remote => Err(RepositoryError::configuration(
            "Remote repository feature not enabled".to_string(),
        )),
        RepositoryType::Local => Ok(RepositoryFactory::create_local()),
    }
}

/// Initialize the global repository singleton for the selected backend.
pub fn init_repository() -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let repo = create_selected_repository().map_err(|e| anyhow::Error::msg(e.to_string()))?;
    let _ = REPOSITORY.set(repo);
    Ok(())
}

/// Get a reference to the global repository instance.
pub fn get_repository() -> Result<&'static Arc<dyn TermRepository>> {
    if REPOSITORY.get().is_none() {
        let _ = init_repository();
    }

    REPOSITORY
        .get()
        .context("Term store not initialized. Call init_repository() first.")
}
