//! Repository factory for dependency injection.
//!
//! This module provides utilities for creating and configuring repository
//! instances based on runtime configuration.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::repo_config::RepositoryConfig;
use super::repositories::LocalRepository;
#[cfg(feature = "remote-repo")]
use super::repositories::RemoteRepository;
use super::repository::{RepositoryError, RepositoryResult, TermRepository};
use super::RemoteConfig;

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// Upstream platform REST API
    Remote,
    /// In-memory local repository
    Local,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string.
    ///
    /// # Arguments
    /// * `s` - String representation ("remote", "local")
    ///
    /// # Returns
    /// * `Ok(RepositoryType)` if valid
    /// * `Err` if invalid
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "remote" | "api" => Ok(Self::Remote),
            "local" => Ok(Self::Local),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from environment variable.
    ///
    /// Reads `REPOSITORY_TYPE`. Defaults to Remote if an upstream API URL is
    /// present, otherwise Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("REPOSITORY_TYPE") {
            return val.parse().unwrap_or(Self::Local);
        }

        if std::env::var("TERMS_API_URL").is_ok() {
            Self::Remote
        } else {
            Self::Local
        }
    }
}

/// Repository factory for creating repository instances.
///
/// This factory provides a centralized way to create repository instances
/// with proper initialization and configuration.
///
/// # Example
/// ```ignore
/// use terms_rust::db::{RepositoryFactory, RepositoryType};
///
/// let local_repo = RepositoryFactory::create_local();
/// let repo = RepositoryFactory::create(RepositoryType::Local, None)?;
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// # Arguments
    /// * `repo_type` - Type of repository to create
    /// * `remote_config` - Optional connection settings (required for Remote)
    ///
    /// # Returns
    /// * `Ok(Arc<dyn TermRepository>)` - Boxed repository instance
    /// * `Err(RepositoryError)` - If creation fails
    pub fn create(
        repo_type: RepositoryType,
        remote_config: Option<&RemoteConfig>,
    ) -> RepositoryResult<Arc<dyn TermRepository>> {
        match repo_type {
            RepositoryType::Remote => {
                #[cfg(feature = "remote-repo")]
                {
                    let config = remote_config.ok_or_else(|| {
                        RepositoryError::configuration(
                            "Remote repository requires RemoteConfig".to_string(),
                        )
                    })?;
                    let remote = Self::create_remote(config)?;
                    Ok(remote as Arc<dyn TermRepository>)
                }
                #[cfg(not(feature = "remote-repo"))]
                {
                    let _ = remote_config;
                    Err(RepositoryError::configuration(
                        "Remote repository feature not enabled".to_string(),
                    ))
                }
            }
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }

    /// Create a remote repository against the upstream platform API.
    ///
    /// # Arguments
    /// * `config` - Connection settings
    ///
    /// # Returns
    /// * `Ok(Arc<RemoteRepository>)` - Remote repository instance
    /// * `Err(RepositoryError)` - If initialization fails
    #[cfg(feature = "remote-repo")]
    pub fn create_remote(config: &RemoteConfig) -> RepositoryResult<Arc<RemoteRepository>> {
        let repo = RemoteRepository::new(config)?;
        Ok(Arc::new(repo))
    }

    /// Create an in-memory local repository.
    ///
    /// # Returns
    /// Boxed local repository instance
    pub fn create_local() -> Arc<dyn TermRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create repository from environment configuration.
    ///
    /// Reads `REPOSITORY_TYPE` to determine which repository to create.
    /// Defaults to Remote if `TERMS_API_URL` is set, otherwise Local.
    ///
    /// # Returns
    /// * `Ok(Arc<dyn TermRepository>)` - Repository instance
    /// * `Err(RepositoryError)` - If creation fails
    pub fn from_env() -> RepositoryResult<Arc<dyn TermRepository>> {
        match RepositoryType::from_env() {
            RepositoryType::Remote => {
                #[cfg(feature = "remote-repo")]
                {
                    let config = RemoteConfig::from_env()?;
                    let remote = Self::create_remote(&config)?;
                    Ok(remote as Arc<dyn TermRepository>)
                }
                #[cfg(not(feature = "remote-repo"))]
                {
                    Err(RepositoryError::configuration(
                        "Remote repository feature not enabled".to_string(),
                    ))
                }
            }
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }

    /// Create repository from a TOML configuration file.
    ///
    /// # Arguments
    /// * `config_path` - Path to the repository.toml configuration file
    ///
    /// # Returns
    /// * `Ok(Arc<dyn TermRepository>)` - Repository instance
    /// * `Err(RepositoryError)` - If creation fails
    pub fn from_config_file<P: AsRef<Path>>(
        config_path: P,
    ) -> RepositoryResult<Arc<dyn TermRepository>> {
        let config = RepositoryConfig::from_file(config_path)?;
        Self::from_repository_config(&config)
    }

    /// Create repository from the default configuration file location.
    ///
    /// Searches for `repository.toml` in standard locations and creates
    /// the appropriate repository instance.
    ///
    /// # Returns
    /// * `Ok(Arc<dyn TermRepository>)` - Repository instance
    /// * `Err(RepositoryError)` - If creation fails
    pub fn from_default_config() -> RepositoryResult<Arc<dyn TermRepository>> {
        let config = RepositoryConfig::from_default_location()?;
        Self::from_repository_config(&config)
    }

    /// Create repository from a RepositoryConfig instance.
    fn from_repository_config(
        config: &RepositoryConfig,
    ) -> RepositoryResult<Arc<dyn TermRepository>> {
        let repo_type = config.repository_type().map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })?;

        match repo_type {
            RepositoryType::Remote => {
                #[cfg(feature = "remote-repo")]
                {
                    let remote_config = config.to_remote_config()?.ok_or_else(|| {
                        RepositoryError::configuration(
                            "Remote repository requires connection settings".to_string(),
                        )
                    })?;
                    let remote = Self::create_remote(&remote_config)?;
                    Ok(remote as Arc<dyn TermRepository>)
                }
                #[cfg(not(feature = "remote-repo"))]
                {
                    Err(RepositoryError::configuration(
                        "Remote repository feature not enabled".to_string(),
                    ))
                }
            }
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_type_from_str() {
        assert_eq!(
            RepositoryType::from_str("local").unwrap(),
            RepositoryType::Local
        );
        assert_eq!(
            RepositoryType::from_str("remote").unwrap(),
            RepositoryType::Remote
        );
        assert_eq!(
            RepositoryType::from_str("Api").unwrap(),
            RepositoryType::Remote
        );
        assert!(RepositoryType::from_str("invalid").is_err());
    }

    #[tokio::test]
    async fn test_create_local_repository() {
        let repo = RepositoryFactory::create_local();
        assert!(repo.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_create_by_type_local() {
        let repo = RepositoryFactory::create(RepositoryType::Local, None).unwrap();
        assert!(repo.health_check().await.unwrap());
    }
}
