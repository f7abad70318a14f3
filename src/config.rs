//! Environment configuration for the database package.
//!
//! Values come from the process environment, optionally seeded from a local
//! dotfile. Two candidate files are tried in order and the first one that
//! loads wins; variables already set in the process are never overwritten
//! (`dotenvy` load semantics). Validation is fatal at startup: there is no
//! degraded mode without a database URL.

use std::path::Path;

use tracing::debug;

use crate::error::ConfigError;

/// Candidate dotfile locations, nearest first.
const ENV_FILE_CANDIDATES: [&str; 2] = [".env", "../.env"];

/// Required environment values for the database package.
#[derive(Debug, Clone)]
pub struct DatabaseEnv {
    pub database_url: String,
    pub trigger_secret_key: String,
    pub trigger_project_id: String,
}

impl DatabaseEnv {
    /// Load configuration, seeding the environment from the default
    /// candidate files.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&ENV_FILE_CANDIDATES)
    }

    /// Load configuration, seeding the environment from the first candidate
    /// file that parses. Already-set variables keep their values.
    pub fn load_from<P: AsRef<Path>>(candidates: &[P]) -> Result<Self, ConfigError> {
        for candidate in candidates {
            match dotenvy::from_path(candidate.as_ref()) {
                Ok(()) => {
                    debug!(path = %candidate.as_ref().display(), "loaded env file");
                    break;
                }
                Err(err) => {
                    debug!(
                        path = %candidate.as_ref().display(),
                        %err,
                        "env file not loaded, trying next candidate"
                    );
                }
            }
        }

        let database_url = required_nonempty("DATABASE_URL")?;
        let trigger_secret_key = required("TRIGGER_SECRET_KEY")?;
        let trigger_project_id = required("TRIGGER_PROJECT_ID")?;

        Ok(Self {
            database_url,
            trigger_secret_key,
            trigger_project_id,
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingRequired(name))
}

fn required_nonempty(name: &'static str) -> Result<String, ConfigError> {
    let value = required(name)?;
    if value.is_empty() {
        return Err(ConfigError::MissingRequired(name));
    }
    Ok(value)
}
