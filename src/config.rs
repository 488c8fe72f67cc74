//! Runtime configuration
//!
//! Everything is read from environment variables at startup.

use std::path::PathBuf;

use thiserror::Error;

pub const DATABASE_PATH_VAR: &str = "FITPLAN_DATABASE_PATH";
pub const RNG_SEED_VAR: &str = "FITPLAN_RNG_SEED";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be an unsigned integer, got {value:?}")]
    InvalidSeed { var: &'static str, value: String },
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: PathBuf,
    /// Fixed seed for plan sampling; entropy-seeded when absent
    pub rng_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_path = std::env::var(DATABASE_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_database_path());

        let rng_seed = match std::env::var(RNG_SEED_VAR) {
            Ok(raw) => Some(parse_seed(&raw)?),
            Err(_) => None,
        };

        Ok(Self {
            database_path,
            rng_seed,
        })
    }
}

fn parse_seed(raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidSeed {
        var: RNG_SEED_VAR,
        value: raw.to_string(),
    })
}

/// `<project>/data/fitplan.db`, resolved relative to the executable
pub fn default_database_path() -> PathBuf {
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    // Go up from target/release or target/debug to project root
    if path.ends_with("release") || path.ends_with("debug") {
        if let Some(parent) = path.parent() {
            if let Some(grandparent) = parent.parent() {
                path = grandparent.to_path_buf();
            }
        }
    }

    path.push("data");
    path.push("fitplan.db");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed(" 42 ").unwrap(), 42);
        assert!(matches!(
            parse_seed("forty-two"),
            Err(ConfigError::InvalidSeed { .. })
        ));
    }

    #[test]
    fn test_default_database_path_file_name() {
        let path = default_database_path();
        assert!(path.ends_with("data/fitplan.db"));
    }
}
