//! Read-Only User Directory
//!
//! The dataset is parsed once at startup and never mutated afterwards, so
//! lookups need no locking and a load failure stops the process before it
//! starts answering requests.

use super::models::User;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Shared handle to the directory, safe to pass between request tasks
pub type SharedUserDirectory = Arc<UserDirectory>;

/// A failed dataset load
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to read user dataset {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse user dataset {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Immutable id-keyed view of the user dataset
#[derive(Debug)]
pub struct UserDirectory {
    users: HashMap<String, User>,
}

impl UserDirectory {
    /// Loads the dataset from a JSON array file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();

        let raw = std::fs::read_to_string(path).map_err(|source| DirectoryError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let records: Vec<User> =
            serde_json::from_str(&raw).map_err(|source| DirectoryError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        Ok(Self::from_records(records))
    }

    /// Builds a directory from already-parsed records.
    pub fn from_records(records: Vec<User>) -> Self {
        let users = records.into_iter().map(|u| (u.id.clone(), u)).collect();
        Self { users }
    }

    /// Looks up a user by id.
    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    /// Number of records in the dataset
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
