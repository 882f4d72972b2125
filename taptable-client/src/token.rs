//! Session token persistence
//!
//! The gateway keeps the auth token in a plain file under the data
//! directory so a login survives process restarts.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File-backed token storage
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Token storage rooted at the given data directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let path = base_dir.into().join("token");
        Self { path }
    }

    fn ensure_dir(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Persist the token.
    pub fn save(&self, token: &str) -> io::Result<()> {
        self.ensure_dir()?;
        fs::write(&self.path, token)
    }

    /// Load the persisted token, if any.
    pub fn load(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }
        fs::read_to_string(&self.path).ok()
    }

    /// Check whether a token is persisted.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Remove the persisted token. A missing file is not an error.
    pub fn delete(&self) -> io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// Path of the token file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
