//! Stored reference profiles.
//!
//! A reference is the sweep every later sweep is aligned against. It is kept
//! on disk as pretty-printed JSON so it survives restarts.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::profile::Profile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceProfile {
    /// Free-form name, e.g. the site or dock the sweep was taken at
    pub label: String,
    pub captured_at: DateTime<Utc>,
    pub profile: Profile,
}

impl ReferenceProfile {
    /// Wrap a profile captured now.
    pub fn new<S: Into<String>>(label: S, profile: Profile) -> Self {
        Self {
            label: label.into(),
            captured_at: Utc::now(),
            profile,
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let reference: ReferenceProfile = serde_json::from_str(&content)?;
        debug!(
            "Loaded reference '{}' captured at {} from {}",
            reference.label,
            reference.captured_at,
            path.display()
        );
        Ok(reference)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        info!("Saved reference '{}' to {}", self.label, path.as_ref().display());
        Ok(())
    }
}
