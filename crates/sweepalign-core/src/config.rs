//! Configuration for the alignment engine and the sweep.
//!
//! Loaded from TOML:
//!
//! ```toml
//! [align]
//! mode = "reference"       # or "self-align"
//! on_no_match = "invalidate" # or "keep-last"
//! queue_depth = 3
//!
//! [sweep]
//! settle_ms = 50
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{Error, Result};

/// Depth of the profile queue between acquisition and matching
pub const DEFAULT_QUEUE_DEPTH: usize = 3;
/// Time the servo is given to settle on each heading
pub const DEFAULT_SETTLE_MS: u64 = 50;

/// What each submitted profile is matched against.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum MatchMode {
    /// Match each profile against its own double. Always publishes 0 for a
    /// valid profile; kept for compatibility with the legacy firmware.
    SelfAlign,
    /// Match each profile against the stored reference. The first profile
    /// becomes the reference when none is set.
    #[default]
    Reference,
}

/// What happens to the published offset when a cycle finds no match.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum NoMatchPolicy {
    /// Publish the no-match sentinel
    #[default]
    Invalidate,
    /// Leave the previous offset in place
    KeepLast,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignConfig {
    pub mode: MatchMode,
    pub on_no_match: NoMatchPolicy,
    pub queue_depth: usize,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            mode: MatchMode::default(),
            on_no_match: NoMatchPolicy::default(),
            queue_depth: DEFAULT_QUEUE_DEPTH,
        }
    }
}

impl AlignConfig {
    pub fn builder() -> AlignConfigBuilder {
        AlignConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.queue_depth == 0 {
            return Err(Error::InvalidConfig(
                "queue_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for AlignConfig
#[derive(Debug, Clone, Default)]
pub struct AlignConfigBuilder {
    mode: Option<MatchMode>,
    on_no_match: Option<NoMatchPolicy>,
    queue_depth: Option<usize>,
}

impl AlignConfigBuilder {
    pub fn mode(mut self, mode: MatchMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn on_no_match(mut self, policy: NoMatchPolicy) -> Self {
        self.on_no_match = Some(policy);
        self
    }

    pub fn queue_depth(mut self, depth: usize) -> Self {
        self.queue_depth = Some(depth);
        self
    }

    pub fn build(self) -> AlignConfig {
        let default = AlignConfig::default();
        AlignConfig {
            mode: self.mode.unwrap_or(default.mode),
            on_no_match: self.on_no_match.unwrap_or(default.on_no_match),
            queue_depth: self.queue_depth.unwrap_or(default.queue_depth),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub settle_ms: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            settle_ms: DEFAULT_SETTLE_MS,
        }
    }
}

impl SweepConfig {
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub align: AlignConfig,
    pub sweep: SweepConfig,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.align.validate()?;
        Ok(config)
    }
}
