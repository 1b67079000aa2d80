//! One build-and-match cycle per submitted profile.
//!
//! ```text
//!  profile ──► doubled text ─┐
//!          └─► prefix table ─┴─► cyclic search ──► publisher ──► readers
//! ```
//!
//! The doubled text and prefix table are rebuilt on every cycle and dropped
//! afterwards; only the published offset (and, in reference mode, the stored
//! reference) outlive a cycle.

use tracing::{debug, info, warn};

use crate::config::{AlignConfig, MatchMode, NoMatchPolicy};
use crate::error::Result;
use crate::matching::{Alignment, align, self_align};
use crate::profile::Profile;
use crate::publisher::{OffsetPublisher, OffsetReader};

pub struct AlignmentEngine {
    config: AlignConfig,
    reference: Option<Profile>,
    publisher: OffsetPublisher,
    cycles: u64,
}

impl AlignmentEngine {
    pub fn new(config: AlignConfig) -> Self {
        Self {
            config,
            reference: None,
            publisher: OffsetPublisher::new(),
            cycles: 0,
        }
    }

    /// Create an engine that aligns against `reference` from the first cycle.
    pub fn with_reference(config: AlignConfig, reference: Profile) -> Self {
        let mut engine = Self::new(config);
        engine.reference = Some(reference);
        engine
    }

    pub fn config(&self) -> &AlignConfig {
        &self.config
    }

    pub fn reference(&self) -> Option<&Profile> {
        self.reference.as_ref()
    }

    /// Replace the stored reference. Only used in [`MatchMode::Reference`].
    pub fn set_reference(&mut self, reference: Profile) {
        info!("Reference profile replaced");
        self.reference = Some(reference);
    }

    pub fn clear_reference(&mut self) {
        self.reference = None;
    }

    /// Handle for reading the published offset from other threads.
    pub fn reader(&self) -> OffsetReader {
        self.publisher.reader()
    }

    /// Currently published offset.
    pub fn offset(&self) -> Alignment {
        self.publisher.current()
    }

    /// Number of completed cycles.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Run one full cycle on `profile` and publish the result.
    ///
    /// Returns the alignment computed in this cycle. With
    /// [`NoMatchPolicy::KeepLast`] that can differ from what is published.
    pub fn submit(&mut self, profile: Profile) -> Alignment {
        self.cycles += 1;

        let alignment = match self.config.mode {
            MatchMode::SelfAlign => self_align(&profile),
            MatchMode::Reference => match &self.reference {
                Some(reference) => align(reference, &profile),
                None => {
                    info!("No reference profile held, capturing cycle {} as reference", self.cycles);
                    self.reference = Some(profile);
                    Alignment::Offset(0)
                }
            },
        };

        self.publish(alignment);
        alignment
    }

    /// Validate raw samples and run a cycle. Anything other than exactly 360
    /// samples is rejected before any matching happens.
    pub fn submit_samples(&mut self, samples: &[i32]) -> Result<Alignment> {
        let profile = Profile::from_slice(samples)?;
        Ok(self.submit(profile))
    }

    fn publish(&mut self, alignment: Alignment) {
        match (alignment, self.config.on_no_match) {
            (Alignment::Offset(deg), _) => {
                debug!("Cycle {}: aligned at {} deg", self.cycles, deg);
                self.publisher.publish(alignment);
            }
            (Alignment::NoMatch, NoMatchPolicy::Invalidate) => {
                warn!("Cycle {}: no alignment found, offset invalidated", self.cycles);
                self.publisher.publish(Alignment::NoMatch);
            }
            (Alignment::NoMatch, NoMatchPolicy::KeepLast) => {
                warn!(
                    "Cycle {}: no alignment found, keeping {}",
                    self.cycles,
                    self.publisher.current()
                );
            }
        }
    }
}

impl Default for AlignmentEngine {
    fn default() -> Self {
        Self::new(AlignConfig::default())
    }
}
