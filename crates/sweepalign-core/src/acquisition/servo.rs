//! Servo pulse timing for the sweep.
//!
//! The servo is driven with a continuous pulse train of fixed 20 µs period.
//! Heading 0° is a 500 ns high pulse; a full turn adds 2000 ns.

use serde::Serialize;

use crate::profile::PROFILE_LEN;

/// High time at heading 0 (ns)
pub const MIN_HIGH_NS: u32 = 500;
/// Extra high time across a full turn (ns)
pub const HIGH_SPAN_NS: u32 = 2000;
/// Pulse period (ns)
pub const PERIOD_NS: u32 = 20_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServoPulse {
    pub high_ns: u32,
    pub low_ns: u32,
}

impl ServoPulse {
    /// Pulse for a heading in whole degrees. Headings wrap at 360.
    pub fn for_heading(heading: usize) -> Self {
        let heading = (heading % PROFILE_LEN) as u32;
        let extra = HIGH_SPAN_NS * heading / PROFILE_LEN as u32;
        Self {
            high_ns: MIN_HIGH_NS + extra,
            low_ns: PERIOD_NS - MIN_HIGH_NS - extra,
        }
    }

    pub fn period_ns(&self) -> u32 {
        self.high_ns + self.low_ns
    }
}
