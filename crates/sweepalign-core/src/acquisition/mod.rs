//! Sweep acquisition seams.
//!
//! The hardware side of a sweep (ranging sensor on a bus, servo on a PWM
//! channel) sits behind two traits so the sweep sequencing can run against
//! real devices, captured data, or test doubles:
//!
//! - [`RangeSensor`]: one raw 3-byte range sample per call
//! - [`SweepActuator`]: point the sensor using a [`ServoPulse`]
//!
//! [`Sweeper`] visits every heading in order and assembles a
//! [`CompletedSweep`].

#[cfg(test)]
pub mod mock;
mod servo;
mod sweeper;

pub use servo::*;
pub use sweeper::*;

use crate::error::Result;
use crate::profile::RAW_SAMPLE_LEN;

/// Source of raw range samples.
pub trait RangeSensor {
    /// Read one sample for `heading`.
    fn read_sample(&mut self, heading: usize) -> Result<[u8; RAW_SAMPLE_LEN]>;
}

/// Something that can point the sensor.
pub trait SweepActuator {
    /// Start driving `pulse` for `heading`.
    fn point(&mut self, heading: usize, pulse: ServoPulse) -> Result<()>;

    /// Stop driving the servo.
    fn release(&mut self) -> Result<()>;
}

/// Actuator for sensors that need no pointing, e.g. replayed captures.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedMount;

impl SweepActuator for FixedMount {
    fn point(&mut self, _heading: usize, _pulse: ServoPulse) -> Result<()> {
        Ok(())
    }

    fn release(&mut self) -> Result<()> {
        Ok(())
    }
}
