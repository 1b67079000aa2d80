//! Test doubles for the acquisition seams.

use super::{RangeSensor, ServoPulse, SweepActuator};
use crate::error::{Error, Result};
use crate::profile::{Profile, RAW_SAMPLE_LEN, encode_sample};

/// Sensor that replays a fixed profile, optionally failing at one heading.
pub struct MockSensor {
    samples: Vec<[u8; RAW_SAMPLE_LEN]>,
    fail_at: Option<usize>,
}

impl MockSensor {
    /// # Panics
    ///
    /// Panics if a sample does not fit in 24 bits.
    pub fn from_profile(profile: &Profile) -> Self {
        let samples = profile
            .as_slice()
            .iter()
            .map(|&v| encode_sample(v).expect("mock sample out of range"))
            .collect();
        Self {
            samples,
            fail_at: None,
        }
    }

    pub fn fail_at(mut self, heading: usize) -> Self {
        self.fail_at = Some(heading);
        self
    }
}

impl RangeSensor for MockSensor {
    fn read_sample(&mut self, heading: usize) -> Result<[u8; RAW_SAMPLE_LEN]> {
        if self.fail_at == Some(heading) {
            return Err(Error::SensorReadFailed {
                heading,
                message: "mock failure".to_string(),
            });
        }
        Ok(self.samples[heading])
    }
}

/// Actuator that records every call, optionally failing to point at one heading.
#[derive(Debug, Default)]
pub struct MockActuator {
    pub pulses: Vec<(usize, ServoPulse)>,
    pub releases: usize,
    fail_at: Option<usize>,
}

impl MockActuator {
    pub fn fail_at(heading: usize) -> Self {
        Self {
            fail_at: Some(heading),
            ..Self::default()
        }
    }
}

impl SweepActuator for MockActuator {
    fn point(&mut self, heading: usize, pulse: ServoPulse) -> Result<()> {
        if self.fail_at == Some(heading) {
            return Err(Error::ActuatorFailed {
                heading,
                message: "servo stalled".to_string(),
            });
        }
        self.pulses.push((heading, pulse));
        Ok(())
    }

    fn release(&mut self) -> Result<()> {
        self.releases += 1;
        Ok(())
    }
}
