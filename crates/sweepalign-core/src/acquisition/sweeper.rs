use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use super::{RangeSensor, ServoPulse, SweepActuator};
use crate::config::SweepConfig;
use crate::error::{Error, Result};
use crate::profile::{PROFILE_LEN, Profile, RAW_FRAME_LEN, decode_sample};
use crate::worker::ProfileSender;

/// One finished sweep, decoded and raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedSweep {
    pub profile: Profile,
    /// Samples as read, for the serial link
    pub raw: Vec<u8>,
}

pub struct Sweeper<S, A> {
    sensor: S,
    actuator: A,
    settle: Duration,
}

impl<S: RangeSensor, A: SweepActuator> Sweeper<S, A> {
    pub fn new(sensor: S, actuator: A, config: &SweepConfig) -> Self {
        Self::with_settle(sensor, actuator, config.settle())
    }

    pub fn with_settle(sensor: S, actuator: A, settle: Duration) -> Self {
        Self {
            sensor,
            actuator,
            settle,
        }
    }

    /// Visit headings 0..360 in order, taking one sample at each.
    ///
    /// The servo is released after every sample, including when the read
    /// fails.
    pub fn sweep(&mut self) -> Result<CompletedSweep> {
        let mut raw = Vec::with_capacity(RAW_FRAME_LEN);
        let mut samples = [0; PROFILE_LEN];

        for (heading, slot) in samples.iter_mut().enumerate() {
            self.actuator
                .point(heading, ServoPulse::for_heading(heading))?;
            if !self.settle.is_zero() {
                thread::sleep(self.settle);
            }

            let read = self.sensor.read_sample(heading);
            self.actuator.release()?;
            let bytes = read?;

            raw.extend_from_slice(&bytes);
            *slot = decode_sample(bytes);
        }

        debug!("Sweep complete ({} bytes)", raw.len());
        Ok(CompletedSweep {
            profile: Profile::new(samples),
            raw,
        })
    }

    /// Sweep and hand the profile to the alignment worker without blocking.
    ///
    /// A full queue drops the profile; the sweep itself is still returned so
    /// it can be forwarded elsewhere.
    pub fn sweep_and_submit(&mut self, sender: &ProfileSender) -> Result<CompletedSweep> {
        let sweep = self.sweep()?;
        match sender.try_submit(sweep.profile.clone()) {
            Ok(()) => {}
            Err(Error::QueueFull) => warn!("Alignment queue full, dropping sweep"),
            Err(e) => return Err(e),
        }
        Ok(sweep)
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn into_parts(self) -> (S, A) {
        (self.sensor, self.actuator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acquisition::FixedMount;
    use crate::acquisition::mock::{MockActuator, MockSensor};
    use crate::config::AlignConfig;
    use crate::engine::AlignmentEngine;
    use crate::matching::Alignment;
    use crate::worker::AlignmentWorker;
    use std::time::Instant;

    fn profile() -> Profile {
        Profile::from_fn(|i| (i as i32) * 1000 + 17)
    }

    #[test]
    fn test_sweep_collects_every_heading() {
        let sensor = MockSensor::from_profile(&profile());
        let mut sweeper = Sweeper::with_settle(sensor, MockActuator::default(), Duration::ZERO);

        let sweep = sweeper.sweep().unwrap();
        assert_eq!(sweep.profile, profile());
        assert_eq!(sweep.raw, profile().to_raw_frame().unwrap());

        let (_, actuator) = sweeper.into_parts();
        assert_eq!(actuator.pulses.len(), PROFILE_LEN);
        assert_eq!(actuator.pulses[90], (90, ServoPulse::for_heading(90)));
        assert_eq!(actuator.releases, PROFILE_LEN);
    }

    #[test]
    fn test_sensor_failure_releases_servo() {
        let sensor = MockSensor::from_profile(&profile()).fail_at(10);
        let mut sweeper = Sweeper::with_settle(sensor, MockActuator::default(), Duration::ZERO);

        let err = sweeper.sweep().unwrap_err();
        assert!(matches!(err, Error::SensorReadFailed { heading: 10, .. }));

        let (_, actuator) = sweeper.into_parts();
        assert_eq!(actuator.pulses.len(), 11);
        assert_eq!(actuator.releases, 11);
    }

    #[test]
    fn test_actuator_failure_stops_sweep() {
        let sensor = MockSensor::from_profile(&profile());
        let mut sweeper = Sweeper::with_settle(sensor, MockActuator::fail_at(5), Duration::ZERO);

        let err = sweeper.sweep().unwrap_err();
        assert!(matches!(err, Error::ActuatorFailed { heading: 5, .. }));

        let (_, actuator) = sweeper.into_parts();
        assert_eq!(actuator.pulses.len(), 5);
        assert_eq!(actuator.releases, 5);
    }

    #[test]
    fn test_settle_from_config() {
        let config = SweepConfig { settle_ms: 1 };
        let sensor = MockSensor::from_profile(&profile());
        let mut sweeper = Sweeper::new(sensor, FixedMount, &config);

        let start = Instant::now();
        sweeper.sweep().unwrap();
        assert!(start.elapsed() >= Duration::from_millis(PROFILE_LEN as u64));

        let sensor = MockSensor::from_profile(&profile());
        let mut sweeper = Sweeper::new(sensor, FixedMount, &SweepConfig { settle_ms: 0 });
        assert_eq!(sweeper.sweep().unwrap().profile, profile());
    }

    #[test]
    fn test_sweep_and_submit() {
        let engine = AlignmentEngine::with_reference(AlignConfig::default(), profile());
        let (worker, reports) = AlignmentWorker::spawn_with_reports(engine).unwrap();
        let sender = worker.sender();

        let sensor = MockSensor::from_profile(&profile().rotate_left(33));
        let mut sweeper = Sweeper::with_settle(sensor, FixedMount, Duration::ZERO);
        sweeper.sweep_and_submit(&sender).unwrap();

        assert_eq!(reports.recv().unwrap().alignment, Alignment::Offset(33));

        drop(sender);
        worker.join().unwrap();
    }
}
