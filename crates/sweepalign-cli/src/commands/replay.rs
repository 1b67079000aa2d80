//! Replay command implementation.
//!
//! Feeds a capture of consecutive raw sweep frames through the sweep
//! sequencer and the alignment worker, the same path a live sensor takes,
//! and prints every published offset. The `[sweep] settle_ms` delay applies
//! per heading, so a replay runs at the pace of a live sweep unless it is
//! set to zero.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use sweepalign_core::{
    AlignConfig, AlignmentEngine, AlignmentWorker, CycleReport, Error, FixedMount,
    RAW_FRAME_LEN, RAW_SAMPLE_LEN, RangeSensor, SweepConfig, Sweeper,
};
use tracing::{debug, info};

use super::profile_file::load_profile;
use crate::stop::StopSignal;

/// Range sensor backed by a captured byte stream.
pub struct CaptureSensor {
    bytes: Vec<u8>,
    cursor: usize,
}

impl CaptureSensor {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes, cursor: 0 }
    }

    /// Whether a full sweep is left in the capture.
    pub fn has_sweep(&self) -> bool {
        self.bytes.len() - self.cursor >= RAW_FRAME_LEN
    }
}

impl RangeSensor for CaptureSensor {
    fn read_sample(&mut self, heading: usize) -> sweepalign_core::Result<[u8; RAW_SAMPLE_LEN]> {
        let end = self.cursor + RAW_SAMPLE_LEN;
        let Some(chunk) = self.bytes.get(self.cursor..end) else {
            return Err(Error::SensorReadFailed {
                heading,
                message: "capture exhausted".to_string(),
            });
        };
        self.cursor = end;
        Ok([chunk[0], chunk[1], chunk[2]])
    }
}

/// Run the replay command
pub fn run(
    capture: &Path,
    reference: Option<&Path>,
    config: AlignConfig,
    sweep_config: &SweepConfig,
    interval: Duration,
    json: bool,
    stop: Arc<StopSignal>,
) -> Result<Vec<CycleReport>> {
    let bytes = fs::read(capture).with_context(|| format!("reading {}", capture.display()))?;
    if bytes.len() % RAW_FRAME_LEN != 0 {
        bail!(
            "{} is {} bytes, not a whole number of {}-byte sweeps",
            capture.display(),
            bytes.len(),
            RAW_FRAME_LEN
        );
    }
    info!(
        "Replaying {} sweeps from {}",
        bytes.len() / RAW_FRAME_LEN,
        capture.display()
    );

    let engine = match reference {
        Some(path) => AlignmentEngine::with_reference(config, load_profile(path)?),
        None => AlignmentEngine::new(config),
    };
    let (worker, reports) = AlignmentWorker::spawn_with_reports(engine)?;
    let sender = worker.sender();

    let printer = thread::spawn(move || {
        let mut collected = Vec::new();
        for report in reports {
            if json {
                match serde_json::to_string(&report) {
                    Ok(line) => println!("{}", line),
                    Err(e) => debug!("Failed to encode report: {}", e),
                }
            } else {
                println!(
                    "sweep {:>4}: {} (published: {})",
                    report.cycle, report.alignment, report.published
                );
            }
            collected.push(report);
        }
        collected
    });

    let mut sweeper = Sweeper::new(CaptureSensor::new(bytes), FixedMount, sweep_config);
    let mut first = true;
    while sweeper.sensor().has_sweep() {
        if !first && stop.pause(interval) {
            info!("Replay interrupted");
            break;
        }
        first = false;

        let sweep = sweeper.sweep()?;
        sender.submit(sweep.profile)?;
    }

    drop(sender);
    let engine = worker.join()?;
    info!(
        "Replay finished after {} cycles, final offset: {}",
        engine.cycles(),
        engine.offset()
    );

    printer
        .join()
        .map_err(|_| anyhow::anyhow!("report printer panicked"))
}
