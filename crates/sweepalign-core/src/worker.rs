//! Dedicated alignment worker.
//!
//! The worker thread owns an [`AlignmentEngine`] and blocks on a bounded
//! queue until the next profile arrives, then runs one cycle to completion.
//! There is no timeout on the wait: a sweep that never arrives is an upstream
//! fault, not something the worker can recover from. The thread exits once
//! every [`ProfileSender`] has been dropped.

use std::sync::mpsc::{self, Receiver, Sender, SyncSender, TrySendError};
use std::thread::{self, JoinHandle};

use serde::Serialize;
use tracing::{debug, info};

use crate::engine::AlignmentEngine;
use crate::error::{Error, Result};
use crate::matching::Alignment;
use crate::profile::Profile;
use crate::publisher::OffsetReader;

enum Command {
    Submit(Profile),
    SetReference(Profile),
}

/// Outcome of one cycle, as seen by the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    pub cycle: u64,
    /// Alignment computed in this cycle
    pub alignment: Alignment,
    /// Alignment published after the cycle
    pub published: Alignment,
}

/// Sending side of the worker queue.
#[derive(Debug, Clone)]
pub struct ProfileSender {
    tx: SyncSender<Command>,
}

impl ProfileSender {
    /// Queue a profile, blocking while the queue is full.
    pub fn submit(&self, profile: Profile) -> Result<()> {
        self.tx
            .send(Command::Submit(profile))
            .map_err(|_| Error::WorkerStopped)
    }

    /// Queue a profile without blocking.
    pub fn try_submit(&self, profile: Profile) -> Result<()> {
        self.tx
            .try_send(Command::Submit(profile))
            .map_err(|e| match e {
                TrySendError::Full(_) => Error::QueueFull,
                TrySendError::Disconnected(_) => Error::WorkerStopped,
            })
    }

    /// Replace the worker's reference before the next queued profile is handled.
    pub fn set_reference(&self, reference: Profile) -> Result<()> {
        self.tx
            .send(Command::SetReference(reference))
            .map_err(|_| Error::WorkerStopped)
    }
}

pub struct AlignmentWorker {
    sender: ProfileSender,
    reader: OffsetReader,
    handle: JoinHandle<AlignmentEngine>,
}

impl AlignmentWorker {
    pub fn spawn(engine: AlignmentEngine) -> Result<Self> {
        Self::spawn_inner(engine, None)
    }

    /// Spawn a worker that also reports every completed cycle.
    pub fn spawn_with_reports(engine: AlignmentEngine) -> Result<(Self, Receiver<CycleReport>)> {
        let (report_tx, report_rx) = mpsc::channel();
        let worker = Self::spawn_inner(engine, Some(report_tx))?;
        Ok((worker, report_rx))
    }

    fn spawn_inner(
        engine: AlignmentEngine,
        reports: Option<Sender<CycleReport>>,
    ) -> Result<Self> {
        engine.config().validate()?;
        let (tx, rx) = mpsc::sync_channel(engine.config().queue_depth);
        let reader = engine.reader();

        let handle = thread::Builder::new()
            .name("alignment".to_string())
            .spawn(move || run(engine, rx, reports))?;

        Ok(Self {
            sender: ProfileSender { tx },
            reader,
            handle,
        })
    }

    pub fn sender(&self) -> ProfileSender {
        self.sender.clone()
    }

    pub fn reader(&self) -> OffsetReader {
        self.reader.clone()
    }

    /// Stop accepting work from this handle and wait for the thread to drain
    /// its queue. Other live senders keep the worker running until dropped.
    pub fn join(self) -> Result<AlignmentEngine> {
        drop(self.sender);
        self.handle.join().map_err(|_| Error::WorkerStopped)
    }
}

fn run(
    mut engine: AlignmentEngine,
    rx: Receiver<Command>,
    reports: Option<Sender<CycleReport>>,
) -> AlignmentEngine {
    info!("Alignment worker started ({})", engine.config().mode);

    while let Ok(command) = rx.recv() {
        match command {
            Command::Submit(profile) => {
                let alignment = engine.submit(profile);
                if let Some(reports) = &reports {
                    let report = CycleReport {
                        cycle: engine.cycles(),
                        alignment,
                        published: engine.offset(),
                    };
                    // receiver may have gone away; reporting is best effort
                    let _ = reports.send(report);
                }
            }
            Command::SetReference(reference) => engine.set_reference(reference),
        }
    }

    debug!("All profile senders dropped after {} cycles", engine.cycles());
    info!("Alignment worker stopped");
    engine
}
