use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex};
use std::time::Duration;

/// Ctrl-C flag shared between the signal handler and the replay loop.
///
/// The loop paces sweeps with [`StopSignal::pause`], which wakes as soon as
/// [`StopSignal::stop`] is called.
#[derive(Default)]
pub struct StopSignal {
    stopped: AtomicBool,
    wake: Condvar,
    lock: Mutex<()>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
        // taken so a pause between its check and its wait cannot miss the wake-up
        let _guard = self.lock.lock();
        self.wake.notify_all();
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    /// Pause between sweeps. Returns `true` if replay should stop.
    pub fn pause(&self, interval: Duration) -> bool {
        if self.is_stopped() {
            return true;
        }
        if interval.is_zero() {
            return false;
        }

        let Ok(guard) = self.lock.lock() else {
            return true;
        };
        self.wake
            .wait_timeout_while(guard, interval, |_| !self.is_stopped())
            .map_or(true, |(_, timeout)| !timeout.timed_out())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Instant;

    #[test]
    fn test_unpaced_replay_never_blocks() {
        let signal = StopSignal::new();
        assert!(!signal.is_stopped());
        assert!(!signal.pause(Duration::ZERO));
    }

    #[test]
    fn test_pause_runs_full_interval() {
        let signal = StopSignal::new();
        let start = Instant::now();
        assert!(!signal.pause(Duration::from_millis(30)));
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_stop_cuts_pause_short() {
        let signal = Arc::new(StopSignal::new());
        let handler = Arc::clone(&signal);

        let start = Instant::now();
        let stopper = thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            handler.stop();
        });

        assert!(signal.pause(Duration::from_secs(10)));
        assert!(start.elapsed() < Duration::from_secs(1));
        stopper.join().unwrap();

        // every later pause reports the stop at once
        assert!(signal.pause(Duration::from_secs(10)));
    }
}
