//! Published alignment offset.
//!
//! One [`OffsetPublisher`] owns the write side; any number of [`OffsetReader`]
//! handles observe it. The value lives in a single `AtomicI32`, so a reader
//! sees either the previous or the new offset, never a torn write.

use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};

use crate::matching::Alignment;

/// Write side of the published offset. Not `Clone`: there is one writer.
#[derive(Debug)]
pub struct OffsetPublisher {
    cell: Arc<AtomicI32>,
}

impl OffsetPublisher {
    /// Create a publisher holding [`Alignment::NoMatch`].
    pub fn new() -> Self {
        Self::with_initial(Alignment::NoMatch)
    }

    pub fn with_initial(initial: Alignment) -> Self {
        Self {
            cell: Arc::new(AtomicI32::new(initial.to_raw())),
        }
    }

    /// Replace the published value.
    pub fn publish(&self, alignment: Alignment) {
        self.cell.store(alignment.to_raw(), Ordering::Release);
    }

    pub fn current(&self) -> Alignment {
        Alignment::from_raw(self.cell.load(Ordering::Acquire))
    }

    pub fn reader(&self) -> OffsetReader {
        OffsetReader {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl Default for OffsetPublisher {
    fn default() -> Self {
        Self::new()
    }
}

/// Read side of the published offset.
#[derive(Debug, Clone)]
pub struct OffsetReader {
    cell: Arc<AtomicI32>,
}

impl OffsetReader {
    /// Most recently published alignment. Never blocks.
    pub fn get(&self) -> Alignment {
        Alignment::from_raw(self.cell.load(Ordering::Acquire))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_initial_state_is_no_match() {
        let publisher = OffsetPublisher::new();
        assert_eq!(publisher.reader().get(), Alignment::NoMatch);
        assert_eq!(publisher.current(), Alignment::NoMatch);
    }

    #[test]
    fn test_with_initial() {
        let publisher = OffsetPublisher::with_initial(Alignment::Offset(0));
        assert_eq!(publisher.reader().get(), Alignment::Offset(0));
    }

    #[test]
    fn test_readers_see_latest_value() {
        let publisher = OffsetPublisher::new();
        let a = publisher.reader();
        let b = a.clone();

        publisher.publish(Alignment::Offset(42));
        assert_eq!(a.get(), Alignment::Offset(42));
        assert_eq!(b.get(), Alignment::Offset(42));

        publisher.publish(Alignment::NoMatch);
        assert_eq!(a.get(), Alignment::NoMatch);
    }

    #[test]
    fn test_concurrent_readers_never_see_invalid_values() {
        let publisher = OffsetPublisher::new();
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let reader = publisher.reader();
                thread::spawn(move || {
                    for _ in 0..10_000 {
                        match reader.get() {
                            Alignment::Offset(deg) => assert!(deg < 360),
                            Alignment::NoMatch => {}
                        }
                    }
                })
            })
            .collect();

        for i in 0..10_000u16 {
            publisher.publish(Alignment::Offset(i % 360));
        }

        for handle in readers {
            handle.join().unwrap();
        }
    }
}
