//! Write counters for a logger tree
//!
//! The five logging methods never return sink errors, so these counters
//! are how an application notices that a drinker is failing.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters shared by a logger and every child derived from it
///
/// # Example
///
/// ```
/// use lager::LagerMetrics;
///
/// let metrics = LagerMetrics::new();
/// metrics.record_written();
/// metrics.record_dropped();
///
/// assert_eq!(metrics.written_count(), 1);
/// assert_eq!(metrics.dropped_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LagerMetrics {
    /// Records a drinker accepted
    written: AtomicU64,

    /// Records lost to a drinker error
    dropped: AtomicU64,
}

impl LagerMetrics {
    pub const fn new() -> Self {
        Self {
            written: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn written_count(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) {
        self.written.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the dropped count before this drop
    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped.fetch_add(1, Ordering::Relaxed)
    }

    /// Percentage of records lost, 0.0 when nothing was logged
    pub fn drop_rate(&self) -> f64 {
        let written = self.written_count();
        let dropped = self.dropped_count();
        let total = written + dropped;

        if total == 0 {
            0.0
        } else {
            (dropped as f64 / total as f64) * 100.0
        }
    }

    pub fn reset(&self) {
        self.written.store(0, Ordering::Relaxed);
        self.dropped.store(0, Ordering::Relaxed);
    }
}
