//! Layout runner - computes the week grid on a background thread.
//!
//! Every submission supersedes the previous one. A worker whose inputs went
//! stale while it was computing discards its result on completion; nothing
//! is cancelled mid-flight and partial results are never merged.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use serde::Serialize;
use tracing::debug;

use crate::grid::{self, BlockRow};

/// A published grid together with the inputs it was computed from.
#[derive(Debug, Clone, Serialize)]
pub struct GridLayout {
    pub generation: u64,
    pub total_weeks: i64,
    pub weeks_lived: i64,
    pub rows: Vec<BlockRow>,
}

/// Off-thread layout computation with keep-only-the-latest semantics.
pub struct LayoutRunner {
    generation: Arc<AtomicU64>,
    latest: Arc<Mutex<Option<GridLayout>>>,
}

impl LayoutRunner {
    pub fn new() -> Self {
        Self {
            generation: Arc::new(AtomicU64::new(0)),
            latest: Arc::new(Mutex::new(None)),
        }
    }

    /// Queue a layout computation for the given inputs.
    ///
    /// The worker publishes its result and invokes `callback` only if no
    /// newer submission arrived while it was computing.
    pub fn submit<F>(&self, total_weeks: i64, weeks_lived: i64, blocks_per_row: usize, callback: F)
    where
        F: FnOnce(&GridLayout) + Send + 'static,
    {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let current = Arc::clone(&self.generation);
        let latest = Arc::clone(&self.latest);

        thread::spawn(move || {
            let rows = grid::layout_rows(total_weeks, weeks_lived, blocks_per_row);

            if current.load(Ordering::SeqCst) != generation {
                debug!("layout generation {} superseded, discarding", generation);
                return;
            }

            let layout = GridLayout {
                generation,
                total_weeks,
                weeks_lived,
                rows,
            };

            {
                let mut slot = latest.lock().unwrap();
                // An even newer result may have won the race to publish
                if slot.as_ref().map_or(false, |l| l.generation > generation) {
                    return;
                }
                *slot = Some(layout.clone());
            }

            callback(&layout);
        });
    }

    /// Clone of the most recently published layout, if any.
    pub fn latest(&self) -> Option<GridLayout> {
        self.latest.lock().unwrap().clone()
    }

    /// Whether the published layout was computed from these inputs.
    pub fn is_current(&self, total_weeks: i64, weeks_lived: i64) -> bool {
        self.latest
            .lock()
            .unwrap()
            .as_ref()
            .map_or(false, |l| {
                l.total_weeks == total_weeks && l.weeks_lived == weeks_lived
            })
    }
}

impl Default for LayoutRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn test_result_is_published_and_callback_fires() {
        let runner = LayoutRunner::new();
        let (tx, rx) = mpsc::channel();

        runner.submit(110, 40, 52, move |layout| {
            let _ = tx.send(layout.generation);
        });

        let generation = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("layout callback never fired");
        assert_eq!(generation, 1);

        let layout = runner.latest().expect("no layout published");
        assert_eq!(layout.total_weeks, 110);
        assert_eq!(layout.rows.len(), 3);
        assert!(runner.is_current(110, 40));
    }

    #[test]
    fn test_newest_submission_wins() {
        let runner = LayoutRunner::new();
        let (tx, rx) = mpsc::channel();

        // Large grid races against a small one submitted right after
        runner.submit(500_000, 0, 52, |_| {});
        runner.submit(104, 10, 52, move |layout| {
            let _ = tx.send(layout.generation);
        });

        let generation = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("layout callback never fired");
        assert_eq!(generation, 2);

        // Give the superseded worker time to finish and (not) publish
        thread::sleep(Duration::from_millis(300));

        let layout = runner.latest().expect("no layout published");
        assert_eq!(layout.generation, 2);
        assert_eq!(layout.total_weeks, 104);
        assert!(!runner.is_current(500_000, 0));
    }
}
