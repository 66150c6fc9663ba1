//! Writing optimized positions back to the job store.
//!
//! One write per job, in route order, with 1-based positions. Writes are
//! independent: a failure is recorded and the remaining jobs are still
//! written. Nothing is retried or rolled back.

use serde::Serialize;
use tracing::{debug, warn};

use crate::traits::SequenceStore;

/// Outcome of a sequence write-back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersistenceReport<I> {
    pub succeeded: usize,
    /// Jobs whose write failed, with the store's error message.
    pub failed: Vec<(I, String)>,
}

impl<I> PersistenceReport<I> {
    pub fn attempted(&self) -> usize {
        self.succeeded + self.failed.len()
    }

    /// True when every write went through.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

pub fn persist_sequence<T>(store: &mut T, order: &[T::Id]) -> PersistenceReport<T::Id>
where
    T: SequenceStore + ?Sized,
{
    let mut report = PersistenceReport {
        succeeded: 0,
        failed: Vec::new(),
    };

    for (index, id) in order.iter().enumerate() {
        let position = index + 1;
        match store.set_sequence_position(id, position) {
            Ok(()) => report.succeeded += 1,
            Err(err) => {
                warn!(?id, position, error = %err, "failed to persist sequence position");
                report.failed.push((id.clone(), err.to_string()));
            }
        }
    }

    debug!(
        succeeded = report.succeeded,
        failed = report.failed.len(),
        "sequence positions persisted"
    );
    report
}
