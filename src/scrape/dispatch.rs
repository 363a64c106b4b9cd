// src/scrape/dispatch.rs
use tracing::info;

use crate::error::SinkError;
use crate::record::JobAdRecord;
use crate::store::Sink;

/// Slices the run's records into fixed-size batches, in original order,
/// and delivers each one to the sink.
pub struct BatchDispatcher<S: Sink> {
    sink: S,
    batch_size: usize,
}

impl<S: Sink> BatchDispatcher<S> {
    pub fn new(sink: S, batch_size: usize) -> Self {
        Self { sink, batch_size: batch_size.max(1) }
    }

    /// Returns the number of batches delivered. Nothing is sent for an empty run.
    ///
    /// Stops at the first sink error; batches before it stay delivered.
    pub fn dispatch(&mut self, records: &[JobAdRecord]) -> Result<usize, SinkError> {
        let mut sent = 0;
        for batch in records.chunks(self.batch_size) {
            self.sink.deliver(batch)?;
            sent += 1;
            info!(batch = sent, records = batch.len(), "Delivered batch");
        }
        Ok(sent)
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
