// src/store.rs
use std::{fs, io::{self, BufWriter, Write}, path::Path};

use tracing::debug;

use crate::error::SinkError;
use crate::record::JobAdRecord;

/// Downstream collaborator. Receives each batch exactly once, in order.
pub trait Sink {
    fn deliver(&mut self, batch: &[JobAdRecord]) -> Result<(), SinkError>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn deliver(&mut self, batch: &[JobAdRecord]) -> Result<(), SinkError> {
        (**self).deliver(batch)
    }
}

/// Batch payload: a JSON array of flat record objects.
pub fn encode_batch(batch: &[JobAdRecord]) -> Result<String, SinkError> {
    Ok(serde_json::to_string(batch)?)
}

/// Queue-style sink: one message per batch, one message per line.
pub struct JsonLinesSink<W: Write> {
    out: W,
    sent: usize,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, sent: 0 }
    }

    /// Messages written so far.
    pub fn sent(&self) -> usize {
        self.sent
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl JsonLinesSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl JsonLinesSink<BufWriter<fs::File>> {
    /// Appends to `path`, creating parent directories as needed.
    pub fn create(path: &Path) -> Result<Self, SinkError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = fs::OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> Sink for JsonLinesSink<W> {
    fn deliver(&mut self, batch: &[JobAdRecord]) -> Result<(), SinkError> {
        let payload = encode_batch(batch)?;
        debug!(records = batch.len(), bytes = payload.len(), "Writing batch message");
        self.out.write_all(payload.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        self.sent += 1;
        Ok(())
    }
}

/// Keeps every delivered batch in memory, in delivery order.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub batches: Vec<Vec<JobAdRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> impl Iterator<Item = &JobAdRecord> {
        self.batches.iter().flatten()
    }
}

impl Sink for MemorySink {
    fn deliver(&mut self, batch: &[JobAdRecord]) -> Result<(), SinkError> {
        self.batches.push(batch.to_vec());
        Ok(())
    }
}
