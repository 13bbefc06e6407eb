// src/output/mod.rs
//! Delivery of extracted values to standard output.
//!
//! This module is the only place where results are written, keeping the
//! pipelines free of I/O other than API calls.

mod writer;

pub use writer::{StreamingOutput, UniqueOutput};

use crate::error::AppError;

/// How extracted values reach the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One line per value, in traversal order, as soon as it is extracted.
    Stream,
    /// Sorted distinct values, written once the traversal has completed.
    Unique,
}

/// Receives extracted values in traversal order.
pub trait ValueSink {
    fn accept(&mut self, value: String) -> Result<(), AppError>;

    /// Called once after a successful traversal; returns the number of lines written.
    fn finish(&mut self) -> Result<usize, AppError>;
}

/// Builds the sink for `mode` on top of `writer`.
pub fn sink_for<'w, W>(mode: OutputMode, writer: W) -> Box<dyn ValueSink + 'w>
where
    W: std::io::Write + 'w,
{
    match mode {
        OutputMode::Stream => Box::new(StreamingOutput::new(writer)),
        OutputMode::Unique => Box::new(UniqueOutput::new(writer)),
    }
}
