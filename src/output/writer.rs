// src/output/writer.rs
//! Line writers behind [`super::ValueSink`].

use super::ValueSink;
use crate::error::AppError;
use std::collections::BTreeSet;
use std::io::Write;

/// Writes every value as soon as it arrives.
pub struct StreamingOutput<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> StreamingOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ValueSink for StreamingOutput<W> {
    fn accept(&mut self, value: String) -> Result<(), AppError> {
        writeln!(self.writer, "{}", value)?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<usize, AppError> {
        self.writer.flush()?;
        Ok(self.written)
    }
}

/// Collects distinct values and writes them sorted on `finish`.
///
/// Nothing reaches the writer before `finish`, so a failed traversal
/// produces no output at all.
pub struct UniqueOutput<W: Write> {
    writer: W,
    values: BTreeSet<String>,
}

impl<W: Write> UniqueOutput<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            values: BTreeSet::new(),
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ValueSink for UniqueOutput<W> {
    fn accept(&mut self, value: String) -> Result<(), AppError> {
        self.values.insert(value);
        Ok(())
    }

    fn finish(&mut self) -> Result<usize, AppError> {
        let values = std::mem::take(&mut self.values);
        for value in &values {
            writeln!(self.writer, "{}", value)?;
        }
        self.writer.flush()?;
        Ok(values.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(bytes: &[u8]) -> Vec<String> {
        String::from_utf8_lossy(bytes)
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn streaming_writes_immediately_in_order() {
        let mut out = StreamingOutput::new(Vec::new());
        out.accept("b".to_string()).unwrap();
        assert_eq!(lines(&out.writer), vec!["b"]);
        out.accept("a".to_string()).unwrap();
        out.accept("b".to_string()).unwrap();
        assert_eq!(out.finish().unwrap(), 3);
        assert_eq!(lines(&out.into_inner()), vec!["b", "a", "b"]);
    }

    #[test]
    fn unique_writes_sorted_distinct_only_on_finish() {
        let mut out = UniqueOutput::new(Vec::new());
        for value in ["b", "a", "b"] {
            out.accept(value.to_string()).unwrap();
        }
        assert!(out.writer().is_empty());

        assert_eq!(out.finish().unwrap(), 2);
        assert_eq!(lines(&out.into_inner()), vec!["a", "b"]);
    }
}
