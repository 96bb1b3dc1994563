//! Model persistence: normalized plain-text write and its inverse read.
//!
//! Each point becomes one line of two space-separated decimal numbers —
//! world coordinates divided by [`FILE_SCALE_DIVISOR`] — in insertion order,
//! with no header, footer, or count. Writing overwrites the destination
//! unconditionally. The reader is the exact inverse, so round trips are
//! testable end to end.

#[cfg(test)]
#[path = "writer_test.rs"]
mod writer_test;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::camera::Point;
use crate::consts::FILE_SCALE_DIVISOR;
use crate::model::PointModel;

/// Error returned by the read/write entry points.
#[derive(Debug, thiserror::Error)]
pub enum WriterError {
    /// The destination could not be opened, written, or read.
    #[error("model file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// A line of the file is not two decimal numbers.
    #[error("malformed point on line {line}")]
    Malformed { line: usize },
}

/// Write the model to `path`, overwriting any existing file.
///
/// # Errors
///
/// Returns [`WriterError::Io`] if the destination cannot be opened or
/// written.
pub fn write(path: &Path, model: &PointModel) -> Result<(), WriterError> {
    let mut out = BufWriter::new(File::create(path)?);
    write_to(&mut out, model)?;
    out.flush()?;
    Ok(())
}

/// Serialize the model into any writer.
///
/// # Errors
///
/// Returns [`WriterError::Io`] if the writer fails.
pub fn write_to(w: &mut impl Write, model: &PointModel) -> Result<(), WriterError> {
    for p in model.points() {
        writeln!(w, "{} {}", p.x / FILE_SCALE_DIVISOR, p.y / FILE_SCALE_DIVISOR)?;
    }
    Ok(())
}

/// Read a model written by [`write`].
///
/// # Errors
///
/// Returns [`WriterError::Io`] if the file cannot be opened or read, and
/// [`WriterError::Malformed`] for a line that is not two decimal numbers.
pub fn read(path: &Path) -> Result<PointModel, WriterError> {
    read_from(BufReader::new(File::open(path)?))
}

/// Parse a model from any buffered reader; inverse of [`write_to`].
///
/// # Errors
///
/// [`WriterError::Malformed`] carries the 1-based number of the offending
/// line. Blank lines are skipped.
pub fn read_from(r: impl BufRead) -> Result<PointModel, WriterError> {
    let mut model = PointModel::new();
    for (idx, line) in r.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut parts = line.split_whitespace();
        let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(WriterError::Malformed { line: idx + 1 });
        };
        let (Ok(x), Ok(y)) = (x.parse::<f64>(), y.parse::<f64>()) else {
            return Err(WriterError::Malformed { line: idx + 1 });
        };
        model.add(Point::new(x * FILE_SCALE_DIVISOR, y * FILE_SCALE_DIVISOR));
    }
    Ok(model)
}
