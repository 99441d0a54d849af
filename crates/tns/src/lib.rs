//! TNS: coordinate-format (COO) sparse tensor files, reduced to 3D points.
//!
//! - One record per line, fields separated by runs of whitespace.
//! - The first three fields are the x, y, z indices of the first three modes.
//! - The last field is the scalar value stored at that coordinate.
//! - Anything between the third field and the value is a higher mode; it is
//!   dropped from the spatial view and reported once per parse.
//! - Blank lines are skipped. No header, no end marker.
//!
//! Record layout:
//!   coord_1 coord_2 coord_3 [coord_4 ...] value
//!
//! Example (3 modes):
//!   0 0 0 1.5
//!   1 1 1 2.5
//!
//! Parsing is strict and atomic: a record with fewer than four fields, or a
//! coordinate/value that is not a finite number, fails the whole file.

mod dataset;
mod error;
mod extent;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub use crate::dataset::TensorDataset;
pub use crate::error::{Field, FormatError, ReadError};
pub use crate::extent::Extent3;

/// Minimum number of fields on a record: three coordinates and a value.
pub const MIN_FIELDS: usize = 4;

/// Number of modes kept as spatial coordinates.
pub const SPATIAL_MODES: usize = 3;

#[inline(always)]
fn number(token: &str, line: usize, field: Field) -> Result<f64, FormatError> {
    let v: f64 = token.parse().map_err(|_| FormatError::NotNumeric {
        line,
        field,
        token: token.to_owned(),
    })?;

    // `f64::from_str` accepts "nan" and "inf"; neither is a usable coordinate.
    if !v.is_finite() {
        return Err(FormatError::NonFinite {
            line,
            field,
            token: token.to_owned(),
        });
    }

    Ok(v)
}

/// Parse TNS text into a dataset. This is the single source of truth for parsing.
pub fn parse_str(text: &str) -> Result<TensorDataset, FormatError> {
    let mut vertices = Vec::<[f64; 3]>::new();
    let mut values = Vec::<f64>::new();
    let mut extent = Extent3::EMPTY;
    let mut mode_count = 0usize;
    let mut higher_mode_records = 0usize;

    // Reused across lines to avoid an allocation per record.
    let mut fields = Vec::<&str>::with_capacity(8);

    // `lines()` splits on '\n' and strips a trailing '\r'.
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;

        fields.clear();
        fields.extend(raw.split_whitespace());

        if fields.is_empty() {
            continue;
        }

        if fields.len() < MIN_FIELDS {
            return Err(FormatError::TooFewFields {
                line,
                found: fields.len(),
            });
        }

        let x = number(fields[0], line, Field::X)?;
        let y = number(fields[1], line, Field::Y)?;
        let z = number(fields[2], line, Field::Z)?;
        let value = number(fields[fields.len() - 1], line, Field::Value)?;

        let modes = fields.len() - 1;
        if modes > SPATIAL_MODES {
            higher_mode_records += 1;
        }
        mode_count = mode_count.max(modes);

        let vertex = [x, y, z];
        extent.include(vertex);
        vertices.push(vertex);
        values.push(value);
    }

    if higher_mode_records > 0 {
        log::warn!(
            "More than 3-modes, only showing first three dimensions of tensor \
             ({} modes on {} of {} records)",
            mode_count,
            higher_mode_records,
            vertices.len()
        );
    }

    Ok(TensorDataset::from_parts(vertices, values, extent, mode_count))
}

/// Parse TNS from raw bytes; the input must be UTF-8.
pub fn parse_bytes(bytes: &[u8]) -> Result<TensorDataset, ReadError> {
    let text = std::str::from_utf8(bytes)?;
    Ok(parse_str(text)?)
}

/// Fast path: prefer mmap; fall back to a single read.
#[cfg(feature = "mmap")]
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<TensorDataset, ReadError> {
    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Ok(TensorDataset::default());
    }
    let map = unsafe { memmap2::MmapOptions::new().map(&file)? };
    parse_bytes(&map)
}

#[cfg(not(feature = "mmap"))]
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<TensorDataset, ReadError> {
    let bytes = std::fs::read(path)?;
    parse_bytes(&bytes)
}

/// Write one `x y z value` record per point.
///
/// Floats use Rust's shortest round-trip formatting, so parsing the output
/// yields the same vertices and values. Higher modes are already gone from
/// a dataset and are not written.
pub fn write_tns<W: Write>(mut w: W, dataset: &TensorDataset) -> io::Result<()> {
    for ([x, y, z], value) in dataset.iter() {
        writeln!(w, "{} {} {} {}", x, y, z, value)?;
    }

    w.flush()
}

pub fn write_file<P: AsRef<Path>>(path: P, dataset: &TensorDataset) -> io::Result<()> {
    let file = File::create(path)?;
    write_tns(BufWriter::new(file), dataset)
}
