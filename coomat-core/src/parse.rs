//! Text format parsing for coordinate sparse matrices
//!
//! This module converts the line-oriented text encoding into dimensions
//! plus an ordered triplet list, with no I/O dependencies. The format:
//!
//! ```text
//! rows=<N>
//! cols=<M>
//! (r,c,v)
//! (r,c,v)
//! ```
//!
//! Blank entry lines are skipped; everything else must be a
//! parenthesized comma-separated triple. Parsing is all-or-nothing: the
//! first malformed line aborts with an error naming that line.

use crate::error::{MatrixError, Result};
use alloc::string::ToString;
use alloc::vec::Vec;

/// Parsed matrix description: dimensions plus ordered entry triples
///
/// Duplicate coordinates are retained in input order; resolution is
/// last-write-wins when the triples are applied to a store.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedMatrix {
    /// Declared number of rows
    pub nrows: usize,
    /// Declared number of columns
    pub ncols: usize,
    /// `(row, col, value)` triples in input order, duplicates included
    pub entries: Vec<(usize, usize, f64)>,
}

/// Parse the text encoding of a sparse matrix
///
/// The first two lines must be `rows=<int>` and `cols=<int>` in that
/// order. Remaining lines are entry triples or blank.
pub fn parse_matrix(text: &str) -> Result<ParsedMatrix> {
    let mut lines = text.lines();

    let nrows = parse_dimension(lines.next())?;
    let ncols = parse_dimension(lines.next())?;

    let mut entries = Vec::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        entries.push(parse_entry(line)?);
    }

    Ok(ParsedMatrix {
        nrows,
        ncols,
        entries,
    })
}

/// Parse one `key=<int>` header line into a dimension count
fn parse_dimension(line: Option<&str>) -> Result<usize> {
    let line = line.ok_or(MatrixError::MissingDimensions)?.trim();
    let (_, count) = line
        .split_once('=')
        .ok_or(MatrixError::MissingDimensions)?;
    count
        .trim()
        .parse()
        .map_err(|_| MatrixError::InvalidDimension(line.to_string()))
}

/// Parse one non-blank `(row,col,value)` entry line
///
/// Any shape or numeric failure maps to `MalformedEntry` carrying the
/// offending line text.
fn parse_entry(line: &str) -> Result<(usize, usize, f64)> {
    let malformed = || MatrixError::MalformedEntry(line.to_string());

    let interior = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(malformed)?;

    let mut fields = interior.split(',');
    let row = fields.next().ok_or_else(malformed)?;
    let col = fields.next().ok_or_else(malformed)?;
    let value = fields.next().ok_or_else(malformed)?;
    if fields.next().is_some() {
        return Err(malformed());
    }

    let row = row.trim().parse().map_err(|_| malformed())?;
    let col = col.trim().parse().map_err(|_| malformed())?;
    let value = value.trim().parse().map_err(|_| malformed())?;

    Ok((row, col, value))
}
