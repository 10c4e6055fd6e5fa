//! Load plumbing between text sources and the core parser
//!
//! Every load path here returns a `Result`; a failed load never leaves
//! a half-initialized matrix behind. The original prototype this design
//! replaces logged and discarded load failures, which made a matrix
//! silently unusable.

use crate::source::TextSource;
use coomat_core::{CooMatrix, MatrixElement, MatrixError};

#[cfg(feature = "async")]
use std::path::Path;

/// Errors that can occur while loading a matrix from a text source
#[derive(Debug)]
pub enum LoadError {
    /// The text source could not produce text
    Io(std::io::Error),
    /// The text does not conform to the matrix encoding
    Format(MatrixError),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "Error loading matrix text: {err}"),
            LoadError::Format(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::Format(_) => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<MatrixError> for LoadError {
    fn from(err: MatrixError) -> Self {
        LoadError::Format(err)
    }
}

/// Load a matrix from a text source
pub fn load_matrix<E: MatrixElement>(
    source: &impl TextSource,
    id: &str,
) -> Result<CooMatrix<E>, LoadError> {
    let text = source.fetch(id)?;
    Ok(CooMatrix::from_text(&text)?)
}

/// Reload an existing matrix from a text source
///
/// On success the matrix's dimensions and entries are replaced. On any
/// failure, fetch or parse, the matrix keeps its prior state.
pub fn load_into<E: MatrixElement>(
    matrix: &mut CooMatrix<E>,
    source: &impl TextSource,
    id: &str,
) -> Result<(), LoadError> {
    let text = source.fetch(id)?;
    matrix.load_text(&text)?;
    Ok(())
}

/// Load a matrix from a file asynchronously
#[cfg(feature = "async")]
pub async fn load_matrix_async<E: MatrixElement>(
    path: impl AsRef<Path>,
) -> Result<CooMatrix<E>, LoadError> {
    let text = tokio::fs::read_to_string(path).await?;
    Ok(CooMatrix::from_text(&text)?)
}

/// Load two matrices from two files concurrently
///
/// The loads are independent: each populates its own matrix and shares
/// no state with the other, so they run under `tokio::try_join!`. The
/// first failure cancels the pair.
#[cfg(feature = "async")]
pub async fn load_pair<E: MatrixElement>(
    path_a: impl AsRef<Path>,
    path_b: impl AsRef<Path>,
) -> Result<(CooMatrix<E>, CooMatrix<E>), LoadError> {
    tokio::try_join!(load_matrix_async(path_a), load_matrix_async(path_b))
}
