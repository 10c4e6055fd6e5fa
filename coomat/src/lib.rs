//! Coomat - Coordinate Sparse Matrix Loading
//!
//! This crate wires the pure `coomat-core` data structures to actual
//! text sources: files on disk, in-memory fixtures, and (behind the
//! `async` feature) tokio-based concurrent loading.
//!
//! ## Architecture
//!
//! The workspace follows a specification/implementation separation:
//!
//! - **coomat-core**: storage, parsing, and addition with no I/O
//! - **coomat**: text-source collaborators and load plumbing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coomat::{load_matrix, CooMatrix, FileSource, LoadError};
//!
//! fn example() -> Result<(), LoadError> {
//!     let source = FileSource::new();
//!     let a: CooMatrix = load_matrix(&source, "a.txt")?;
//!     let b: CooMatrix = load_matrix(&source, "b.txt")?;
//!     let sum = a.add(&b)?;
//!     println!("{} non-zero entries", sum.nnz());
//!     Ok(())
//! }
//! ```

// Re-export the core data structures and error handling
pub use coomat_core::{
    parse_matrix, CooMatrix, CooStore, MatrixElement, MatrixError, ParsedMatrix,
};

// Implementation modules
pub mod load;
pub mod source;

// Public exports
pub use load::{load_into, load_matrix, LoadError};
pub use source::{FileSource, MemorySource, TextSource};

// Async loading features
#[cfg(feature = "async")]
pub use load::{load_matrix_async, load_pair};
