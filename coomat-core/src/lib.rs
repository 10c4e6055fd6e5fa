#![no_std]

//! Coomat Core - Coordinate Sparse Matrix Storage
//!
//! This crate provides the coordinate-map sparse matrix representation,
//! the text format parser, and the elementwise addition logic, with no
//! I/O dependencies. File and async loading live in the `coomat` crate.

extern crate alloc;

pub mod element;
pub mod error;
pub mod matrix;
pub mod parse;
pub mod store;

pub use element::*;
pub use error::*;
pub use matrix::*;
pub use parse::*;
pub use store::*;
