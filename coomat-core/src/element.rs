//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix entries.

use core::ops::Add;

/// Trait for types that can be stored as matrix entries
///
/// Entry types must be cheap to copy, comparable against their zero
/// (absence in the store means zero), and summable for merge-add.
/// `from_f64`/`to_f64` bridge to the numeric type the text format
/// parses into.
pub trait MatrixElement: Copy + PartialEq + Add<Output = Self> + Sized {
    /// The additive identity for this element type
    fn zero() -> Self;

    /// Whether this value is exactly zero
    ///
    /// Zero values are never stored; `set` removes the entry instead.
    fn is_zero(self) -> bool {
        self == Self::zero()
    }

    /// Convert from f64 for generic construction from parsed text
    fn from_f64(value: f64) -> Self;

    /// Convert to f64 for generic operations
    fn to_f64(self) -> f64;
}

impl MatrixElement for f32 {
    fn zero() -> Self {
        0.0
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl MatrixElement for f64 {
    fn zero() -> Self {
        0.0
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl MatrixElement for i32 {
    fn zero() -> Self {
        0
    }

    fn from_f64(value: f64) -> Self {
        value as i32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl MatrixElement for i64 {
    fn zero() -> Self {
        0
    }

    fn from_f64(value: f64) -> Self {
        value as i64
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}
