//! Errors reported during tree-encoded bitmap construction.
//!
//! All errors are surfaced synchronously by the constructors; once a
//! [`Teb`](crate::Teb) exists, no read operation can fail.

use core::fmt;

/// Errors that can occur when encoding a bitmap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// The bitmap length is not a positive power of two, or exceeds the
    /// capacity of the supplied words.
    InvalidLength {
        /// The rejected bit length.
        n: usize,
    },

    /// The false-positive rate is outside `[0, 1]` (or NaN).
    InvalidFpr {
        /// The rejected rate.
        fpr: f64,
    },

    /// The optimization level is outside the supported set `{0, 1, 2}`.
    InvalidOptLevel {
        /// The rejected level.
        level: u8,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLength { n } => {
                write!(f, "bitmap length {} is not a positive power of two", n)
            }
            Error::InvalidFpr { fpr } => {
                write!(f, "false-positive rate {} is outside [0, 1]", fpr)
            }
            Error::InvalidOptLevel { level } => {
                write!(f, "optimization level {} is not one of 0, 1, 2", level)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// A specialized `Result` for encoding operations.
pub type Result<T> = core::result::Result<T, Error>;
