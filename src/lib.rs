//! # tebmap
//!
//! Tree-encoded bitmaps: a compressed bitmap representation with random
//! access and skippable run iteration.
//!
//! A bitmap of power-of-two length is viewed as the leaves of a full binary
//! tree; subtrees whose bits agree collapse into single labelled leaves, and
//! the pruned tree is serialized in level order. Navigation over the
//! serialization needs only a rank1 primitive, and two implicit-node trims
//! strip the provably redundant all-inner prefix and all-leaf suffix down to
//! a pair of counters.
//!
//! ## Quick Start
//!
//! ```
//! use tebmap::Teb;
//!
//! // Bit i of the bitmap is bit i % 32 of words[i / 32].
//! let teb = Teb::from_words(&[0b1111_0000_1111_0000, 0], 64).unwrap();
//!
//! // Point lookups.
//! assert!(!teb.test(0));
//! assert!(teb.test(4));
//!
//! // Runs of set bits, with O(log n) skipping.
//! let mut it = teb.iter();
//! assert_eq!((it.pos(), it.length()), (4, 4));
//! it.skip_to(9);
//! assert_eq!((it.pos(), it.length()), (12, 4));
//! ```
//!
//! ## Lossy encoding
//!
//! Construction optionally takes a false-positive budget: subtrees may then
//! collapse into 1-leaves as long as at most `floor(n * fpr)` zero positions
//! start reading as ones. Set positions always read back as set.
//!
//! ```
//! use tebmap::{Config, Teb};
//!
//! let config = Config { fpr: 0.5, ..Config::default() };
//! let teb = Teb::with_config(&[0b0000_0001], 8, config).unwrap();
//! assert!(teb.test(0)); // never a false negative
//! ```
//!
//! ## Features
//!
//! - `std` (default): std support; disable for `no_std` + `alloc` builds
//! - `serde`: serialization/deserialization for all value types

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]

// When using no_std, we need to explicitly link the alloc crate
#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

// When using std, re-export alloc types from std for compatibility
#[cfg(any(test, feature = "std"))]
extern crate std as alloc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod bitbuf;
mod bitmap_tree;
mod error;
mod iter;
mod rank;
mod teb;
mod tree;

pub use bitbuf::{BitBuffer, WORD_BITS};
pub use error::{Error, Result};
pub use iter::TebIter;
pub use teb::Teb;

/// Encoding parameters.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Permitted false-positive rate in `[0, 1]`: at most `floor(n * fpr)`
    /// zero bits may read back as ones (default: 0.0, exact).
    pub fpr: f64,
    /// Optimization level (default: 2):
    ///
    /// - 0: plain level-order serialization
    /// - 1: implicit-node trimming of the serialization
    /// - 2: additionally search equivalent encodings by gradual
    ///   decompression, keeping the smallest
    pub opt_level: u8,
    /// Cap on gradual-decompression steps taken without finding a smaller
    /// encoding before the search gives up (default: 1000).
    pub decompress_step_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fpr: 0.0,
            opt_level: 2,
            decompress_step_limit: 1000,
        }
    }
}
