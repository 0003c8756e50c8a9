//! Rank directory for O(1) rank1 queries over an immutable bit buffer.
//!
//! Two-level layout:
//!
//! - **Superblocks** (512 bits): absolute cumulative 1-count, stored as `u64`
//! - **Blocks** (64 bits): 1-count within the enclosing superblock, stored
//!   as `u16` (at most 448, which fits comfortably)
//!
//! `rank1(i)` adds the superblock count, the block count, and a popcount of
//! the residual bits in front of `i` within the block. The index is built
//! once from a buffer snapshot and becomes stale if that buffer changes.

#[cfg(not(test))]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bitbuf::BitBuffer;

/// Bits covered by one superblock entry.
const SUPERBLOCK_BITS: usize = 512;

/// Bits covered by one block entry.
const BLOCK_BITS: usize = 64;

/// Blocks per superblock.
const BLOCKS_PER_SUPERBLOCK: usize = SUPERBLOCK_BITS / BLOCK_BITS;

/// Two-level rank1 index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub(crate) struct RankIndex {
    /// Cumulative 1-count before each superblock.
    superblocks: Vec<u64>,
    /// 1-count within the superblock before each block.
    blocks: Vec<u16>,
    /// Number of bits indexed.
    len: usize,
    /// Total number of 1-bits (cached).
    ones: usize,
}

impl RankIndex {
    /// Create an index over zero bits.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an index over the given buffer.
    pub fn build(buf: &BitBuffer) -> Self {
        let len = buf.len();
        if len == 0 {
            return Self::empty();
        }

        let num_blocks = len.div_ceil(BLOCK_BITS);
        let mut superblocks = Vec::with_capacity(len.div_ceil(SUPERBLOCK_BITS));
        let mut blocks = Vec::with_capacity(num_blocks);

        let mut total: u64 = 0;
        let mut within: u16 = 0;
        for blk in 0..num_blocks {
            if blk % BLOCKS_PER_SUPERBLOCK == 0 {
                superblocks.push(total);
                within = 0;
            }
            blocks.push(within);
            let begin = blk * BLOCK_BITS;
            let end = (begin + BLOCK_BITS).min(len);
            let pop = buf.count_ones_in(begin, end) as u64;
            within += pop as u16;
            total += pop;
        }

        Self {
            superblocks,
            blocks,
            len,
            ones: total as usize,
        }
    }

    /// Count 1-bits in positions `[0, i)` of `buf`.
    ///
    /// `buf` must be the buffer the index was built from. Positions past the
    /// end clamp to the total 1-count.
    #[inline]
    pub fn rank1(&self, buf: &BitBuffer, i: usize) -> usize {
        if i == 0 || self.blocks.is_empty() {
            return 0;
        }
        if i >= self.len {
            return self.ones;
        }
        let blk = i / BLOCK_BITS;
        let sb = blk / BLOCKS_PER_SUPERBLOCK;
        self.superblocks[sb] as usize
            + self.blocks[blk] as usize
            + buf.count_ones_in(blk * BLOCK_BITS, i)
    }

    /// Index footprint in bytes.
    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        self.superblocks.len() * 8 + self.blocks.len() * 2
    }
}
