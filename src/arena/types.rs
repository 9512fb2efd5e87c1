/*!
 * Arena Types
 * Common types for arena allocation
 */

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Arena operation result
pub type ArenaResult<T> = Result<T, ArenaError>;

/// Arena errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    #[error("invalid capacity: an arena must hold at least one byte")]
    InvalidCapacity(usize),

    #[error("zero-size allocation request")]
    ZeroSize,

    #[error("arena exhausted: requested {requested} bytes (+{padding} padding), used {used} / {capacity} bytes")]
    Exhausted {
        requested: usize,
        padding: usize,
        used: usize,
        capacity: usize,
    },

    #[error("expand rejected: requested {requested} bytes does not grow past current capacity {capacity} bytes")]
    NotGrowing { requested: usize, capacity: usize },

    #[error("backing allocation of {0} bytes failed")]
    AllocationFailed(usize),
}

/// Handle to a block carved out of an arena
///
/// Carries no metadata inside the region itself, only the byte range.
/// Offsets survive `expand` (the backing buffer may move, the offset
/// does not); contents are invalidated by `clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    offset: usize,
    size: usize,
}

impl Block {
    pub(super) fn new(offset: usize, size: usize) -> Self {
        Self { offset, size }
    }

    /// Byte offset of the block within the arena region
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Block length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Half-open byte range `[offset, offset + size)` within the region
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.size
    }
}

/// Arena statistics
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ArenaStats {
    pub capacity: usize,
    pub used: usize,
    pub available: usize,
    pub usage_percentage: f64,
}

impl ArenaStats {
    pub(super) fn new(capacity: usize, used: usize) -> Self {
        Self {
            capacity,
            used,
            available: capacity - used,
            usage_percentage: (used as f64 / capacity as f64) * 100.0,
        }
    }
}
