/*!
 * Bump Allocator Implementation
 * Cursor-based carving, reset, growth, and cross-arena copy
 */

use super::types::{ArenaError, ArenaResult, ArenaStats, Block};
use log::{debug, info, trace};
use std::mem;

/// Linear arena allocator
///
/// Owns a contiguous byte region and carves aligned blocks out of it by
/// advancing a cursor. Blocks are never freed individually; `clear`
/// recycles the whole region at once. The handle is move-only, and the
/// region is released exactly once when the arena is dropped.
///
/// Not internally synchronized: all mutation goes through `&mut self`,
/// so one arena belongs to one thread at a time. Distinct arenas are
/// fully independent.
pub struct Arena {
    /// Backing region; its length is the arena capacity and every byte
    /// is initialized (zero-filled on creation and growth)
    region: Vec<u8>,
    /// Offset of the next free byte, `0 <= index <= capacity`
    index: usize,
}

impl Arena {
    /// Create an arena with the given capacity in bytes
    ///
    /// Rejects a zero capacity and reports backing allocation failure
    /// instead of aborting.
    pub fn new(capacity: usize) -> ArenaResult<Self> {
        if capacity == 0 {
            return Err(ArenaError::InvalidCapacity(capacity));
        }

        let mut region = Vec::new();
        region
            .try_reserve_exact(capacity)
            .map_err(|_| ArenaError::AllocationFailed(capacity))?;
        region.resize(capacity, 0);

        info!("Arena initialized with {} bytes", capacity);

        Ok(Self { region, index: 0 })
    }

    /// Carve an aligned block of `size` bytes out of the remaining space
    ///
    /// Computes the absolute address of the cursor, pads it up to the
    /// next multiple of `alignment`, then advances the cursor past the
    /// padding plus the block. The cursor update is atomic with the
    /// bounds check: a failed call leaves the arena untouched.
    ///
    /// `alignment` is in bytes and must be a power of two; alignment 1
    /// never inserts padding. Non-power-of-two values stay bounded but
    /// the resulting address is unspecified.
    pub fn alloc(&mut self, size: usize, alignment: usize) -> ArenaResult<Block> {
        if size == 0 {
            return Err(ArenaError::ZeroSize);
        }

        let alignment = alignment.max(1);
        let address = self.region.as_ptr() as usize + self.index;
        let offset = address % alignment;
        let padding = if offset != 0 { alignment - offset } else { 0 };

        let end = match self
            .index
            .checked_add(padding)
            .and_then(|start| start.checked_add(size))
        {
            Some(end) if end <= self.region.len() => end,
            _ => {
                return Err(ArenaError::Exhausted {
                    requested: size,
                    padding,
                    used: self.index,
                    capacity: self.region.len(),
                });
            }
        };
        let start = self.index + padding;

        self.index = end;
        trace!(
            "Carved {} bytes (+{} padding) at offset {}, {} / {} used",
            size,
            padding,
            start,
            self.index,
            self.region.len()
        );

        Ok(Block::new(start, size))
    }

    /// Carve a block sized and aligned for `len` values of `T`
    ///
    /// A byte size that overflows `usize` saturates, so the request is
    /// reported as exhaustion at the saturated size rather than wrapping.
    pub fn alloc_array<T>(&mut self, len: usize) -> ArenaResult<Block> {
        let size = mem::size_of::<T>().saturating_mul(len);
        self.alloc(size, mem::align_of::<T>())
    }

    /// Reset the cursor to the start of the region
    ///
    /// Capacity and region contents are untouched; previously returned
    /// blocks keep their offsets but their bytes may be overwritten by
    /// the next allocation sequence.
    pub fn clear(&mut self) {
        debug!("Arena cleared, {} bytes recycled", self.index);
        self.index = 0;
    }

    /// Grow the region to `new_capacity` bytes
    ///
    /// Strictly grow-only: a capacity at or below the current one is
    /// rejected. Bytes in `[0, index)` and the cursor are preserved. On
    /// reallocation failure the arena keeps its original region and
    /// capacity. The backing memory may move, so raw addresses derived
    /// before the call are invalidated; block offsets remain valid.
    pub fn expand(&mut self, new_capacity: usize) -> ArenaResult<()> {
        let capacity = self.region.len();
        if new_capacity <= capacity {
            return Err(ArenaError::NotGrowing {
                requested: new_capacity,
                capacity,
            });
        }

        self.region
            .try_reserve_exact(new_capacity - capacity)
            .map_err(|_| ArenaError::AllocationFailed(new_capacity))?;
        self.region.resize(new_capacity, 0);

        info!("Arena expanded from {} to {} bytes", capacity, new_capacity);
        Ok(())
    }

    /// Bulk-copy this arena's used bytes into `dest`
    ///
    /// The amount copied is truncated by capacity comparison: `index`
    /// bytes when the destination capacity exceeds the source capacity,
    /// otherwise the destination capacity. The destination cursor is set
    /// to the number of bytes copied, discarding its own allocation
    /// progress. Returns the byte count.
    pub fn copy_into(&self, dest: &mut Arena) -> usize {
        let copy_size = if dest.capacity() > self.capacity() {
            self.index
        } else {
            dest.capacity()
        };

        dest.region[..copy_size].copy_from_slice(&self.region[..copy_size]);
        dest.index = copy_size;

        debug!(
            "Copied {} bytes between arenas ({} / {} source used)",
            copy_size,
            self.index,
            self.capacity()
        );

        copy_size
    }

    /// Total region length in bytes
    #[inline]
    pub fn capacity(&self) -> usize {
        self.region.len()
    }

    /// Bytes consumed so far, padding included
    #[inline]
    pub fn used(&self) -> usize {
        self.index
    }

    /// Bytes remaining before exhaustion (ignoring future padding)
    #[inline]
    pub fn available(&self) -> usize {
        self.region.len() - self.index
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index == 0
    }

    /// Snapshot of capacity, usage, and utilization
    pub fn stats(&self) -> ArenaStats {
        ArenaStats::new(self.region.len(), self.index)
    }

    /// Read access to a block's bytes
    ///
    /// # Panics
    /// Panics if `block` was not produced by this arena (out of range).
    #[inline]
    pub fn bytes(&self, block: Block) -> &[u8] {
        &self.region[block.range()]
    }

    /// Write access to a block's bytes
    ///
    /// # Panics
    /// Panics if `block` was not produced by this arena (out of range).
    #[inline]
    pub fn bytes_mut(&mut self, block: Block) -> &mut [u8] {
        &mut self.region[block.range()]
    }

    /// Absolute address of a block's first byte
    ///
    /// Only stable until the next `expand`; the region may move.
    #[inline]
    pub fn block_address(&self, block: Block) -> usize {
        self.region.as_ptr() as usize + block.offset()
    }
}
