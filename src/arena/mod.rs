/*!
 * Arena Module
 *
 * Linear (bump) allocator over an owned byte region.
 *
 * ## Allocation Performance
 *
 * - **alloc**: O(1), advances a cursor past alignment padding plus the block
 * - **clear**: O(1), resets the cursor and reuses the whole region
 * - **expand**: O(n) reallocation, grow-only, preserves the used prefix
 * - **copy_into**: O(n) bulk copy of one arena's used bytes into another
 *
 * ## Lifetime Model
 *
 * Blocks are never freed individually. The arena hands out [`Block`]
 * handles (offset + length) that stay valid until the arena is dropped;
 * their *contents* are logically invalidated by `clear`, which permits
 * the next allocation sequence to overwrite them. Release is RAII: the
 * region is freed exactly once when the [`Arena`] goes out of scope.
 */

mod bump;
mod types;

// Re-export public types
pub use bump::Arena;
pub use types::{ArenaError, ArenaResult, ArenaStats, Block};
