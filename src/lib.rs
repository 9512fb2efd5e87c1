/*!
 * Linear Arena Library
 * Bump allocation over an owned, fixed-capacity byte region
 */

pub mod arena;

// Re-exports
pub use arena::{Arena, ArenaError, ArenaResult, ArenaStats, Block};
