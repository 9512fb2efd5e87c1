/*!
 * Arena Property Tests
 * Randomized checks of the carving, reset, growth, and copy invariants
 */

use linear_arena::Arena;
use proptest::prelude::*;

fn alignments() -> impl Strategy<Value = usize> {
    prop::sample::select(vec![1usize, 2, 4, 8, 16, 32, 64])
}

proptest! {
    // Every successful carve is aligned, in bounds, and disjoint from
    // every earlier carve; the cursor never runs backwards.
    #[test]
    fn carving_is_aligned_and_monotonic(
        capacity in 1usize..4096,
        requests in prop::collection::vec((1usize..128, alignments()), 1..64),
    ) {
        let mut arena = Arena::new(capacity).unwrap();
        let mut previous_used = 0;
        let mut carved: Vec<(usize, usize)> = Vec::new();

        for (size, alignment) in requests {
            match arena.alloc(size, alignment) {
                Ok(block) => {
                    prop_assert_eq!(block.len(), size);
                    prop_assert_eq!(arena.block_address(block) % alignment, 0);
                    prop_assert!(block.offset() + block.len() <= arena.capacity());

                    for &(offset, len) in &carved {
                        let disjoint = block.offset() >= offset + len
                            || offset >= block.offset() + block.len();
                        prop_assert!(disjoint);
                    }
                    carved.push((block.offset(), block.len()));
                }
                Err(_) => {
                    // Failure leaves the cursor exactly where it was
                    prop_assert_eq!(arena.used(), previous_used);
                }
            }

            prop_assert!(arena.used() >= previous_used);
            prop_assert!(arena.used() <= arena.capacity());
            previous_used = arena.used();
        }
    }

    // After a clear, the entire capacity is allocatable again.
    #[test]
    fn clear_makes_full_capacity_reusable(
        capacity in 1usize..2048,
        sizes in prop::collection::vec(1usize..64, 0..32),
    ) {
        let mut arena = Arena::new(capacity).unwrap();
        for size in sizes {
            let _ = arena.alloc(size, 1);
        }

        arena.clear();

        prop_assert_eq!(arena.used(), 0);
        prop_assert_eq!(arena.capacity(), capacity);
        prop_assert!(arena.alloc(capacity, 1).is_ok());
    }

    // Growth keeps the used prefix byte-for-byte and the cursor in place.
    #[test]
    fn expand_preserves_used_prefix(
        payload in prop::collection::vec(any::<u8>(), 1..512),
        extra in 1usize..512,
    ) {
        let mut arena = Arena::new(payload.len()).unwrap();
        let block = arena.alloc(payload.len(), 1).unwrap();
        arena.bytes_mut(block).copy_from_slice(&payload);

        let new_capacity = payload.len() + extra;
        arena.expand(new_capacity).unwrap();

        prop_assert_eq!(arena.capacity(), new_capacity);
        prop_assert_eq!(arena.used(), payload.len());
        prop_assert_eq!(arena.bytes(block), payload.as_slice());
    }

    // The copy amount follows the capacity-comparison truncation rule.
    #[test]
    fn copy_truncates_by_capacity_comparison(
        src_capacity in 1usize..1024,
        dest_capacity in 1usize..1024,
        used_fraction in 0.0f64..=1.0,
    ) {
        let mut src = Arena::new(src_capacity).unwrap();
        let used = ((src_capacity as f64) * used_fraction) as usize;
        if used > 0 {
            let block = src.alloc(used, 1).unwrap();
            src.bytes_mut(block).fill(0xC3);
        }

        let mut dest = Arena::new(dest_capacity).unwrap();

        // Window over the destination prefix that must end up holding
        // meaningfully-written source bytes
        let expected = if dest_capacity > src_capacity { used } else { dest_capacity };
        let meaningful = used.min(expected);
        let window = if meaningful > 0 {
            Some(dest.alloc(meaningful, 1).unwrap())
        } else {
            None
        };

        let copied = src.copy_into(&mut dest);

        prop_assert_eq!(copied, expected);
        prop_assert_eq!(dest.used(), expected);
        if let Some(window) = window {
            prop_assert!(dest.bytes(window).iter().all(|&byte| byte == 0xC3));
        }
    }
}
