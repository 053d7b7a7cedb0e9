//! Circular display-order computation.
//!
//! Items live in a fixed ring: the item at the anchor position occupies slot
//! 0 and every other item's slot is its forward distance from the anchor.
//! Recomputing slots after a slide is what makes the strip appear to rotate
//! while the host's element order stays fixed.

/// Display slot of `index` relative to `position` in a ring of `item_count`
/// items.
///
/// For a fixed `position` the mapping is a bijection from indices to slots,
/// and `display_order(p, p, n) == 0` for every valid anchor `p`: slot 0
/// always identifies the item at the anchor.
///
/// Callers must keep `item_count >= 1` and both `index` and `position` below
/// it; an empty collection has no defined order.
#[must_use]
pub fn display_order(index: usize, position: usize, item_count: usize) -> usize {
    debug_assert!(item_count >= 1, "display order over an empty collection");
    debug_assert!(index < item_count && position < item_count);
    if index >= position {
        index - position
    } else {
        item_count - (position - index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_maps_to_slot_zero() {
        for n in 1..6 {
            for p in 0..n {
                assert_eq!(display_order(p, p, n), 0);
            }
        }
    }

    #[test]
    fn wraps_indices_behind_the_anchor() {
        // n=5, anchor 3: 3->0, 4->1, 0->2, 1->3, 2->4
        assert_eq!(display_order(3, 3, 5), 0);
        assert_eq!(display_order(4, 3, 5), 1);
        assert_eq!(display_order(0, 3, 5), 2);
        assert_eq!(display_order(1, 3, 5), 3);
        assert_eq!(display_order(2, 3, 5), 4);
    }
}
