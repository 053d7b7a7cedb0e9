use carousel_core::{
    inputs::Command,
    order::display_order,
    state::CarouselState,
};

#[test]
fn singleton_ring_is_a_fixed_point() {
    assert_eq!(display_order(0, 0, 1), 0);

    let mut state = CarouselState::default();
    state = state.apply(Command::Advance { item_count: 1 });
    assert_eq!(state.position, 0);
    assert!(state.sliding);
    state = state.apply(Command::Retreat { item_count: 1 });
    assert_eq!(state.position, 0);
}

#[test]
fn slots_shift_by_one_per_advance() {
    // Moving the anchor forward by one moves every item back by one slot,
    // modulo the ring size.
    for n in 2..=9usize {
        for p in 0..n {
            let next_p = (p + 1) % n;
            for i in 0..n {
                let before = display_order(i, p, n);
                let after = display_order(i, next_p, n);
                assert_eq!(after, (before + n - 1) % n, "n={n} p={p} i={i}");
            }
        }
    }
}

#[test]
fn forward_distance_from_anchor() {
    // Slot equals how many advances it takes to bring the item to the
    // anchor.
    for n in 1..=7usize {
        for p in 0..n {
            for i in 0..n {
                let slot = display_order(i, p, n);
                let mut pos = p;
                for _ in 0..slot {
                    pos = (pos + 1) % n;
                }
                assert_eq!(pos, i);
            }
        }
    }
}

#[test]
fn position_stays_in_range_under_long_random_walks() {
    // Deterministic pseudo-random walk over mixed ring sizes.
    let mut state = CarouselState::default();
    let mut seed = 0x2545_f491u32;
    for _ in 0..10_000 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        let n = 1 + (seed as usize % 9);
        let cmd = if seed & 1 == 0 {
            Command::Advance { item_count: n }
        } else {
            Command::Retreat { item_count: n }
        };
        state = state.apply(cmd);
        assert!(state.position < n, "position {} escaped ring {}", state.position, n);
    }
}
