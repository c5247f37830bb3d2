#![forbid(unsafe_code)]

//! Property tests for the gallery cursor.

use folio_gallery::GalleryState;
use proptest::prelude::*;

fn gallery(len: usize) -> GalleryState {
    GalleryState::from_images((0..len).map(|i| format!("{i}.png")).collect())
}

proptest! {
    #[test]
    fn next_cycles_back_to_start(len in 1usize..12, start in 0usize..12) {
        let mut state = gallery(len);
        state.select(start % len);
        let origin = state.current_index();
        for _ in 0..len {
            state.next();
        }
        prop_assert_eq!(state.current_index(), origin);
    }

    #[test]
    fn previous_cycles_back_to_start(len in 1usize..12, start in 0usize..12) {
        let mut state = gallery(len);
        state.select(start % len);
        let origin = state.current_index();
        for _ in 0..len {
            state.previous();
        }
        prop_assert_eq!(state.current_index(), origin);
    }

    #[test]
    fn previous_undoes_next(len in 1usize..12, steps in 0usize..24) {
        let mut state = gallery(len);
        for _ in 0..steps {
            state.next();
        }
        let before = state.current_index();
        state.next();
        state.previous();
        prop_assert_eq!(state.current_index(), before);
    }

    #[test]
    fn empty_gallery_never_moves(steps in prop::collection::vec(0u8..2, 0..32)) {
        let mut state = gallery(0);
        for step in steps {
            if step == 0 { state.next() } else { state.previous() }
            prop_assert_eq!(state.current_index(), 0);
        }
    }

    #[test]
    fn cursor_stays_in_range_under_any_op_sequence(
        len in 0usize..12,
        raw_ops in prop::collection::vec((0u8..3, 0usize..12), 0..64),
    ) {
        let mut state = gallery(len);
        for (kind, index) in raw_ops {
            match kind {
                0 => state.next(),
                1 => state.previous(),
                _ if len > 0 => state.select(index % len),
                _ => {}
            }
            if !state.is_empty() {
                prop_assert!(state.current_index() < state.len());
            }
        }
    }

    #[test]
    fn select_lands_where_asked(len in 1usize..12, index in 0usize..12) {
        let mut state = gallery(len);
        let target = index % len;
        state.select(target);
        prop_assert_eq!(state.current_index(), target);
    }
}
