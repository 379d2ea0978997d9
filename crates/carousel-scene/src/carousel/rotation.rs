//! Rotation state and the visible window derived from it.
//!
//! The controller keeps only a center index. Everything on screen is a pure
//! function of that index: the card shown in the center slot is the
//! lookahead item `(center + 1) mod N`, flanked by its neighbours.

use serde::{Deserialize, Serialize};

/// Current rotation of a carousel over `len` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RotationState {
    center: usize,
}

impl RotationState {
    /// Rotation at `center`, reduced modulo `len`.
    pub fn new(center: usize, len: usize) -> Self {
        Self {
            center: center % len.max(1),
        }
    }

    pub fn center(&self) -> usize {
        self.center
    }

    /// The single state transition used by both the autoplay tick and the
    /// hover-exit handler.
    #[must_use]
    pub fn advance(self, len: usize) -> Self {
        Self {
            center: (self.center + 1) % len.max(1),
        }
    }

    /// Apply `steps` advances at once.
    #[must_use]
    pub fn advance_by(self, steps: u64, len: usize) -> Self {
        let len = len.max(1);
        let steps = (steps % len as u64) as usize;
        Self {
            center: (self.center + steps) % len,
        }
    }

    /// Index of the item displayed in the center slot.
    pub fn lookahead(&self, len: usize) -> usize {
        (self.center + 1) % len.max(1)
    }
}

/// The three visible slots, left to right in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Left,
    Center,
    Right,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Left, Slot::Center, Slot::Right];

    /// Position in the row of slot elements.
    pub fn column(self) -> usize {
        match self {
            Slot::Left => 0,
            Slot::Center => 1,
            Slot::Right => 2,
        }
    }
}

/// Item indices for the three visible slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleWindow {
    pub left: usize,
    pub center: usize,
    pub right: usize,
}

impl VisibleWindow {
    /// Canonical modulo neighbours of the lookahead index.
    pub fn from_rotation(state: RotationState, len: usize) -> Self {
        let len = len.max(1);
        let center = state.lookahead(len);
        Self {
            left: (center + len - 1) % len,
            center,
            right: (center + 1) % len,
        }
    }

    pub fn index(&self, slot: Slot) -> usize {
        match slot {
            Slot::Left => self.left,
            Slot::Center => self.center,
            Slot::Right => self.right,
        }
    }

    /// `(slot, item index)` pairs in paint order.
    pub fn slots(&self) -> impl Iterator<Item = (Slot, usize)> + '_ {
        Slot::ALL.into_iter().map(move |slot| (slot, self.index(slot)))
    }

    pub fn slot_of(&self, index: usize) -> Option<Slot> {
        Slot::ALL.into_iter().find(|slot| self.index(*slot) == index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps() {
        let state = RotationState::new(2, 3);
        assert_eq!(state.advance(3).center(), 0);
        assert_eq!(RotationState::new(7, 3).center(), 1);
    }

    #[test]
    fn test_advance_by_matches_repeated_advance() {
        for len in 3..=7 {
            for steps in 0..20u64 {
                let mut stepped = RotationState::new(1, len);
                for _ in 0..steps {
                    stepped = stepped.advance(len);
                }
                assert_eq!(RotationState::new(1, len).advance_by(steps, len), stepped);
            }
        }
        assert_eq!(RotationState::new(0, 5).advance_by(u64::MAX, 5).center(), 0);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for len in 3..=12 {
            for start in 0..len {
                let mut state = RotationState::new(start, len);
                for _ in 0..len {
                    state = state.advance(len);
                }
                assert_eq!(state.center(), start, "len {len} start {start}");
            }
        }
    }

    #[test]
    fn test_window_is_pairwise_distinct() {
        for len in 3..=12 {
            for center in 0..len {
                let w = VisibleWindow::from_rotation(RotationState::new(center, len), len);
                assert!(w.left != w.center && w.center != w.right && w.left != w.right);
                assert!(w.left < len && w.center < len && w.right < len);
            }
        }
    }

    #[test]
    fn test_initial_window_is_first_three_items() {
        let w = VisibleWindow::from_rotation(RotationState::default(), 3);
        assert_eq!((w.left, w.center, w.right), (0, 1, 2));

        let w = VisibleWindow::from_rotation(RotationState::default(), 5);
        assert_eq!((w.left, w.center, w.right), (0, 1, 2));
    }

    #[test]
    fn test_window_wraps_at_end() {
        let w = VisibleWindow::from_rotation(RotationState::new(3, 5), 5);
        assert_eq!((w.left, w.center, w.right), (3, 4, 0));

        let w = VisibleWindow::from_rotation(RotationState::new(4, 5), 5);
        assert_eq!((w.left, w.center, w.right), (4, 0, 1));
    }

    #[test]
    fn test_slot_lookup() {
        let w = VisibleWindow::from_rotation(RotationState::new(1, 4), 4);
        assert_eq!(w.slot_of(2), Some(Slot::Center));
        assert_eq!(w.slot_of(0), None);
        let order: Vec<usize> = w.slots().map(|(_, i)| i).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }
}
