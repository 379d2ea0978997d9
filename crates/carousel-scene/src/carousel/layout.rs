//! Geometry of the container and slot elements.

use super::rotation::Slot;
use super::settings::CardLayout;
use crate::hit_region::Rect;

impl CardLayout {
    /// Container box: one row of three cards, with room below for the
    /// lowered side slot.
    pub fn container_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.card_width * 3.0, self.card_height * 1.2)
    }

    /// Untranslated box of the element in `slot`'s column.
    pub fn base_rect(&self, slot: Slot) -> Rect {
        Rect::new(
            self.card_width * slot.column() as f32,
            0.0,
            self.card_width,
            self.card_height,
        )
    }

    /// Box of the element in `slot` after a percentage offset.
    pub fn card_rect(&self, slot: Slot, offset_pct: [f32; 2]) -> Rect {
        self.base_rect(slot).translated(
            offset_pct[0] * self.card_width / 100.0,
            offset_pct[1] * self.card_height / 100.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_spans_three_columns() {
        let layout = CardLayout {
            card_width: 100.0,
            card_height: 50.0,
        };
        assert_eq!(layout.container_rect(), Rect::new(0.0, 0.0, 300.0, 60.0));
    }

    #[test]
    fn test_card_rect_applies_percent_offsets() {
        let layout = CardLayout {
            card_width: 100.0,
            card_height: 50.0,
        };
        assert_eq!(
            layout.card_rect(Slot::Left, [100.0, 20.0]),
            Rect::new(100.0, 10.0, 100.0, 50.0)
        );
        assert_eq!(
            layout.card_rect(Slot::Center, [-55.0, 0.0]),
            Rect::new(45.0, 0.0, 100.0, 50.0)
        );
        assert_eq!(
            layout.card_rect(Slot::Right, [-45.0, 0.0]),
            Rect::new(155.0, 0.0, 100.0, 50.0)
        );
    }
}
