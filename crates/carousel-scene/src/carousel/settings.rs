//! Validated, immutable inputs for one carousel instance.

use carousel_config::{CarouselConfig, SlotPathConfig};

use super::items::ItemList;
use super::rotation::Slot;
use crate::animation::{EasingFunction, TransitionSpec};
use crate::error::{CarouselError, Result};

/// Start and end slot offsets, in percent of the card size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotPath {
    pub from: [f32; 2],
    pub to: [f32; 2],
}

impl From<SlotPathConfig> for SlotPath {
    fn from(config: SlotPathConfig) -> Self {
        Self {
            from: config.from,
            to: config.to,
        }
    }
}

/// Per-slot entry paths used on every recompute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotMotion {
    pub left: SlotPath,
    pub center: SlotPath,
    pub right: SlotPath,
}

impl SlotMotion {
    pub fn path(&self, slot: Slot) -> SlotPath {
        match slot {
            Slot::Left => self.left,
            Slot::Center => self.center,
            Slot::Right => self.right,
        }
    }
}

impl Default for SlotMotion {
    fn default() -> Self {
        let motion = carousel_config::MotionConfig::default();
        Self {
            left: motion.left.into(),
            center: motion.center.into(),
            right: motion.right.into(),
        }
    }
}

/// Hover emphasis applied to the active card's content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emphasis {
    pub scale: f32,
    pub lift_pct: f32,
}

impl Default for Emphasis {
    fn default() -> Self {
        Self {
            scale: 1.4,
            lift_pct: -20.0,
        }
    }
}

/// Card size used to turn percentage offsets into hit rectangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardLayout {
    pub card_width: f32,
    pub card_height: f32,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            card_width: 320.0,
            card_height: 180.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselSettings {
    pub items: ItemList,
    pub tick_interval_ms: f32,
    pub autoplay: bool,
    /// Shared timing of the three slot transitions.
    pub slot_transition: TransitionSpec,
    /// Timing of the hover emphasis (shorter than the slot transition).
    pub hover_transition: TransitionSpec,
    pub motion: SlotMotion,
    pub emphasis: Emphasis,
    pub layout: CardLayout,
}

impl CarouselSettings {
    /// Default timing (3000 ms ticks, 2000 ms cubic-out slots, 500 ms hover).
    pub fn new(items: ItemList) -> Self {
        Self {
            items,
            tick_interval_ms: 3000.0,
            autoplay: true,
            slot_transition: TransitionSpec::new(2000.0).with_easing(EasingFunction::CubicOut),
            hover_transition: TransitionSpec::new(500.0).with_easing(EasingFunction::EaseOut),
            motion: SlotMotion::default(),
            emphasis: Emphasis::default(),
            layout: CardLayout::default(),
        }
    }

    pub fn from_config(config: &CarouselConfig) -> Result<Self> {
        let items = ItemList::from_config(&config.items)?;
        let timing = &config.timing;
        let easing: EasingFunction = config.motion.easing.parse()?;

        Ok(Self {
            items,
            tick_interval_ms: positive("tick interval", timing.tick_interval_ms)?,
            autoplay: timing.autoplay,
            slot_transition: TransitionSpec::new(non_negative("transition", timing.transition_ms)?)
                .with_easing(easing),
            hover_transition: TransitionSpec::new(non_negative("hover", timing.hover_ms)?)
                .with_easing(EasingFunction::EaseOut),
            motion: SlotMotion {
                left: config.motion.left.into(),
                center: config.motion.center.into(),
                right: config.motion.right.into(),
            },
            emphasis: Emphasis {
                scale: config.motion.emphasis_scale,
                lift_pct: config.motion.emphasis_lift_pct,
            },
            layout: CardLayout {
                card_width: config.layout.card_width,
                card_height: config.layout.card_height,
            },
        })
    }

    pub fn with_tick_interval(mut self, tick_interval_ms: f32) -> Self {
        self.tick_interval_ms = tick_interval_ms;
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }
}

fn positive(name: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CarouselError::InvalidDuration { name, value })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CarouselError::InvalidDuration { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_default_config_matches_new() {
        let config = CarouselConfig::default();
        let from_config = CarouselSettings::from_config(&config).unwrap();
        let items = ItemList::from_config(&config.items).unwrap();
        assert_eq!(from_config, CarouselSettings::new(items));
    }

    #[test]
    fn test_rejects_zero_tick() {
        let mut config = CarouselConfig::default();
        config.timing.tick_interval_ms = 0.0;
        assert_eq!(
            CarouselSettings::from_config(&config),
            Err(CarouselError::InvalidDuration {
                name: "tick interval",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_rejects_unknown_easing() {
        let mut config = CarouselConfig::default();
        config.motion.easing = "wobble".to_string();
        assert!(matches!(
            CarouselSettings::from_config(&config),
            Err(CarouselError::UnknownEasing(_))
        ));
    }

    #[test]
    fn test_rejects_short_item_list() {
        let mut config = CarouselConfig::default();
        config.items.truncate(2);
        assert_eq!(
            CarouselSettings::from_config(&config),
            Err(CarouselError::TooFewItems { count: 2 })
        );
    }

    #[test]
    fn test_slot_paths() {
        let motion = SlotMotion::default();
        assert_eq!(motion.path(Slot::Left).to, [100.0, 20.0]);
        assert_eq!(motion.path(Slot::Center).from, [55.0, 0.0]);
        assert_eq!(motion.path(Slot::Right).from, [-100.0, 20.0]);
    }
}
