//! Core animation types.
//!
//! - `AnimationId`: unique identifier for a running transition
//! - `AnimationState`: lifecycle of a transition
//! - `AnimatableProperty`: the card properties the carousel animates

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for an animation instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimationId(pub u64);

impl AnimationId {
    /// Generate a new unique animation ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for AnimationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Current state of an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationState {
    #[default]
    Running,
    Finished,
}

/// Animatable properties of a card element.
///
/// Offsets are percentages of the element's own size, matching how the slot
/// paths are authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimatableProperty {
    /// Horizontal slot offset of the whole card.
    SlotX,
    /// Vertical slot offset of the whole card.
    SlotY,
    /// Uniform scale of the card content (hover emphasis).
    ContentScale,
    /// Vertical offset of the card content (hover emphasis).
    ContentY,
    Opacity,
    /// Blur radius in pixels.
    Blur,
}

impl AnimatableProperty {
    /// Value an element shows when nothing has animated the property yet.
    pub fn resting_value(self) -> f32 {
        match self {
            Self::SlotX | Self::SlotY | Self::ContentY | Self::Blur => 0.0,
            Self::ContentScale | Self::Opacity => 1.0,
        }
    }
}
