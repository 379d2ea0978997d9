//! Property transitions.
//!
//! - `TransitionSpec`: duration and easing shared by a group of requests
//! - `ActiveTransition`: runtime state of one in-progress property tween
//!
//! # Example
//!
//! ```
//! use carousel_scene::animation::{EasingFunction, TransitionSpec};
//!
//! let spec = TransitionSpec::new(2000.0).with_easing(EasingFunction::CubicOut);
//! assert_eq!(spec.duration_ms, 2000.0);
//! ```

use serde::{Deserialize, Serialize};

use super::easing::EasingFunction;
use super::interpolate::Interpolate;
use super::types::{AnimatableProperty, AnimationId, AnimationState};
use crate::element::ElementId;

/// Timing for a transition request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionSpec {
    pub duration_ms: f32,
    pub easing: EasingFunction,
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self {
            duration_ms: 300.0,
            easing: EasingFunction::Ease,
        }
    }
}

impl TransitionSpec {
    pub fn new(duration_ms: f32) -> Self {
        Self {
            duration_ms,
            ..Self::default()
        }
    }

    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }
}

/// An in-progress tween of one property on one element.
#[derive(Debug, Clone)]
pub struct ActiveTransition {
    pub id: AnimationId,
    pub element: ElementId,
    pub property: AnimatableProperty,
    pub from_value: f32,
    pub to_value: f32,
    pub duration_ms: f32,
    /// Time since creation or the last restart.
    pub elapsed_ms: f32,
    pub easing: EasingFunction,
    pub state: AnimationState,
}

impl ActiveTransition {
    pub fn new(
        element: ElementId,
        property: AnimatableProperty,
        from_value: f32,
        to_value: f32,
        spec: &TransitionSpec,
    ) -> Self {
        Self {
            id: AnimationId::new(),
            element,
            property,
            from_value,
            to_value,
            duration_ms: spec.duration_ms,
            elapsed_ms: 0.0,
            easing: spec.easing,
            state: AnimationState::Running,
        }
    }

    /// Current interpolated value.
    pub fn current_value(&self) -> f32 {
        match self.state {
            AnimationState::Finished => self.to_value,
            AnimationState::Running => {
                let eased = self.easing.evaluate(self.progress());
                self.from_value.interpolate(&self.to_value, eased)
            }
        }
    }

    /// Advance time. Returns `false` once the transition has finished.
    pub fn update(&mut self, delta_ms: f32) -> bool {
        if self.state == AnimationState::Finished {
            return false;
        }
        self.elapsed_ms += delta_ms;
        if self.elapsed_ms >= self.duration_ms {
            self.state = AnimationState::Finished;
            false
        } else {
            true
        }
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration_ms > 0.0 {
            (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Restart with explicit endpoints, overriding whatever was in flight.
    pub fn restart(&mut self, from_value: f32, to_value: f32, spec: &TransitionSpec) {
        self.from_value = from_value;
        self.to_value = to_value;
        self.duration_ms = spec.duration_ms;
        self.elapsed_ms = 0.0;
        self.easing = spec.easing;
        self.state = AnimationState::Running;
    }
}
