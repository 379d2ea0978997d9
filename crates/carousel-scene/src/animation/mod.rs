//! Tweening engine for card slot moves and hover emphasis.
//!
//! # Architecture
//!
//! ```text
//! AnimationManager
//!   ├── Active transitions, one per (element, property)
//!   ├── Settled values of finished transitions
//!   └── Lifecycle event queue
//! ```

pub mod easing;
pub mod events;
pub mod interpolate;
pub mod manager;
pub mod transition;
pub mod types;

pub use easing::{EasingFunction, StepPosition};
pub use events::{EventQueue, TransitionEvent};
pub use interpolate::Interpolate;
pub use manager::AnimationManager;
pub use transition::{ActiveTransition, TransitionSpec};
pub use types::{AnimatableProperty, AnimationId, AnimationState};
