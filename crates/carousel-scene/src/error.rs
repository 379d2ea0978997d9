//! Error types for the carousel scene.

use thiserror::Error;

/// Result type for carousel operations.
pub type Result<T> = std::result::Result<T, CarouselError>;

/// Errors raised while building a carousel from its inputs.
///
/// Runtime operations (ticks, pointer events) never fail; misconfiguration is
/// caught once, when the item list and settings are constructed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CarouselError {
    /// Fewer than three items were supplied.
    #[error("carousel needs at least 3 items, got {count}")]
    TooFewItems { count: usize },

    /// Two items share the same id.
    #[error("duplicate item id {id}")]
    DuplicateId { id: u32 },

    /// An easing name could not be parsed.
    #[error("unknown easing function: {0}")]
    UnknownEasing(String),

    /// A timing value was zero, negative or not finite.
    #[error("invalid {name}: {value}ms")]
    InvalidDuration { name: &'static str, value: f32 },
}
