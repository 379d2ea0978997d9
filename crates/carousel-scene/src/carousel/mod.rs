//! The tri-offset carousel widget.
//!
//! ```text
//! CarouselController ── rotation, pause flag, autoplay timer, container hover
//!        │ window (left, center, right)
//!        ▼
//! CardRenderer × 3 ──── per-card style and active-card hover emphasis
//! ```

pub mod card;
pub mod controller;
pub mod items;
pub mod layout;
pub mod rotation;
pub mod settings;
pub mod timer;

pub use card::{CardRenderer, CardStyle, CardView, MediaSource};
pub use controller::CarouselController;
pub use items::{Item, ItemList, MIN_ITEMS};
pub use rotation::{RotationState, Slot, VisibleWindow};
pub use settings::{CardLayout, CarouselSettings, Emphasis, SlotMotion, SlotPath};
pub use timer::IntervalTimer;
