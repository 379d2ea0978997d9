//! Three-card rotating carousel: rotation index, autoplay, hover pause and
//! slot animations, driven by frame time and raw pointer input.

pub mod animation;
pub mod carousel;
pub mod element;
pub mod error;
pub mod event_handler;
pub mod hit_region;
pub mod listeners;
pub mod scene;

pub use carousel::{
    CardLayout, CardRenderer, CardStyle, CardView, CarouselController, CarouselSettings, Item,
    ItemList, MediaSource, RotationState, Slot, VisibleWindow,
};
pub use element::ElementId;
pub use error::{CarouselError, Result};
pub use event_handler::{EventResult, HoverHandler, PointerEvent, PointerEventKind, PointerTracker};
pub use hit_region::{HitRegionRegistry, Rect};
pub use listeners::{ListenerId, ListenerOwner, ListenerRegistry};
pub use scene::{CarouselScene, SceneCtx};
