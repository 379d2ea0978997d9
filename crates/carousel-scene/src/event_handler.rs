//! Pointer enter/leave derivation and the hover handler capability.
//!
//! Hosts only report raw cursor positions. `PointerTracker` compares the
//! hovered chain (hit element plus ancestors) between moves and emits
//! `Enter`/`Leave` per element, leaves before enters.

use serde::{Deserialize, Serialize};

use crate::element::ElementId;
use crate::hit_region::HitRegionRegistry;
use crate::scene::SceneCtx;

/// Result of an event handling operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled
    Handled,
    /// Event was not applicable (e.g. an inactive card)
    Ignored,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Handled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerEventKind {
    Enter,
    Leave,
}

/// A pointer crossing an element boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub element: ElementId,
    pub kind: PointerEventKind,
}

impl PointerEvent {
    pub fn enter(element: ElementId) -> Self {
        Self {
            element,
            kind: PointerEventKind::Enter,
        }
    }

    pub fn leave(element: ElementId) -> Self {
        Self {
            element,
            kind: PointerEventKind::Leave,
        }
    }
}

/// Capability attached to an element for the lifetime of a listener binding.
pub trait HoverHandler {
    fn on_enter(&mut self, ctx: &mut SceneCtx<'_>) -> EventResult;
    fn on_leave(&mut self, ctx: &mut SceneCtx<'_>) -> EventResult;

    fn handle_pointer(&mut self, kind: PointerEventKind, ctx: &mut SceneCtx<'_>) -> EventResult {
        match kind {
            PointerEventKind::Enter => self.on_enter(ctx),
            PointerEventKind::Leave => self.on_leave(ctx),
        }
    }
}

/// Tracks which elements the pointer is currently over.
#[derive(Debug, Default)]
pub struct PointerTracker {
    /// Innermost first.
    hovered: Vec<ElementId>,
    position: Option<[f32; 2]>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the pointer and return the boundary crossings it caused.
    pub fn move_to(&mut self, x: f32, y: f32, regions: &HitRegionRegistry) -> Vec<PointerEvent> {
        self.position = Some([x, y]);
        let chain = regions.hover_chain(x, y);
        self.transition_to(chain)
    }

    /// The pointer left the surface entirely.
    pub fn leave_surface(&mut self) -> Vec<PointerEvent> {
        self.position = None;
        self.transition_to(Vec::new())
    }

    /// Forget an element without emitting a leave (it was unmounted).
    pub fn forget(&mut self, element: &ElementId) {
        self.hovered.retain(|e| e != element);
    }

    pub fn reset(&mut self) {
        self.hovered.clear();
        self.position = None;
    }

    pub fn is_hovered(&self, element: &ElementId) -> bool {
        self.hovered.contains(element)
    }

    pub fn position(&self) -> Option<[f32; 2]> {
        self.position
    }

    fn transition_to(&mut self, chain: Vec<ElementId>) -> Vec<PointerEvent> {
        let mut events: Vec<PointerEvent> = self
            .hovered
            .iter()
            .filter(|e| !chain.contains(e))
            .cloned()
            .map(PointerEvent::leave)
            .collect();

        // Outermost first, like DOM mouseenter ordering.
        events.extend(
            chain
                .iter()
                .rev()
                .filter(|e| !self.hovered.contains(e))
                .cloned()
                .map(PointerEvent::enter),
        );

        self.hovered = chain;
        events
    }
}
