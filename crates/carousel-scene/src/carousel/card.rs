//! Card renderer: one visible slot.
//!
//! A card's look is a pure function of whether it holds the center slot.
//! The active card additionally owns a hover binding on its own element that
//! scales its content up on enter and back on leave. That binding is
//! independent of the controller's container binding and lives exactly as
//! long as the card stays active.

use serde::{Deserialize, Serialize};

use super::items::Item;
use super::rotation::Slot;
use super::settings::{CarouselSettings, Emphasis};
use crate::animation::{AnimatableProperty, AnimationManager, TransitionSpec};
use crate::element::ElementId;
use crate::event_handler::{EventResult, HoverHandler};
use crate::listeners::{ListenerId, ListenerOwner};
use crate::scene::SceneCtx;

/// Static visual state derived from the active flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardStyle {
    pub opacity: f32,
    pub blur_px: f32,
    pub z_index: i32,
}

impl CardStyle {
    pub const ACTIVE: CardStyle = CardStyle {
        opacity: 1.0,
        blur_px: 0.0,
        z_index: 1,
    };

    pub const INACTIVE: CardStyle = CardStyle {
        opacity: 0.3,
        blur_px: 10.0,
        z_index: 0,
    };

    pub fn for_active(active: bool) -> Self {
        if active { Self::ACTIVE } else { Self::INACTIVE }
    }
}

/// Media element hosted by a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaSource {
    pub uri: String,
    pub autoplay: bool,
    pub looped: bool,
    pub muted: bool,
}

impl MediaSource {
    /// Silent looping background clip.
    pub fn looping(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            autoplay: true,
            looped: true,
            muted: true,
        }
    }
}

/// Everything a host needs to draw one card this frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub element: ElementId,
    pub item_id: u32,
    pub label: String,
    pub media: MediaSource,
    pub slot: Slot,
    pub active: bool,
    pub emphasized: bool,
    pub opacity: f32,
    pub blur_px: f32,
    pub z_index: i32,
    /// Slot offset in percent of the card size.
    pub offset_pct: [f32; 2],
    pub content_scale: f32,
    /// Vertical content offset in percent of the card height.
    pub content_offset_pct: f32,
}

#[derive(Debug)]
pub struct CardRenderer {
    item: Item,
    element: ElementId,
    slot: Slot,
    active: bool,
    emphasized: bool,
    listener: Option<ListenerId>,
    emphasis: Emphasis,
    hover_transition: TransitionSpec,
}

impl CardRenderer {
    pub fn new(item: Item, slot: Slot, settings: &CarouselSettings) -> Self {
        Self {
            element: ElementId::card(item.id),
            item,
            slot,
            active: false,
            emphasized: false,
            listener: None,
            emphasis: settings.emphasis,
            hover_transition: settings.hover_transition,
        }
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn element(&self) -> &ElementId {
        &self.element
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    pub fn set_slot(&mut self, slot: Slot) {
        self.slot = slot;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_emphasized(&self) -> bool {
        self.emphasized
    }

    pub fn listener(&self) -> Option<ListenerId> {
        self.listener
    }

    pub fn style(&self) -> CardStyle {
        CardStyle::for_active(self.active)
    }

    /// Re-bind hover handling when the active state flips.
    ///
    /// Losing the center slot drops the binding and reverts any emphasis, so
    /// an inactive card never stays enlarged.
    pub fn set_active(&mut self, active: bool, ctx: &mut SceneCtx<'_>) {
        if self.active == active {
            return;
        }
        if !active && self.emphasized {
            self.relax(ctx);
        }
        self.active = active;
        self.rebind(ctx);
    }

    /// Release the hover binding before the card is dropped.
    pub fn teardown(&mut self, ctx: &mut SceneCtx<'_>) {
        if let Some(id) = self.listener.take() {
            ctx.listeners.detach(id);
        }
        self.active = false;
        self.emphasized = false;
    }

    fn rebind(&mut self, ctx: &mut SceneCtx<'_>) {
        if let Some(id) = self.listener.take() {
            ctx.listeners.detach(id);
        }
        if !self.active {
            return;
        }
        if !ctx.regions.contains(&self.element) {
            log::warn!("{} not mounted; skipping hover listeners", self.element);
            return;
        }
        self.listener = Some(
            ctx.listeners
                .attach(self.element.clone(), ListenerOwner::Card(self.item.id)),
        );
    }

    fn relax(&mut self, ctx: &mut SceneCtx<'_>) {
        let spec = self.hover_transition;
        ctx.animations
            .animate_to(&self.element, AnimatableProperty::ContentScale, 1.0, &spec);
        ctx.animations
            .animate_to(&self.element, AnimatableProperty::ContentY, 0.0, &spec);
        self.emphasized = false;
    }

    pub fn view(&self, animations: &AnimationManager) -> CardView {
        let style = self.style();
        let value = |property: AnimatableProperty| animations.value_or_rest(&self.element, property);
        CardView {
            element: self.element.clone(),
            item_id: self.item.id,
            label: self.item.label(),
            media: MediaSource::looping(self.item.media.clone()),
            slot: self.slot,
            active: self.active,
            emphasized: self.emphasized,
            opacity: style.opacity,
            blur_px: style.blur_px,
            z_index: style.z_index,
            offset_pct: [
                value(AnimatableProperty::SlotX),
                value(AnimatableProperty::SlotY),
            ],
            content_scale: value(AnimatableProperty::ContentScale),
            content_offset_pct: value(AnimatableProperty::ContentY),
        }
    }
}

impl HoverHandler for CardRenderer {
    fn on_enter(&mut self, ctx: &mut SceneCtx<'_>) -> EventResult {
        if !self.active {
            return EventResult::Ignored;
        }
        let spec = self.hover_transition;
        ctx.animations.animate_to(
            &self.element,
            AnimatableProperty::ContentScale,
            self.emphasis.scale,
            &spec,
        );
        ctx.animations.animate_to(
            &self.element,
            AnimatableProperty::ContentY,
            self.emphasis.lift_pct,
            &spec,
        );
        self.emphasized = true;
        EventResult::Handled
    }

    fn on_leave(&mut self, ctx: &mut SceneCtx<'_>) -> EventResult {
        if !self.active {
            return EventResult::Ignored;
        }
        self.relax(ctx);
        EventResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::items::ItemList;
    use crate::hit_region::{HitRegionRegistry, Rect};
    use crate::listeners::ListenerRegistry;

    struct Harness {
        animations: AnimationManager,
        regions: HitRegionRegistry,
        listeners: ListenerRegistry,
    }

    impl Harness {
        fn new() -> Self {
            let mut regions = HitRegionRegistry::new();
            regions.register(ElementId::card(4), Rect::new(0.0, 0.0, 320.0, 180.0), None);
            Self {
                animations: AnimationManager::new(),
                regions,
                listeners: ListenerRegistry::new(),
            }
        }

        fn ctx(&mut self) -> SceneCtx<'_> {
            SceneCtx::new(&mut self.animations, &mut self.regions, &mut self.listeners)
        }
    }

    fn card() -> CardRenderer {
        let settings = CarouselSettings::new(ItemList::numbered(5).unwrap());
        CardRenderer::new(Item::new(4, "media/4.webm"), Slot::Center, &settings)
    }

    #[test]
    fn test_style_follows_active_flag() {
        let mut h = Harness::new();
        let mut card = card();
        assert_eq!(card.style(), CardStyle::INACTIVE);

        card.set_active(true, &mut h.ctx());
        assert_eq!(card.style(), CardStyle::ACTIVE);
        let view = card.view(&h.animations);
        assert_eq!(view.opacity, 1.0);
        assert_eq!(view.blur_px, 0.0);
        assert_eq!(view.z_index, 1);
        assert_eq!(view.label, "5");
        assert!(view.media.autoplay && view.media.looped && view.media.muted);
    }

    #[test]
    fn test_binding_only_while_active() {
        let mut h = Harness::new();
        let mut card = card();
        card.set_active(true, &mut h.ctx());
        assert_eq!(h.listeners.count_for(&ElementId::card(4)), 1);

        card.set_active(true, &mut h.ctx());
        assert_eq!(h.listeners.count_for(&ElementId::card(4)), 1);

        card.set_active(false, &mut h.ctx());
        assert_eq!(card.listener(), None);
        assert!(h.listeners.is_empty());
    }

    #[test]
    fn test_hover_emphasis_round_trip() {
        let mut h = Harness::new();
        let mut card = card();
        card.set_active(true, &mut h.ctx());

        assert!(card.on_enter(&mut h.ctx()).is_handled());
        assert!(card.is_emphasized());
        h.animations.update(500.0);
        let view = card.view(&h.animations);
        assert!((view.content_scale - 1.4).abs() < 1e-4);
        assert!((view.content_offset_pct + 20.0).abs() < 1e-4);

        card.on_leave(&mut h.ctx());
        h.animations.update(500.0);
        let view = card.view(&h.animations);
        assert!((view.content_scale - 1.0).abs() < 1e-4);
        assert!(view.content_offset_pct.abs() < 1e-4);
        assert!(!view.emphasized);
    }

    #[test]
    fn test_inactive_card_ignores_hover() {
        let mut h = Harness::new();
        let mut card = card();
        assert_eq!(card.on_enter(&mut h.ctx()), EventResult::Ignored);
        assert_eq!(h.animations.active_count(), 0);
    }

    #[test]
    fn test_deactivation_reverts_emphasis() {
        let mut h = Harness::new();
        let mut card = card();
        card.set_active(true, &mut h.ctx());
        card.on_enter(&mut h.ctx());
        h.animations.update(500.0);

        card.set_active(false, &mut h.ctx());
        h.animations.update(500.0);
        assert!(!card.is_emphasized());
        assert!((card.view(&h.animations).content_scale - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_skips_binding_when_unmounted() {
        let mut h = Harness::new();
        h.regions.clear();
        let mut card = card();
        card.set_active(true, &mut h.ctx());
        assert!(card.is_active());
        assert_eq!(card.listener(), None);
    }
}
