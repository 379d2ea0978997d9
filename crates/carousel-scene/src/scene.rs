//! Scene composition: wires the controller, the cards, the animation
//! manager and the pointer surface into one mountable widget.
//!
//! Hosts drive the scene with three inputs (frame time, pointer position,
//! pointer leaving the surface) and read back a display list:
//!
//! ```
//! use carousel_scene::{CarouselScene, CarouselSettings, ItemList};
//!
//! let mut scene = CarouselScene::new(CarouselSettings::new(ItemList::numbered(3).unwrap()));
//! scene.mount();
//! scene.update(3000.0);
//! assert_eq!(scene.controller().center_index(), 1);
//! assert_eq!(scene.views().len(), 3);
//! ```

use crate::animation::{AnimatableProperty, AnimationManager, TransitionEvent};
use crate::carousel::{CardRenderer, CardView, CarouselController, CarouselSettings, Slot};
use crate::element::ElementId;
use crate::event_handler::{HoverHandler, PointerEvent, PointerTracker};
use crate::hit_region::HitRegionRegistry;
use crate::listeners::{ListenerOwner, ListenerRegistry};

/// Mutable services handed to components while they react to input.
pub struct SceneCtx<'a> {
    pub animations: &'a mut AnimationManager,
    pub regions: &'a mut HitRegionRegistry,
    pub listeners: &'a mut ListenerRegistry,
}

impl<'a> SceneCtx<'a> {
    pub fn new(
        animations: &'a mut AnimationManager,
        regions: &'a mut HitRegionRegistry,
        listeners: &'a mut ListenerRegistry,
    ) -> Self {
        Self {
            animations,
            regions,
            listeners,
        }
    }
}

#[derive(Debug)]
pub struct CarouselScene {
    settings: CarouselSettings,
    controller: CarouselController,
    /// Visible cards in left, center, right order.
    cards: Vec<CardRenderer>,
    animations: AnimationManager,
    regions: HitRegionRegistry,
    listeners: ListenerRegistry,
    pointer: PointerTracker,
    mounted: bool,
}

impl CarouselScene {
    pub fn new(settings: CarouselSettings) -> Self {
        Self {
            controller: CarouselController::new(&settings),
            settings,
            cards: Vec::with_capacity(3),
            animations: AnimationManager::new(),
            regions: HitRegionRegistry::new(),
            listeners: ListenerRegistry::new(),
            pointer: PointerTracker::new(),
            mounted: false,
        }
    }

    /// Mount the container, run the first recompute and render the first
    /// three items. Mounting twice is a no-op.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.regions
            .register(ElementId::container(), self.settings.layout.container_rect(), None);

        let mut ctx = SceneCtx::new(&mut self.animations, &mut self.regions, &mut self.listeners);
        self.controller.mount(&mut ctx);
        self.mounted = true;
        self.sync_cards();
    }

    /// Release timer, listeners, regions and animations.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        let mut ctx = SceneCtx::new(&mut self.animations, &mut self.regions, &mut self.listeners);
        self.controller.unmount(&mut ctx);
        for card in &mut self.cards {
            card.teardown(&mut ctx);
        }
        self.cards.clear();
        self.regions.clear();
        self.animations.clear();
        self.pointer.reset();
        self.mounted = false;

        if !self.listeners.is_empty() {
            log::warn!("{} listeners survived unmount", self.listeners.len());
        }
    }

    /// Swap in new settings, remounting if currently mounted.
    pub fn reconfigure(&mut self, settings: CarouselSettings) {
        let was_mounted = self.mounted;
        self.unmount();
        self.controller = CarouselController::new(&settings);
        self.settings = settings;
        if was_mounted {
            self.mount();
        }
    }

    /// Advance one frame: animations first, then autoplay ticks (so freshly
    /// requested transitions start from their first frame), then hit regions.
    pub fn update(&mut self, delta_ms: f32) {
        if !self.mounted {
            return;
        }
        self.animations.update(delta_ms);

        let mut ctx = SceneCtx::new(&mut self.animations, &mut self.regions, &mut self.listeners);
        if self.controller.update(delta_ms, &mut ctx) > 0 {
            self.sync_cards();
        }
        self.refresh_regions();
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if !self.mounted {
            log::debug!("pointer move at ({x}, {y}) ignored: not mounted");
            return;
        }
        let events = self.pointer.move_to(x, y, &self.regions);
        self.dispatch(events);
    }

    pub fn pointer_left(&mut self) {
        if !self.mounted {
            return;
        }
        let events = self.pointer.leave_surface();
        self.dispatch(events);
    }

    fn dispatch(&mut self, events: Vec<PointerEvent>) {
        for event in events {
            for owner in self.listeners.owners_of(&event.element) {
                let mut ctx =
                    SceneCtx::new(&mut self.animations, &mut self.regions, &mut self.listeners);
                match owner {
                    ListenerOwner::Controller => {
                        let before = self.controller.advances();
                        self.controller.handle_pointer(event.kind, &mut ctx);
                        if self.controller.advances() != before {
                            self.sync_cards();
                        }
                    }
                    ListenerOwner::Card(id) => {
                        if let Some(card) = self.cards.iter_mut().find(|c| c.item().id == id) {
                            card.handle_pointer(event.kind, &mut ctx);
                        }
                    }
                }
            }
        }
    }

    /// Bring the card set in line with the controller's window: reuse cards
    /// that stay visible, mount new ones, tear down the ones that left, then
    /// update the active flag.
    fn sync_cards(&mut self) {
        let window = self.controller.window();
        let layout = self.settings.layout;
        let mut ctx = SceneCtx::new(&mut self.animations, &mut self.regions, &mut self.listeners);

        let mut next = Vec::with_capacity(3);
        for (slot, index) in window.slots() {
            let item = self.settings.items.get(index);
            let mut card = match self.cards.iter().position(|c| c.item().id == item.id) {
                Some(pos) => self.cards.swap_remove(pos),
                None => CardRenderer::new(item.clone(), slot, &self.settings),
            };
            card.set_slot(slot);
            let offset = [
                ctx.animations.value_or_rest(card.element(), AnimatableProperty::SlotX),
                ctx.animations.value_or_rest(card.element(), AnimatableProperty::SlotY),
            ];
            ctx.regions.register(
                card.element().clone(),
                layout.card_rect(slot, offset),
                Some(ElementId::container()),
            );
            next.push(card);
        }

        for mut stale in self.cards.drain(..) {
            stale.teardown(&mut ctx);
            ctx.regions.unregister(stale.element());
            ctx.animations.clear_element(stale.element());
            self.pointer.forget(stale.element());
        }

        for card in &mut next {
            card.set_active(card.slot() == Slot::Center, &mut ctx);
            ctx.regions.set_z_index(card.element(), card.style().z_index);
        }
        self.cards = next;
    }

    /// Move card hit regions to their animated positions.
    fn refresh_regions(&mut self) {
        let layout = self.settings.layout;
        for card in &self.cards {
            let offset = [
                self.animations.value_or_rest(card.element(), AnimatableProperty::SlotX),
                self.animations.value_or_rest(card.element(), AnimatableProperty::SlotY),
            ];
            self.regions
                .set_rect(card.element(), layout.card_rect(card.slot(), offset));
        }
    }

    /// Display list for this frame, left to right.
    pub fn views(&self) -> Vec<CardView> {
        self.cards
            .iter()
            .map(|card| card.view(&self.animations))
            .collect()
    }

    pub fn drain_animation_events(&mut self) -> Vec<TransitionEvent> {
        self.animations.drain_events()
    }

    pub fn controller(&self) -> &CarouselController {
        &self.controller
    }

    pub fn cards(&self) -> &[CardRenderer] {
        &self.cards
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    pub fn regions(&self) -> &HitRegionRegistry {
        &self.regions
    }

    pub fn animations(&self) -> &AnimationManager {
        &self.animations
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether something on screen changed since the previous frame.
    pub fn needs_redraw(&self) -> bool {
        self.animations.is_dirty()
    }
}
