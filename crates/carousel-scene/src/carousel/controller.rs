//! Carousel controller: rotation, autoplay and container hover.
//!
//! The controller is the only owner of the center index and the pause flag.
//! Every index change, whether from the autoplay timer or from the pointer
//! leaving the container, goes through [`CarouselController::advance`], which
//! applies the pure [`RotationState::advance`] transition and then recomputes
//! the visible window.

use super::items::{Item, ItemList};
use super::rotation::{RotationState, VisibleWindow};
use super::settings::{CarouselSettings, SlotMotion};
use super::timer::IntervalTimer;
use crate::animation::{AnimatableProperty, TransitionSpec};
use crate::element::ElementId;
use crate::event_handler::{EventResult, HoverHandler};
use crate::listeners::{ListenerId, ListenerOwner};
use crate::scene::SceneCtx;

#[derive(Debug)]
pub struct CarouselController {
    items: ItemList,
    tick_interval_ms: f32,
    autoplay: bool,
    slot_transition: TransitionSpec,
    motion: SlotMotion,

    rotation: RotationState,
    window: VisibleWindow,
    paused: bool,
    /// Armed only while mounted, unpaused and autoplaying.
    timer: Option<IntervalTimer>,
    container_listener: Option<ListenerId>,
    mounted: bool,
    advances: u64,
}

impl CarouselController {
    pub fn new(settings: &CarouselSettings) -> Self {
        let len = settings.items.len();
        let rotation = RotationState::default();
        Self {
            items: settings.items.clone(),
            tick_interval_ms: settings.tick_interval_ms,
            autoplay: settings.autoplay,
            slot_transition: settings.slot_transition,
            motion: settings.motion,
            rotation,
            window: VisibleWindow::from_rotation(rotation, len),
            paused: false,
            timer: None,
            container_listener: None,
            mounted: false,
            advances: 0,
        }
    }

    /// Reset to center index 0, arm autoplay and run the first recompute.
    pub fn mount(&mut self, ctx: &mut SceneCtx<'_>) {
        self.rotation = RotationState::default();
        self.paused = false;
        self.advances = 0;
        self.mounted = true;
        self.arm_timer();
        self.recompute(ctx);
        log::info!(
            "carousel mounted with {} items, tick {}ms",
            self.items.len(),
            self.tick_interval_ms
        );
    }

    /// Cancel the timer and release the container listeners.
    pub fn unmount(&mut self, ctx: &mut SceneCtx<'_>) {
        self.timer = None;
        if let Some(id) = self.container_listener.take() {
            ctx.listeners.detach(id);
        }
        self.paused = false;
        self.mounted = false;
        log::info!("carousel unmounted after {} advances", self.advances);
    }

    /// Advance the autoplay timer. Returns the number of ticks that fired.
    ///
    /// Ticks missed during a long frame collapse into one rotation and a
    /// single recompute.
    pub fn update(&mut self, delta_ms: f32, ctx: &mut SceneCtx<'_>) -> u32 {
        if !self.mounted {
            return 0;
        }
        let fired = self.timer.as_mut().map_or(0, |timer| timer.advance(delta_ms));
        match fired {
            0 => {}
            1 => self.advance(ctx),
            _ => {
                log::debug!("collapsing {fired} missed ticks");
                self.rotation = self.rotation.advance_by(u64::from(fired), self.items.len());
                self.advances += u64::from(fired);
                self.recompute(ctx);
            }
        }
        fired
    }

    /// Move the center index forward by one and recompute.
    pub fn advance(&mut self, ctx: &mut SceneCtx<'_>) {
        self.rotation = self.rotation.advance(self.items.len());
        self.advances += 1;
        self.recompute(ctx);
    }

    fn recompute(&mut self, ctx: &mut SceneCtx<'_>) {
        self.window = VisibleWindow::from_rotation(self.rotation, self.items.len());
        log::debug!(
            "recompute: center {} -> window ({}, {}, {})",
            self.rotation.center(),
            self.window.left,
            self.window.center,
            self.window.right
        );

        self.rebind_container(ctx);

        for (slot, index) in self.window.slots() {
            let element = ElementId::card(self.items.get(index).id);
            let path = self.motion.path(slot);
            ctx.animations.start_transition(
                &element,
                AnimatableProperty::SlotX,
                path.from[0],
                path.to[0],
                &self.slot_transition,
            );
            ctx.animations.start_transition(
                &element,
                AnimatableProperty::SlotY,
                path.from[1],
                path.to[1],
                &self.slot_transition,
            );
        }
    }

    fn rebind_container(&mut self, ctx: &mut SceneCtx<'_>) {
        if let Some(id) = self.container_listener.take() {
            ctx.listeners.detach(id);
        }
        let container = ElementId::container();
        if !ctx.regions.contains(&container) {
            log::warn!("container element not mounted; skipping hover listeners");
            return;
        }
        self.container_listener = Some(ctx.listeners.attach(container, ListenerOwner::Controller));
    }

    fn arm_timer(&mut self) {
        self.timer = (self.mounted && self.autoplay && !self.paused)
            .then(|| IntervalTimer::new(self.tick_interval_ms));
    }

    pub fn center_index(&self) -> usize {
        self.rotation.center()
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn window(&self) -> VisibleWindow {
        self.window
    }

    /// Items in the left, center and right slots.
    pub fn visible_items(&self) -> [&Item; 3] {
        [
            self.items.get(self.window.left),
            self.items.get(self.window.center),
            self.items.get(self.window.right),
        ]
    }

    /// The item shown in the center slot.
    pub fn active_item(&self) -> &Item {
        self.items.get(self.window.center)
    }

    pub fn items(&self) -> &ItemList {
        &self.items
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_timer_armed(&self) -> bool {
        self.timer.is_some()
    }

    /// Time until the next autoplay tick, if the timer is armed.
    pub fn next_tick_in_ms(&self) -> Option<f32> {
        self.timer.as_ref().map(IntervalTimer::remaining_ms)
    }

    /// Index changes since mount.
    pub fn advances(&self) -> u64 {
        self.advances
    }

    pub fn container_listener(&self) -> Option<ListenerId> {
        self.container_listener
    }
}

impl HoverHandler for CarouselController {
    /// Pause: drop the timer. In-flight slot transitions keep running.
    fn on_enter(&mut self, _ctx: &mut SceneCtx<'_>) -> EventResult {
        if !self.mounted {
            return EventResult::Ignored;
        }
        self.paused = true;
        self.timer = None;
        log::debug!("carousel paused at center {}", self.rotation.center());
        EventResult::Handled
    }

    /// Resume: re-arm the timer and advance once right away.
    fn on_leave(&mut self, ctx: &mut SceneCtx<'_>) -> EventResult {
        if !self.mounted {
            return EventResult::Ignored;
        }
        self.paused = false;
        self.arm_timer();
        self.advance(ctx);
        log::debug!("carousel resumed at center {}", self.rotation.center());
        EventResult::Handled
    }
}
