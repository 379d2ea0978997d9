//! Animation manager for coordinating property transitions.
//!
//! The `AnimationManager` is the tweening engine behind the carousel:
//! - Starting transitions keyed by `(element, property)`
//! - Overriding an in-flight transition when a new request for the same key
//!   arrives (the newest request's start values win)
//! - Advancing all transitions each frame
//! - Remembering settled values so finished elements stay where they landed
//!
//! # Usage
//!
//! ```
//! use carousel_scene::animation::{AnimatableProperty, AnimationManager, EasingFunction, TransitionSpec};
//! use carousel_scene::ElementId;
//!
//! let mut manager = AnimationManager::new();
//! let spec = TransitionSpec::new(300.0).with_easing(EasingFunction::Linear);
//! manager.start_transition(&ElementId::card(0), AnimatableProperty::Opacity, 0.0, 1.0, &spec);
//!
//! manager.update(150.0);
//! let opacity = manager.value(&ElementId::card(0), AnimatableProperty::Opacity);
//! assert_eq!(opacity, Some(0.5));
//! ```

use std::collections::HashMap;

use super::events::{EventQueue, TransitionEvent};
use super::transition::{ActiveTransition, TransitionSpec};
use super::types::{AnimatableProperty, AnimationId};
use crate::element::ElementId;

type PropertyKey = (ElementId, AnimatableProperty);

/// Central coordinator for all transitions in a scene.
#[derive(Debug, Default)]
pub struct AnimationManager {
    transitions: HashMap<AnimationId, ActiveTransition>,

    /// Only one transition is active per (element, property) pair.
    index: HashMap<PropertyKey, AnimationId>,

    /// Final values of transitions that have run to completion.
    settled: HashMap<PropertyKey, f32>,

    dirty: bool,

    events: EventQueue,
}

impl AnimationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a transition with explicit start and end values.
    ///
    /// An in-flight transition for the same key is restarted from `from_value`
    /// and keeps its id. Requests are fire-and-forget: there is no handle to
    /// cancel them other than tearing down the element.
    pub fn start_transition(
        &mut self,
        element: &ElementId,
        property: AnimatableProperty,
        from_value: f32,
        to_value: f32,
        spec: &TransitionSpec,
    ) -> AnimationId {
        let key = (element.clone(), property);
        self.dirty = true;

        if let Some(existing) = self
            .index
            .get(&key)
            .and_then(|id| self.transitions.get_mut(id))
        {
            existing.restart(from_value, to_value, spec);
            return existing.id;
        }

        let transition =
            ActiveTransition::new(element.clone(), property, from_value, to_value, spec);
        let id = transition.id;

        self.events.push(TransitionEvent::Started {
            transition_id: id,
            element: element.clone(),
            property,
        });

        self.settled.remove(&key);
        self.transitions.insert(id, transition);
        self.index.insert(key, id);
        id
    }

    /// Start a transition from the property's current value.
    pub fn animate_to(
        &mut self,
        element: &ElementId,
        property: AnimatableProperty,
        to_value: f32,
        spec: &TransitionSpec,
    ) -> AnimationId {
        let from_value = self.value_or_rest(element, property);
        self.start_transition(element, property, from_value, to_value, spec)
    }

    /// Advance all transitions by `delta_ms`; finished ones are removed and
    /// their final value is kept.
    pub fn update(&mut self, delta_ms: f32) {
        if self.transitions.is_empty() {
            self.dirty = false;
            return;
        }

        let finished: Vec<AnimationId> = self
            .transitions
            .iter_mut()
            .filter_map(|(id, transition)| (!transition.update(delta_ms)).then_some(*id))
            .collect();

        for id in finished {
            let Some(transition) = self.transitions.remove(&id) else {
                continue;
            };
            let key = (transition.element.clone(), transition.property);
            self.index.remove(&key);

            self.settled.insert(key, transition.to_value);
            self.events.push(TransitionEvent::Ended {
                transition_id: id,
                element: transition.element,
                property: transition.property,
            });
        }

        // Still dirty this frame: finished transitions moved to their end value.
        self.dirty = true;
    }

    /// Current value of a property, if it has ever been animated.
    pub fn value(&self, element: &ElementId, property: AnimatableProperty) -> Option<f32> {
        let key = (element.clone(), property);
        if let Some(transition) = self.index.get(&key).and_then(|id| self.transitions.get(id)) {
            return Some(transition.current_value());
        }
        self.settled.get(&key).copied()
    }

    /// Current value, falling back to the property's resting value.
    pub fn value_or_rest(&self, element: &ElementId, property: AnimatableProperty) -> f32 {
        self.value(element, property)
            .unwrap_or_else(|| property.resting_value())
    }

    pub fn is_animating(&self, element: &ElementId) -> bool {
        self.transitions.values().any(|t| &t.element == element)
    }

    /// Drop every transition and settled value for an element.
    pub fn clear_element(&mut self, element: &ElementId) {
        let ids: Vec<AnimationId> = self
            .transitions
            .iter()
            .filter(|(_, t)| &t.element == element)
            .map(|(id, _)| *id)
            .collect();

        for id in ids {
            if let Some(transition) = self.transitions.remove(&id) {
                self.index.remove(&(transition.element.clone(), transition.property));
                self.events.push(TransitionEvent::Cancelled {
                    transition_id: id,
                    element: transition.element,
                    property: transition.property,
                });
            }
        }
        self.settled.retain(|(e, _), _| e != element);
        self.dirty = true;
    }

    pub fn clear(&mut self) {
        self.transitions.clear();
        self.index.clear();
        self.settled.clear();
        self.events.clear();
        self.dirty = false;
    }

    pub fn active_count(&self) -> usize {
        self.transitions.len()
    }

    /// Whether values changed since the last frame and a redraw is needed.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn drain_events(&mut self) -> Vec<TransitionEvent> {
        self.events.drain().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::easing::EasingFunction;

    fn linear(ms: f32) -> TransitionSpec {
        TransitionSpec::new(ms).with_easing(EasingFunction::Linear)
    }

    #[test]
    fn test_start_and_finish() {
        let mut manager = AnimationManager::new();
        let card = ElementId::card(1);
        manager.start_transition(&card, AnimatableProperty::SlotX, 55.0, -55.0, &linear(2000.0));
        assert_eq!(manager.active_count(), 1);
        assert!(manager.is_animating(&card));

        manager.update(1000.0);
        assert_eq!(manager.value(&card, AnimatableProperty::SlotX), Some(0.0));

        manager.update(1000.0);
        assert_eq!(manager.active_count(), 0);
        assert!(!manager.is_animating(&card));
        assert_eq!(manager.value(&card, AnimatableProperty::SlotX), Some(-55.0));
    }

    #[test]
    fn test_new_request_overrides_in_flight() {
        let mut manager = AnimationManager::new();
        let card = ElementId::card(0);
        let first =
            manager.start_transition(&card, AnimatableProperty::SlotX, 45.0, 100.0, &linear(2000.0));
        manager.update(500.0);

        let second =
            manager.start_transition(&card, AnimatableProperty::SlotX, -100.0, -45.0, &linear(2000.0));
        assert_eq!(first, second);
        assert_eq!(manager.active_count(), 1);
        assert_eq!(manager.value(&card, AnimatableProperty::SlotX), Some(-100.0));
    }

    #[test]
    fn test_retarget_emits_no_events() {
        let mut manager = AnimationManager::new();
        let card = ElementId::card(0);
        manager.start_transition(&card, AnimatableProperty::SlotY, 0.0, 20.0, &linear(2000.0));
        manager.drain_events();

        manager.update(500.0);
        manager.start_transition(&card, AnimatableProperty::SlotY, 20.0, 0.0, &linear(2000.0));
        assert!(manager.drain_events().is_empty());
    }

    #[test]
    fn test_animate_to_starts_from_current_value() {
        let mut manager = AnimationManager::new();
        let card = ElementId::card(2);
        manager.animate_to(&card, AnimatableProperty::ContentScale, 1.4, &linear(500.0));
        manager.update(250.0);
        let mid = manager.value_or_rest(&card, AnimatableProperty::ContentScale);
        assert!((mid - 1.2).abs() < 0.001);

        manager.animate_to(&card, AnimatableProperty::ContentScale, 1.0, &linear(500.0));
        assert!((manager.value_or_rest(&card, AnimatableProperty::ContentScale) - 1.2).abs() < 0.001);
    }

    #[test]
    fn test_resting_values() {
        let manager = AnimationManager::new();
        let card = ElementId::card(0);
        assert_eq!(manager.value(&card, AnimatableProperty::ContentScale), None);
        assert_eq!(manager.value_or_rest(&card, AnimatableProperty::ContentScale), 1.0);
        assert_eq!(manager.value_or_rest(&card, AnimatableProperty::SlotY), 0.0);
    }

    #[test]
    fn test_events_lifecycle() {
        let mut manager = AnimationManager::new();
        let card = ElementId::card(0);
        manager.start_transition(&card, AnimatableProperty::Opacity, 0.0, 1.0, &linear(100.0));
        manager.update(100.0);

        let events = manager.drain_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], TransitionEvent::Started { .. }));
        assert!(matches!(events[1], TransitionEvent::Ended { .. }));
        assert!(manager.drain_events().is_empty());
    }

    #[test]
    fn test_clear_element_cancels() {
        let mut manager = AnimationManager::new();
        let a = ElementId::card(0);
        let b = ElementId::card(1);
        manager.start_transition(&a, AnimatableProperty::SlotX, 0.0, 1.0, &linear(100.0));
        manager.start_transition(&b, AnimatableProperty::SlotX, 0.0, 1.0, &linear(100.0));
        manager.drain_events();

        manager.clear_element(&a);
        assert_eq!(manager.active_count(), 1);
        assert_eq!(manager.value(&a, AnimatableProperty::SlotX), None);
        let events = manager.drain_events();
        assert!(matches!(events.as_slice(), [TransitionEvent::Cancelled { .. }]));
    }

    #[test]
    fn test_dirty_flag() {
        let mut manager = AnimationManager::new();
        assert!(!manager.is_dirty());
        manager.start_transition(&ElementId::card(0), AnimatableProperty::Blur, 10.0, 0.0, &linear(16.0));
        assert!(manager.is_dirty());
        manager.update(16.0);
        assert!(manager.is_dirty());
        manager.update(16.0);
        assert!(!manager.is_dirty());
    }
}
