//! Transition lifecycle events.
//!
//! The manager queues an event when a transition starts or ends, and when
//! an element is torn down mid-transition. A retargeted transition keeps its
//! id and emits nothing. Hosts poll events after each update.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::types::{AnimatableProperty, AnimationId};
use crate::element::ElementId;

/// Event emitted when a transition changes state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransitionEvent {
    Started {
        transition_id: AnimationId,
        element: ElementId,
        property: AnimatableProperty,
    },
    Ended {
        transition_id: AnimationId,
        element: ElementId,
        property: AnimatableProperty,
    },
    /// Dropped because its element was torn down before it finished.
    Cancelled {
        transition_id: AnimationId,
        element: ElementId,
        property: AnimatableProperty,
    },
}

impl TransitionEvent {
    pub fn element(&self) -> &ElementId {
        match self {
            Self::Started { element, .. }
            | Self::Ended { element, .. }
            | Self::Cancelled { element, .. } => element,
        }
    }

    pub fn property(&self) -> AnimatableProperty {
        match self {
            Self::Started { property, .. }
            | Self::Ended { property, .. }
            | Self::Cancelled { property, .. } => *property,
        }
    }
}

/// Bounded FIFO of transition events; the oldest are dropped on overflow.
#[derive(Debug)]
pub struct EventQueue {
    events: VecDeque<TransitionEvent>,
    capacity: usize,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::with_capacity(256)
    }
}

impl EventQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity.min(64)),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, event: TransitionEvent) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = TransitionEvent> + '_ {
        self.events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ended(n: u64) -> TransitionEvent {
        TransitionEvent::Ended {
            transition_id: AnimationId(n),
            element: ElementId::card(n as u32),
            property: AnimatableProperty::SlotX,
        }
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = EventQueue::default();
        queue.push(ended(1));
        queue.push(ended(2));
        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained, vec![ended(1), ended(2)]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_overflow_drops_oldest() {
        let mut queue = EventQueue::with_capacity(2);
        queue.push(ended(1));
        queue.push(ended(2));
        queue.push(ended(3));
        assert_eq!(queue.len(), 2);
        let first = queue.drain().next().unwrap();
        assert_eq!(first.element(), &ElementId::card(2));
    }
}
