//! Pointer listener bindings.
//!
//! A binding connects an element to the component that reacts to its
//! enter/leave events. Components hold the returned `ListenerId` and must
//! detach it before binding again or when they are torn down; the registry
//! only delivers events to live bindings.

use std::collections::BTreeMap;

use crate::element::ElementId;

/// Handle for one attached enter/leave listener pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Which component receives events from a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerOwner {
    /// The carousel controller (pause / resume).
    Controller,
    /// The card renderer for an item id (hover emphasis).
    Card(u32),
}

#[derive(Debug, Clone)]
struct Binding {
    element: ElementId,
    owner: ListenerOwner,
}

#[derive(Debug, Default)]
pub struct ListenerRegistry {
    bindings: BTreeMap<ListenerId, Binding>,
    next_id: u64,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, element: ElementId, owner: ListenerOwner) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        log::trace!("attach listener {:?} on {} for {:?}", id, element, owner);
        self.bindings.insert(id, Binding { element, owner });
        id
    }

    /// Detach a binding. Returns `false` if it was already gone.
    pub fn detach(&mut self, id: ListenerId) -> bool {
        self.bindings.remove(&id).is_some()
    }

    /// Owners bound to `element`, in attach order.
    pub fn owners_of(&self, element: &ElementId) -> Vec<ListenerOwner> {
        self.bindings
            .values()
            .filter(|b| &b.element == element)
            .map(|b| b.owner)
            .collect()
    }

    pub fn count_for(&self, element: &ElementId) -> usize {
        self.bindings.values().filter(|b| &b.element == element).count()
    }

    pub fn is_attached(&self, id: ListenerId) -> bool {
        self.bindings.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_and_detach() {
        let mut listeners = ListenerRegistry::new();
        let id = listeners.attach(ElementId::container(), ListenerOwner::Controller);
        assert!(listeners.is_attached(id));
        assert_eq!(listeners.count_for(&ElementId::container()), 1);

        assert!(listeners.detach(id));
        assert!(!listeners.detach(id));
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_owners_in_attach_order() {
        let mut listeners = ListenerRegistry::new();
        listeners.attach(ElementId::card(3), ListenerOwner::Card(3));
        listeners.attach(ElementId::container(), ListenerOwner::Controller);
        listeners.attach(ElementId::card(3), ListenerOwner::Controller);

        assert_eq!(
            listeners.owners_of(&ElementId::card(3)),
            vec![ListenerOwner::Card(3), ListenerOwner::Controller]
        );
        assert!(listeners.owners_of(&ElementId::card(4)).is_empty());
    }
}
