//! Signal dispatch system
//!
//! Ordered publish/subscribe channels. Each engine or easing instance owns
//! its own stack; dispatch is synchronous and invokes listeners in
//! registration order.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::hash::Hash;

new_key_type! {
    /// Unique identifier for a registered listener
    pub struct ListenerId;
}

/// Listener function type
pub type Listener<P> = Box<dyn Fn(&P) + Send + Sync>;

/// Dispatches payloads to listeners registered per event kind.
///
/// `K` is the event kind (a small hashable enum), `P` the payload carried by
/// every dispatch. Listeners for one kind fire in the order they were
/// registered. The stack cannot be mutated from inside a dispatch: `dispatch`
/// borrows the stack immutably, so listeners only see their own captures.
pub struct SignalStack<K, P> {
    listeners: SlotMap<ListenerId, Listener<P>>,
    order: FxHashMap<K, SmallVec<[ListenerId; 2]>>,
}

impl<K: Copy + Eq + Hash, P> SignalStack<K, P> {
    pub fn new() -> Self {
        Self {
            listeners: SlotMap::with_key(),
            order: FxHashMap::default(),
        }
    }

    /// Register a listener for an event kind
    pub fn listen<F>(&mut self, kind: K, listener: F) -> ListenerId
    where
        F: Fn(&P) + Send + Sync + 'static,
    {
        let id = self.listeners.insert(Box::new(listener));
        self.order.entry(kind).or_default().push(id);
        id
    }

    /// Dispatch a payload to every listener of `kind`, in registration order
    pub fn dispatch(&self, kind: K, payload: &P) {
        if let Some(ids) = self.order.get(&kind) {
            for id in ids {
                if let Some(listener) = self.listeners.get(*id) {
                    listener(payload);
                }
            }
        }
    }

    /// Detach a listener. Returns `false` when the id is unknown.
    ///
    /// The relative order of the remaining listeners is preserved.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        if self.listeners.remove(id).is_none() {
            return false;
        }
        for ids in self.order.values_mut() {
            ids.retain(|registered| *registered != id);
        }
        true
    }

    /// Number of listeners registered for an event kind
    pub fn listener_count(&self, kind: K) -> usize {
        self.order.get(&kind).map_or(0, |ids| ids.len())
    }

    /// Check if no listeners are registered at all
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<K: Copy + Eq + Hash, P> Default for SignalStack<K, P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Channel {
        Update,
        Complete,
    }

    #[test]
    fn test_dispatch_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut signal: SignalStack<Channel, i32> = SignalStack::new();

        let first = log.clone();
        signal.listen(Channel::Update, move |v| first.lock().unwrap().push(("first", *v)));
        let second = log.clone();
        signal.listen(Channel::Update, move |v| second.lock().unwrap().push(("second", *v)));

        signal.dispatch(Channel::Update, &7);

        assert_eq!(*log.lock().unwrap(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_dispatch_only_reaches_matching_kind() {
        let hits = Arc::new(Mutex::new(0));
        let mut signal: SignalStack<Channel, i32> = SignalStack::new();

        let counter = hits.clone();
        signal.listen(Channel::Complete, move |_| *counter.lock().unwrap() += 1);

        signal.dispatch(Channel::Update, &1);
        assert_eq!(*hits.lock().unwrap(), 0);

        signal.dispatch(Channel::Complete, &1);
        assert_eq!(*hits.lock().unwrap(), 1);
    }

    #[test]
    fn test_remove_listener_preserves_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut signal: SignalStack<Channel, i32> = SignalStack::new();

        let a = log.clone();
        signal.listen(Channel::Update, move |_| a.lock().unwrap().push("a"));
        let b = log.clone();
        let middle = signal.listen(Channel::Update, move |_| b.lock().unwrap().push("b"));
        let c = log.clone();
        signal.listen(Channel::Update, move |_| c.lock().unwrap().push("c"));

        assert!(signal.remove_listener(middle));
        assert!(!signal.remove_listener(middle));
        assert_eq!(signal.listener_count(Channel::Update), 2);

        signal.dispatch(Channel::Update, &0);
        assert_eq!(*log.lock().unwrap(), vec!["a", "c"]);
    }

    #[test]
    fn test_dispatch_without_listeners_is_noop() {
        let signal: SignalStack<Channel, i32> = SignalStack::new();
        assert!(signal.is_empty());
        signal.dispatch(Channel::Update, &42);
    }
}
