//! Observers notified after every applied transition.

use crate::core::AppState;
use std::fmt;

/// Handle returned by `Store::subscribe`, used to unsubscribe.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscription-{}", self.0)
    }
}

type Callback = Box<dyn FnMut(&AppState)>;

/// Subscribers in registration order.
#[derive(Default)]
pub(crate) struct Subscribers {
    entries: Vec<(SubscriptionId, Callback)>,
    next_id: u64,
}

impl Subscribers {
    pub(crate) fn add(&mut self, callback: Callback) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, state: &AppState) {
        for (_, callback) in &mut self.entries {
            callback(state);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notify_runs_in_registration_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::default();

        for name in ["first", "second"] {
            let calls = Rc::clone(&calls);
            subscribers.add(Box::new(move |_| calls.borrow_mut().push(name)));
        }
        subscribers.notify(&AppState::new());

        assert_eq!(*calls.borrow(), ["first", "second"]);
    }

    #[test]
    fn remove_unknown_id_returns_false() {
        let mut subscribers = Subscribers::default();
        let id = subscribers.add(Box::new(|_| {}));

        assert!(subscribers.remove(id));
        assert!(!subscribers.remove(id));
        assert_eq!(subscribers.len(), 0);
    }

    #[test]
    fn ids_are_never_reused() {
        let mut subscribers = Subscribers::default();
        let first = subscribers.add(Box::new(|_| {}));
        subscribers.remove(first);
        let second = subscribers.add(Box::new(|_| {}));

        assert_ne!(first, second);
    }
}
