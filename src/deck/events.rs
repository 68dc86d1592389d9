//! Change notifications for a deck session.
//!
//! Observers register a callback and are told about every mutation right
//! after it happens. Callbacks run synchronously on the caller's thread.

use serde::{Deserialize, Serialize};

use super::drawn::DrawnCard;

/// Something that happened to a deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckEvent {
    /// The remaining cards were reordered.
    Shuffled { remaining: usize },
    /// A card was drawn.
    Drawn(DrawnCard),
    /// A draw was attempted on an empty deck.
    Exhausted,
    /// The deck was restored to the original collection.
    Reset { remaining: usize },
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u32);

/// Boxed observer callback.
pub type DeckCallback = Box<dyn FnMut(&DeckEvent) + Send>;

/// Registered observers, notified in subscription order.
#[derive(Default)]
pub struct Subscribers {
    callbacks: Vec<(SubscriptionId, DeckCallback)>,
    next_id: u32,
}

impl Subscribers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: DeckCallback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, callback));
        id
    }

    /// Returns `false` if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(sub, _)| *sub != id);
        self.callbacks.len() != before
    }

    pub fn emit(&mut self, event: &DeckEvent) {
        for (_, callback) in &mut self.callbacks {
            callback(event);
        }
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.callbacks.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_emit_in_subscription_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut subs = Subscribers::new();

        for tag in ["first", "second"] {
            let log = Arc::clone(&log);
            subs.subscribe(Box::new(move |_| log.lock().unwrap().push(tag)));
        }

        subs.emit(&DeckEvent::Exhausted);
        assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Arc::new(Mutex::new(0));
        let mut subs = Subscribers::new();

        let counter = Arc::clone(&count);
        let id = subs.subscribe(Box::new(move |_| *counter.lock().unwrap() += 1));

        subs.emit(&DeckEvent::Reset { remaining: 3 });
        assert!(subs.unsubscribe(id));
        assert!(!subs.unsubscribe(id));
        subs.emit(&DeckEvent::Reset { remaining: 3 });

        assert_eq!(*count.lock().unwrap(), 1);
    }
}
