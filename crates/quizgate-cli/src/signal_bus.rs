//! Signal listener registry.
//!
//! The terminal's stand-in for `addEventListener`: a listener is registered
//! per source, and a raised signal is only delivered to the app if a
//! listener for its source exists. The registry does not deduplicate, so a
//! state machine that subscribed twice would show up as a leak here.

use quizgate_core::{Signal, Signals};

/// Listener handle.
pub type ListenerId = u64;

#[derive(Debug, Clone, Copy)]
struct Listener {
    id: ListenerId,
    source: Signals,
}

/// Registered signal listeners.
#[derive(Debug, Default)]
pub struct SignalBus {
    listeners: Vec<Listener>,
    next_id: ListenerId,
}

impl SignalBus {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one listener per source in `sources`.
    pub fn subscribe(&mut self, sources: Signals) -> Vec<ListenerId> {
        sources
            .iter()
            .map(|source| {
                let id = self.next_id;
                self.next_id += 1;
                self.listeners.push(Listener { id, source });
                tracing::debug!(id, ?source, "listener added");
                id
            })
            .collect()
    }

    /// Remove every listener attached to a source in `sources`.
    ///
    /// Returns how many were removed.
    pub fn unsubscribe(&mut self, sources: Signals) -> usize {
        let before = self.listeners.len();
        self.listeners.retain(|listener| {
            let keep = !sources.contains(listener.source);
            if !keep {
                tracing::debug!(id = listener.id, source = ?listener.source, "listener removed");
            }
            keep
        });
        before - self.listeners.len()
    }

    /// Whether `signal` would reach a listener.
    pub fn dispatch(&self, signal: Signal) -> bool {
        self.listeners.iter().any(|listener| listener.source == signal.source())
    }

    /// Total registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Union of sources with at least one listener.
    pub fn sources(&self) -> Signals {
        self.listeners.iter().fold(Signals::empty(), |acc, listener| acc | listener.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribe_registers_one_listener_per_source() {
        let mut bus = SignalBus::new();
        let ids = bus.subscribe(Signals::PROCTORED);

        assert_eq!(ids.len(), 3);
        assert_eq!(bus.listener_count(), 3);
        assert_eq!(bus.sources(), Signals::PROCTORED);
    }

    #[test]
    fn dispatch_requires_listener() {
        let mut bus = SignalBus::new();
        assert!(!bus.dispatch(Signal::Paste));

        bus.subscribe(Signals::PASTE);
        assert!(bus.dispatch(Signal::Paste));
        assert!(!bus.dispatch(Signal::Copy));
    }

    #[test]
    fn unsubscribe_removes_matching_sources() {
        let mut bus = SignalBus::new();
        bus.subscribe(Signals::PROCTORED);

        assert_eq!(bus.unsubscribe(Signals::COPY | Signals::PASTE), 2);
        assert_eq!(bus.sources(), Signals::VISIBILITY);
        assert_eq!(bus.unsubscribe(Signals::PROCTORED), 1);
        assert_eq!(bus.listener_count(), 0);
    }

    #[test]
    fn duplicate_subscriptions_are_visible() {
        let mut bus = SignalBus::new();
        bus.subscribe(Signals::PASTE);
        bus.subscribe(Signals::PASTE);
        assert_eq!(bus.listener_count(), 2);
    }
}
