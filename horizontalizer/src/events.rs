use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::GroupId;

/// Lifecycle notifications broadcast by the adapter registry.
///
/// `E` is the host's element handle type; payloads keep the container
/// reference and instance id so consumers can correlate events with groups.
/// No consumer is required for correctness.
#[derive(Clone, Debug, PartialEq)]
pub enum GroupEvent<E> {
    /// A group finished construction.
    Init { container: E, id: GroupId },
    /// An initialization pass completed; `count` groups were built.
    Ready { count: usize },
    /// The scroll coordinate entered a group's active region from above.
    SectionEnter { container: E, id: GroupId },
    /// The scroll coordinate left a group's region downward.
    SectionLeave { container: E, id: GroupId },
}

/// A registered event consumer.
pub type EventListener<E> = Arc<dyn Fn(&GroupEvent<E>) + Send + Sync>;

/// Typed listener registration, replacing bubbled DOM events.
pub struct EventBus<E> {
    listeners: Vec<EventListener<E>>,
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EventBus<E> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: impl Fn(&GroupEvent<E>) + Send + Sync + 'static) {
        self.listeners.push(Arc::new(listener));
    }

    pub fn subscribe_arc(&mut self, listener: EventListener<E>) {
        self.listeners.push(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn emit(&self, event: &GroupEvent<E>) {
        for listener in &self.listeners {
            listener(event);
        }
    }
}

impl<E> core::fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
