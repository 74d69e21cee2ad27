//! Change-event broadcasting.

use tokio::sync::broadcast;

/// Events broadcast when stored content changes.
///
/// Events carry the changed key only, not the new value: consumers
/// re-resolve from the store, which makes duplicate and out-of-order
/// delivery harmless.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChangeEvent {
    /// A page record was saved (created or replaced).
    PageSaved { slug: String },
    /// A page record was deleted.
    PageDeleted { slug: String },
    /// A form submission was stored.
    SubmissionAdded { id: String },
}

/// Broadcast channel for [`ChangeEvent`]s.
///
/// Slow subscribers may lag and lose intermediate events; that matches the
/// at-least-once, re-resolve-on-receipt contract.
#[derive(Clone)]
pub struct ChangeBus {
    tx: broadcast::Sender<ChangeEvent>,
}

impl ChangeBus {
    /// A bus retaining up to `capacity` undelivered events per subscriber.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Subscribe to future events.
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.tx.subscribe()
    }

    /// Publish an event. Fine with zero subscribers.
    pub fn publish(&self, event: ChangeEvent) {
        // send() errs only when nobody is listening.
        let _ = self.tx.send(event);
    }
}

impl Default for ChangeBus {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscriber_sees_published_events() {
        let bus = ChangeBus::default();
        let mut rx = bus.subscribe();
        bus.publish(ChangeEvent::PageSaved { slug: "home".into() });
        assert_eq!(
            rx.recv().await.unwrap(),
            ChangeEvent::PageSaved { slug: "home".into() }
        );
    }

    #[test]
    fn test_publish_without_subscribers_is_fine() {
        let bus = ChangeBus::default();
        bus.publish(ChangeEvent::PageDeleted { slug: "x".into() });
    }
}
