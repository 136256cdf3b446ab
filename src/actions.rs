//! Typed filter actions and an explicit broadcast bus.
//!
//! Views that react to filter changes subscribe to an [`ActionBus`] they are
//! handed, receive [`FilterAction`]s over their own channel, and unsubscribe
//! on teardown. There is no process-wide dispatcher.

use std::collections::BTreeMap;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use tracing::{debug, trace};

/// Filter values keyed by filter name.
pub type FilterData = BTreeMap<String, String>;

/// An action broadcast to filter subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// Replace the active filters.
    UpdateFilter(FilterData),
    /// Restore filters to their defaults.
    ResetFilters,
    /// Remove every filter.
    ClearFilters,
}

/// Identifier of a subscription on an [`ActionBus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// The receiving end of a subscription.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    receiver: Receiver<FilterAction>,
}

impl Subscription {
    /// This subscription's id, for [`ActionBus::unsubscribe`].
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Take the next pending action, if any.
    pub fn try_next(&self) -> Option<FilterAction> {
        match self.receiver.try_recv() {
            Ok(action) => Some(action),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Drain every pending action.
    pub fn drain(&self) -> Vec<FilterAction> {
        self.receiver.try_iter().collect()
    }
}

/// Broadcasts filter actions to registered subscribers.
#[derive(Debug, Default)]
pub struct ActionBus {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Sender<FilterAction>)>,
}

impl ActionBus {
    /// Create a bus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber.
    pub fn subscribe(&mut self) -> Subscription {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        let (sender, receiver) = mpsc::channel();
        self.subscribers.push((id, sender));
        debug!(id = id.0, "filter subscriber registered");
        Subscription { id, receiver }
    }

    /// Remove a subscriber. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        before != self.subscribers.len()
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Send `action` to every subscriber.
    ///
    /// Subscribers whose [`Subscription`] was dropped are removed. Returns
    /// the number of subscribers that received the action.
    pub fn dispatch(&mut self, action: FilterAction) -> usize {
        trace!(?action, "dispatching filter action");
        self.subscribers
            .retain(|(_, sender)| sender.send(action.clone()).is_ok());
        self.subscribers.len()
    }

    /// Dispatch [`FilterAction::UpdateFilter`].
    pub fn update_filter(&mut self, filters: FilterData) -> usize {
        self.dispatch(FilterAction::UpdateFilter(filters))
    }

    /// Dispatch [`FilterAction::ResetFilters`].
    pub fn reset_filters(&mut self) -> usize {
        self.dispatch(FilterAction::ResetFilters)
    }

    /// Dispatch [`FilterAction::ClearFilters`].
    pub fn clear_filters(&mut self) -> usize {
        self.dispatch(FilterAction::ClearFilters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(pairs: &[(&str, &str)]) -> FilterData {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn every_subscriber_receives_each_action_in_order() {
        let mut bus = ActionBus::new();
        let a = bus.subscribe();
        let b = bus.subscribe();

        bus.update_filter(filters(&[("region", "us-east")]));
        bus.clear_filters();

        let expected = vec![
            FilterAction::UpdateFilter(filters(&[("region", "us-east")])),
            FilterAction::ClearFilters,
        ];
        assert_eq!(a.drain(), expected);
        assert_eq!(b.drain(), expected);
    }

    #[test]
    fn unsubscribed_receivers_get_nothing_more() {
        let mut bus = ActionBus::new();
        let sub = bus.subscribe();
        assert!(bus.unsubscribe(sub.id()));
        assert!(!bus.unsubscribe(sub.id()));

        assert_eq!(bus.reset_filters(), 0);
        assert_eq!(sub.try_next(), None);
    }

    #[test]
    fn dropped_subscriptions_are_pruned_on_dispatch() {
        let mut bus = ActionBus::new();
        let kept = bus.subscribe();
        let dropped = bus.subscribe();
        drop(dropped);

        assert_eq!(bus.subscriber_count(), 2);
        assert_eq!(bus.reset_filters(), 1);
        assert_eq!(bus.subscriber_count(), 1);
        assert_eq!(kept.try_next(), Some(FilterAction::ResetFilters));
    }

    #[test]
    fn subscription_ids_are_unique() {
        let mut bus = ActionBus::new();
        let a = bus.subscribe();
        let b = bus.subscribe();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn late_subscribers_miss_earlier_actions() {
        let mut bus = ActionBus::new();
        bus.clear_filters();
        let late = bus.subscribe();
        assert!(late.drain().is_empty());
    }
}
