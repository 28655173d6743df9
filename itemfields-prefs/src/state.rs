//! Value map and observer list shared by both store backends.

use crate::subscription::{Subscription, SubscriptionToken};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;
use tracing::debug;

struct Observer {
    token: SubscriptionToken,
    key: String,
    sender: mpsc::UnboundedSender<String>,
}

pub(crate) struct PreferenceState {
    values: BTreeMap<String, String>,
    observers: Vec<Observer>,
    next_token: u64,
}

impl PreferenceState {
    pub(crate) fn new(values: BTreeMap<String, String>) -> Self {
        Self {
            values,
            observers: Vec::new(),
            next_token: 1,
        }
    }

    pub(crate) fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub(crate) fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Returns `false` when `value` is already stored.
    pub(crate) fn is_change(&self, key: &str, value: &str) -> bool {
        self.values.get(key).map(String::as_str) != Some(value)
    }

    /// Stores the value and queues it for every subscriber of `key`.
    /// Subscribers whose receiver is gone are pruned.
    pub(crate) fn commit(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.observers.retain(|observer| {
            if observer.key != key {
                return true;
            }
            let delivered = observer.sender.send(value.to_string()).is_ok();
            if !delivered {
                debug!(token = %observer.token, key, "Dropping subscription with closed receiver");
            }
            delivered
        });
    }

    pub(crate) fn subscribe(&mut self, key: &str) -> Subscription {
        let token = SubscriptionToken::new(self.next_token);
        self.next_token += 1;
        let (sender, receiver) = mpsc::unbounded_channel();
        self.observers.push(Observer {
            token,
            key: key.to_string(),
            sender,
        });
        debug!(%token, key, "Preference subscription added");
        Subscription::new(token, key.to_string(), receiver)
    }

    pub(crate) fn unsubscribe(&mut self, token: SubscriptionToken) -> bool {
        let before = self.observers.len();
        self.observers.retain(|observer| observer.token != token);
        let removed = self.observers.len() != before;
        if removed {
            debug!(%token, "Preference subscription removed");
        }
        removed
    }

    pub(crate) fn subscriber_count(&self) -> usize {
        self.observers.len()
    }
}

/// Locks the state, recovering from a poisoned mutex: the map is always
/// left consistent between statements.
pub(crate) fn lock(state: &Mutex<PreferenceState>) -> MutexGuard<'_, PreferenceState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
