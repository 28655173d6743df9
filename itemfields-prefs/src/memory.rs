use crate::state::{lock, PreferenceState};
use crate::{PreferenceStore, PrefsResult, Subscription, SubscriptionToken};
use std::collections::BTreeMap;
use std::sync::Mutex;

/// In-process preference store.
pub struct MemoryPreferences {
    state: Mutex<PreferenceState>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::with_values(BTreeMap::new())
    }

    /// Creates a store pre-populated with `values`.
    pub fn with_values(values: BTreeMap<String, String>) -> Self {
        Self {
            state: Mutex::new(PreferenceState::new(values)),
        }
    }

    /// Copy of every stored value.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        lock(&self.state).values().clone()
    }

    /// Number of live subscriptions across all keys.
    pub fn subscriber_count(&self) -> usize {
        lock(&self.state).subscriber_count()
    }
}

impl Default for MemoryPreferences {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        lock(&self.state).get(key)
    }

    fn set(&self, key: &str, value: &str) -> PrefsResult<()> {
        let mut state = lock(&self.state);
        if state.is_change(key, value) {
            state.commit(key, value);
        }
        Ok(())
    }

    fn init_default(&self, key: &str, default: &str) -> PrefsResult<bool> {
        let mut state = lock(&self.state);
        if state.contains(key) {
            return Ok(false);
        }
        state.commit(key, default);
        Ok(true)
    }

    fn subscribe(&self, key: &str) -> Subscription {
        lock(&self.state).subscribe(key)
    }

    fn unsubscribe(&self, token: SubscriptionToken) -> bool {
        lock(&self.state).unsubscribe(token)
    }
}
