//! Observable preference store.
//!
//! The custom field list lives in a single string preference. Readers that
//! must react to edits (the field registry) hold a [`Subscription`] and drain
//! change notifications on their own event loop, so a write never calls back
//! into the code that issued it.
//!
//! Two backends share the same semantics:
//! - [`MemoryPreferences`]: in-process only
//! - [`FilePreferences`]: persisted as a flat JSON object after every write

mod error;
mod file;
mod memory;
mod state;
mod subscription;

pub use error::{PrefsError, PrefsResult};
pub use file::FilePreferences;
pub use memory::MemoryPreferences;
pub use subscription::{Subscription, SubscriptionToken};

/// A string-valued preference store with change subscriptions.
///
/// Subscribers are only notified when a stored value actually changes.
pub trait PreferenceStore: Send + Sync {
    /// Current value of `key`, if set.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key` and notifies subscribers of that key.
    fn set(&self, key: &str, value: &str) -> PrefsResult<()>;

    /// Stores `default` only if `key` has no value yet.
    /// Returns `true` when the default was written.
    fn init_default(&self, key: &str, default: &str) -> PrefsResult<bool>;

    /// Starts receiving the new value of `key` after every change.
    fn subscribe(&self, key: &str) -> Subscription;

    /// Stops notifications for `token`. Unknown tokens are ignored and
    /// return `false`.
    fn unsubscribe(&self, token: SubscriptionToken) -> bool;
}

/// Fully qualified preference name, e.g.
/// `extensions.zotero-custom-item-fields.custom-field-data`.
pub fn global_name(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}
