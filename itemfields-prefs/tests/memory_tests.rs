use itemfields_prefs::{global_name, MemoryPreferences, PreferenceStore};
use std::collections::BTreeMap;

const KEY: &str = "extensions.test.custom-field-data";

// ================================================================
// Values
// ================================================================

#[test]
fn unset_key_is_none() {
    let prefs = MemoryPreferences::new();
    assert_eq!(prefs.get(KEY), None);
}

#[test]
fn set_then_get() {
    let prefs = MemoryPreferences::new();
    prefs.set(KEY, "a;start").unwrap();
    assert_eq!(prefs.get(KEY).as_deref(), Some("a;start"));
}

#[test]
fn init_default_writes_when_absent() {
    let prefs = MemoryPreferences::new();
    assert!(prefs.init_default(KEY, "").unwrap());
    assert_eq!(prefs.get(KEY).as_deref(), Some(""));
}

#[test]
fn init_default_keeps_existing_value() {
    let prefs = MemoryPreferences::with_values(BTreeMap::from([(KEY.to_string(), "a;end".to_string())]));
    assert!(!prefs.init_default(KEY, "").unwrap());
    assert_eq!(prefs.get(KEY).as_deref(), Some("a;end"));
}

#[test]
fn global_name_joins_prefix_and_key() {
    assert_eq!(global_name("extensions.foo", "custom-field-data"), "extensions.foo.custom-field-data");
    assert_eq!(global_name("", "custom-field-data"), "custom-field-data");
}

// ================================================================
// Subscriptions
// ================================================================

#[test]
fn subscriber_receives_changes_in_order() {
    let prefs = MemoryPreferences::new();
    let mut sub = prefs.subscribe(KEY);
    prefs.set(KEY, "a;start").unwrap();
    prefs.set(KEY, "b;end").unwrap();
    assert_eq!(sub.drain(), vec!["a;start".to_string(), "b;end".to_string()]);
    assert_eq!(sub.try_next(), None);
}

#[test]
fn unchanged_value_is_not_notified() {
    let prefs = MemoryPreferences::new();
    prefs.set(KEY, "a;start").unwrap();
    let mut sub = prefs.subscribe(KEY);
    prefs.set(KEY, "a;start").unwrap();
    assert!(sub.drain().is_empty());
}

#[test]
fn other_keys_are_not_delivered() {
    let prefs = MemoryPreferences::new();
    let mut sub = prefs.subscribe(KEY);
    prefs.set("extensions.test.other", "x").unwrap();
    assert_eq!(sub.try_next(), None);
    assert_eq!(sub.key(), KEY);
}

#[test]
fn every_subscriber_gets_a_copy() {
    let prefs = MemoryPreferences::new();
    let mut first = prefs.subscribe(KEY);
    let mut second = prefs.subscribe(KEY);
    assert_ne!(first.token(), second.token());
    prefs.set(KEY, "x;end").unwrap();
    assert_eq!(first.try_next().as_deref(), Some("x;end"));
    assert_eq!(second.try_next().as_deref(), Some("x;end"));
}

#[test]
fn unsubscribe_stops_delivery() {
    let prefs = MemoryPreferences::new();
    let mut sub = prefs.subscribe(KEY);
    assert!(prefs.unsubscribe(sub.token()));
    prefs.set(KEY, "a;start").unwrap();
    assert_eq!(sub.try_next(), None);
    assert_eq!(prefs.subscriber_count(), 0);
}

#[test]
fn unsubscribe_twice_is_ignored() {
    let prefs = MemoryPreferences::new();
    let sub = prefs.subscribe(KEY);
    assert!(prefs.unsubscribe(sub.token()));
    assert!(!prefs.unsubscribe(sub.token()));
}

#[test]
fn dropped_subscription_is_pruned_on_next_change() {
    let prefs = MemoryPreferences::new();
    drop(prefs.subscribe(KEY));
    assert_eq!(prefs.subscriber_count(), 1);
    prefs.set(KEY, "a;start").unwrap();
    assert_eq!(prefs.subscriber_count(), 0);
}

#[tokio::test]
async fn next_waits_for_value() {
    let prefs = MemoryPreferences::new();
    let mut sub = prefs.subscribe(KEY);
    prefs.set(KEY, "late;end").unwrap();
    assert_eq!(sub.next().await.as_deref(), Some("late;end"));
}

#[tokio::test]
async fn next_ends_after_unsubscribe() {
    let prefs = MemoryPreferences::new();
    let mut sub = prefs.subscribe(KEY);
    prefs.set(KEY, "queued;end").unwrap();
    prefs.unsubscribe(sub.token());
    assert_eq!(sub.next().await.as_deref(), Some("queued;end"));
    assert_eq!(sub.next().await, None);
}
