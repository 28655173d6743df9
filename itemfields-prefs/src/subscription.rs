use std::fmt;
use tokio::sync::mpsc;

/// Identifies one subscription so it can be released later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionToken(u64);

impl SubscriptionToken {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for SubscriptionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Receiving end of a preference subscription.
///
/// Every change to the watched key queues the new value. Values are kept in
/// order; nothing is coalesced. Once the store drops the subscription
/// (after `unsubscribe`), already queued values can still be drained.
#[derive(Debug)]
pub struct Subscription {
    token: SubscriptionToken,
    key: String,
    receiver: mpsc::UnboundedReceiver<String>,
}

impl Subscription {
    pub(crate) fn new(
        token: SubscriptionToken,
        key: String,
        receiver: mpsc::UnboundedReceiver<String>,
    ) -> Self {
        Self {
            token,
            key,
            receiver,
        }
    }

    pub fn token(&self) -> SubscriptionToken {
        self.token
    }

    /// The preference key being watched.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Next queued value, without waiting.
    pub fn try_next(&mut self) -> Option<String> {
        self.receiver.try_recv().ok()
    }

    /// All queued values, oldest first.
    pub fn drain(&mut self) -> Vec<String> {
        std::iter::from_fn(|| self.try_next()).collect()
    }

    /// Waits for the next value. Returns `None` once the store has released
    /// the subscription and the queue is empty.
    pub async fn next(&mut self) -> Option<String> {
        self.receiver.recv().await
    }
}
