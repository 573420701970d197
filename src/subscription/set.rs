//! Owner-side collections of subscription tokens.

use crate::subscription::Subscription;

/// A bag of subscriptions released together.
///
/// Components that listen to several event types keep their tokens here;
/// dropping the set (or calling [`SubscriptionSet::clear`]) unsubscribes
/// every callback, in the order the tokens were added.
#[derive(Debug, Default)]
pub struct SubscriptionSet {
    subscriptions: Vec<Subscription>,
}

impl SubscriptionSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a subscription
    pub fn push(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }

    /// Number of tokens held, released or not
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// Check if the set holds no tokens
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Number of tokens still holding a subscription
    pub fn active_count(&self) -> usize {
        self.subscriptions.iter().filter(|s| s.is_active()).count()
    }

    /// Unsubscribe everything and empty the set
    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }

    /// Iterate over the held tokens
    pub fn iter(&self) -> impl Iterator<Item = &Subscription> {
        self.subscriptions.iter()
    }
}

impl Extend<Subscription> for SubscriptionSet {
    fn extend<I: IntoIterator<Item = Subscription>>(&mut self, iter: I) {
        self.subscriptions.extend(iter);
    }
}

impl FromIterator<Subscription> for SubscriptionSet {
    fn from_iter<I: IntoIterator<Item = Subscription>>(iter: I) -> Self {
        Self {
            subscriptions: iter.into_iter().collect(),
        }
    }
}
