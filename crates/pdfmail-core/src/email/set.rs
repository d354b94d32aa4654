//! Duplicate-free, order-preserving collection of addresses.

use std::collections::HashSet;

use serde::{Serialize, Serializer};

/// Set of email addresses keyed by exact string equality.
///
/// Iteration yields addresses in the order they were first inserted.
/// Equality compares membership only.
#[derive(Debug, Clone, Default)]
pub struct EmailSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl EmailSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an address. Returns `false` if it was already present.
    pub fn insert(&mut self, email: impl Into<String>) -> bool {
        let email = email.into();
        if self.seen.contains(&email) {
            return false;
        }
        self.seen.insert(email.clone());
        self.order.push(email);
        true
    }

    pub fn contains(&self, email: &str) -> bool {
        self.seen.contains(email)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Addresses in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.order.iter()
    }

    /// Addresses in first-seen order, as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.order
    }

    /// A copy of the addresses in lexicographic order.
    pub fn sorted(&self) -> Vec<String> {
        let mut sorted = self.order.clone();
        sorted.sort();
        sorted
    }

    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

impl PartialEq for EmailSet {
    fn eq(&self, other: &Self) -> bool {
        self.seen == other.seen
    }
}

impl Eq for EmailSet {}

impl<S: Into<String>> Extend<S> for EmailSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for email in iter {
            self.insert(email);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for EmailSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = EmailSet::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for EmailSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

impl<'a> IntoIterator for &'a EmailSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}

impl Serialize for EmailSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.order.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut set = EmailSet::new();
        assert!(set.insert("a@b.com"));
        assert!(!set.insert("a@b.com"));
        assert!(set.insert("A@b.com")); // case is significant
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_first_seen_order() {
        let set: EmailSet = ["z@z.io", "a@a.io", "z@z.io", "m@m.io"].into_iter().collect();
        assert_eq!(set.as_slice(), ["z@z.io", "a@a.io", "m@m.io"]);
        assert_eq!(set.sorted(), vec!["a@a.io", "m@m.io", "z@z.io"]);
    }

    #[test]
    fn test_equality_ignores_order() {
        let forward: EmailSet = ["a@b.com", "c@d.org"].into_iter().collect();
        let backward: EmailSet = ["c@d.org", "a@b.com"].into_iter().collect();
        assert_eq!(forward, backward);
        assert_ne!(forward.as_slice(), backward.as_slice());

        let smaller: EmailSet = ["a@b.com"].into_iter().collect();
        assert_ne!(forward, smaller);
    }

    #[test]
    fn test_serializes_as_list() {
        let set: EmailSet = ["x@y.org", "x@y.org"].into_iter().collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["x@y.org"]"#);
    }
}
