// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered, keyed item storage.
//!
//! Lookups are linear scans. Collections here are widget-sized (tabs, list
//! options); a flat vector beats index structures at that scale and keeps
//! iteration order trivially equal to navigation order.

use alloc::string::String;
use alloc::vec::Vec;

use crate::types::ItemFlags;

/// One selectable item.
///
/// Keys must be unique within a collection and stable for its lifetime;
/// lookups return the first match.
#[derive(Clone, Debug)]
pub struct Item<K> {
    /// Unique, stable key.
    pub key: K,
    /// Interactivity flags.
    pub flags: ItemFlags,
    /// Plain-text value for typeahead matching, if any.
    pub text_value: Option<String>,
}

impl<K> Item<K> {
    /// An enabled item with no text value.
    pub fn new(key: K) -> Self {
        Self {
            key,
            flags: ItemFlags::empty(),
            text_value: None,
        }
    }

    /// Replace the item's flags.
    pub fn with_flags(mut self, flags: ItemFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Attach a typeahead text value.
    pub fn with_text_value(mut self, text: impl Into<String>) -> Self {
        self.text_value = Some(text.into());
        self
    }

    /// True if the item is disabled.
    pub fn is_disabled(&self) -> bool {
        self.flags.contains(ItemFlags::DISABLED)
    }
}

/// An ordered sequence of keyed items.
#[derive(Clone, Debug, Default)]
pub struct Collection<K> {
    items: Vec<Item<K>>,
}

impl<K: Clone + Eq> Collection<K> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item.
    pub fn push(&mut self, item: Item<K>) {
        self.items.push(item);
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the collection has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate items in order.
    pub fn iter(&self) -> impl Iterator<Item = &Item<K>> {
        self.items.iter()
    }

    /// Item at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&Item<K>> {
        self.items.get(index)
    }

    /// Position of `key` in navigation order.
    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.items.iter().position(|item| item.key == *key)
    }

    /// Item with the given key.
    pub fn item(&self, key: &K) -> Option<&Item<K>> {
        self.items.iter().find(|item| item.key == *key)
    }

    /// Key at `index`, if in bounds.
    pub fn key_at(&self, index: usize) -> Option<&K> {
        self.items.get(index).map(|item| &item.key)
    }

    /// True if `key` exists in the collection.
    pub fn contains_key(&self, key: &K) -> bool {
        self.index_of(key).is_some()
    }

    /// True if `key` exists and is disabled. Unknown keys are not disabled;
    /// they simply match nothing.
    pub fn is_disabled(&self, key: &K) -> bool {
        self.item(key).is_some_and(Item::is_disabled)
    }
}

impl<K: Clone + Eq> FromIterator<Item<K>> for Collection<K> {
    fn from_iter<I: IntoIterator<Item = Item<K>>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Collection<&'static str> {
        [
            Item::new("a").with_text_value("Apple"),
            Item::new("b").with_flags(ItemFlags::DISABLED),
            Item::new("c"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn order_and_lookup() {
        let c = sample();
        assert_eq!(c.len(), 3);
        assert_eq!(c.index_of(&"b"), Some(1));
        assert_eq!(c.key_at(2), Some(&"c"));
        assert_eq!(c.index_of(&"missing"), None);
        assert!(c.contains_key(&"a"));
        assert!(!c.contains_key(&"missing"));
    }

    #[test]
    fn disabled_flag() {
        let c = sample();
        assert!(!c.is_disabled(&"a"));
        assert!(c.is_disabled(&"b"));
        assert!(!c.is_disabled(&"missing"));
    }

    #[test]
    fn text_values() {
        let c = sample();
        assert_eq!(c.item(&"a").unwrap().text_value.as_deref(), Some("Apple"));
        assert_eq!(c.item(&"c").unwrap().text_value, None);
    }
}
