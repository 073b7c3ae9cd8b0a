// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard delegates: directional intent → collection keys.
//!
//! ## Semantics
//!
//! - [`next_key`](ListKeyboardDelegate::next_key) and
//!   [`previous_key`](ListKeyboardDelegate::previous_key) wrap at the ends
//!   and skip disabled items; they return `None` only when every item is
//!   disabled.
//! - Directional mapping is axis-exclusive: a horizontal list ignores
//!   up/down, a vertical list ignores left/right. Under right-to-left text
//!   direction, left/right swap for horizontal lists.
//! - Typeahead matches the items' text values by case-insensitive (ASCII)
//!   prefix, starting after the current key and wrapping once.
//!
//! The delegate holds no state; it is pure traversal over a
//! [`Collection`](crate::collection::Collection).

use crate::collection::Collection;
use crate::types::{Orientation, TextDirection};

/// Keyboard navigation for a single-axis list.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ListKeyboardDelegate {
    orientation: Orientation,
    direction: TextDirection,
}

impl ListKeyboardDelegate {
    /// Create a delegate for the given axis and text direction.
    pub fn new(orientation: Orientation, direction: TextDirection) -> Self {
        Self {
            orientation,
            direction,
        }
    }

    /// The list's main axis.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The configured text direction.
    pub fn direction(&self) -> TextDirection {
        self.direction
    }

    /// Next enabled key after `key`, wrapping at the end.
    pub fn next_key<K: Clone + Eq>(&self, collection: &Collection<K>, key: &K) -> Option<K> {
        self.step(collection, key, 1)
    }

    /// Previous enabled key before `key`, wrapping at the start.
    pub fn previous_key<K: Clone + Eq>(&self, collection: &Collection<K>, key: &K) -> Option<K> {
        self.step(collection, key, -1)
    }

    /// First enabled key.
    pub fn first_key<K: Clone + Eq>(&self, collection: &Collection<K>) -> Option<K> {
        collection
            .iter()
            .find(|item| !item.is_disabled())
            .map(|item| item.key.clone())
    }

    /// Last enabled key.
    pub fn last_key<K: Clone + Eq>(&self, collection: &Collection<K>) -> Option<K> {
        let mut last = None;
        for item in collection.iter() {
            if !item.is_disabled() {
                last = Some(item.key.clone());
            }
        }
        last
    }

    /// Key for a "left" intent, or `None` off-axis.
    pub fn key_left_of<K: Clone + Eq>(&self, collection: &Collection<K>, key: &K) -> Option<K> {
        match (self.orientation, self.direction) {
            (Orientation::Horizontal, TextDirection::Ltr) => self.previous_key(collection, key),
            (Orientation::Horizontal, TextDirection::Rtl) => self.next_key(collection, key),
            (Orientation::Vertical, _) => None,
        }
    }

    /// Key for a "right" intent, or `None` off-axis.
    pub fn key_right_of<K: Clone + Eq>(&self, collection: &Collection<K>, key: &K) -> Option<K> {
        match (self.orientation, self.direction) {
            (Orientation::Horizontal, TextDirection::Ltr) => self.next_key(collection, key),
            (Orientation::Horizontal, TextDirection::Rtl) => self.previous_key(collection, key),
            (Orientation::Vertical, _) => None,
        }
    }

    /// Key for an "up" intent, or `None` off-axis.
    pub fn key_above<K: Clone + Eq>(&self, collection: &Collection<K>, key: &K) -> Option<K> {
        match self.orientation {
            Orientation::Vertical => self.previous_key(collection, key),
            Orientation::Horizontal => None,
        }
    }

    /// Key for a "down" intent, or `None` off-axis.
    pub fn key_below<K: Clone + Eq>(&self, collection: &Collection<K>, key: &K) -> Option<K> {
        match self.orientation {
            Orientation::Vertical => self.next_key(collection, key),
            Orientation::Horizontal => None,
        }
    }

    /// First enabled key whose text value starts with `search`, scanning
    /// forward from just after `from` (or the start) and wrapping once.
    pub fn key_for_search<K: Clone + Eq>(
        &self,
        collection: &Collection<K>,
        search: &str,
        from: Option<&K>,
    ) -> Option<K> {
        let len = collection.len();
        if len == 0 || search.is_empty() {
            return None;
        }
        let start = match from.and_then(|key| collection.index_of(key)) {
            Some(i) => i + 1,
            None => 0,
        };
        for offset in 0..len {
            let item = collection.get((start + offset) % len)?;
            if item.is_disabled() {
                continue;
            }
            if let Some(text) = &item.text_value
                && starts_with_ignore_case(text, search)
            {
                return Some(item.key.clone());
            }
        }
        None
    }

    fn step<K: Clone + Eq>(
        &self,
        collection: &Collection<K>,
        key: &K,
        dir: isize,
    ) -> Option<K> {
        let len = collection.len();
        let start = collection.index_of(key)?;
        // Visit every other index once; landing back on `start` is legal when
        // it is the only enabled item.
        for offset in 1..=len {
            let delta = (offset as isize * dir).rem_euclid(len as isize) as usize;
            let item = collection.get((start + delta) % len)?;
            if !item.is_disabled() {
                return Some(item.key.clone());
            }
        }
        None
    }
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    let mut chars = text.chars();
    prefix
        .chars()
        .all(|p| chars.next().is_some_and(|c| c.eq_ignore_ascii_case(&p)))
}
