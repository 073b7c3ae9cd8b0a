// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection state and mode semantics.
//!
//! ## Failure semantics
//!
//! Every mutator is permissive: unknown keys, a `None` selection mode, or a
//! refusal forced by [`SelectionOptions::disallow_empty_selection`] result in
//! `false` ("nothing changed") rather than an error. The collection can
//! change asynchronously relative to queued interactions, so stale keys are a
//! normal condition here, not a bug.
//!
//! ## Change tracking
//!
//! Mutators return whether the state changed and bump [`SelectionManager::epoch`]
//! on real changes only. Re-selecting the selected key in single mode is
//! suppressed unless [`SelectionOptions::allow_duplicate_selection_events`]
//! is set, in which case it counts as a change event even though the selected
//! set is identical.

use alloc::vec::Vec;

use crate::collection::Collection;
use crate::types::SelectionMode;

/// Construction options for [`SelectionManager`].
#[derive(Copy, Clone, Debug, Default)]
pub struct SelectionOptions {
    /// Selection mode; `None` disables all selection mutators.
    pub mode: SelectionMode,
    /// Refuse mutations that would empty a non-empty selection.
    pub disallow_empty_selection: bool,
    /// Report re-selection of the already-selected key as a change.
    pub allow_duplicate_selection_events: bool,
}

/// Owns selected keys, the focused key, and the selection-mode rules.
///
/// The manager does not own the collection; mutators take it by reference so
/// the same manager can follow a collection that is rebuilt between events.
#[derive(Clone, Debug)]
pub struct SelectionManager<K> {
    options: SelectionOptions,
    selected: Vec<K>,
    focused_key: Option<K>,
    epoch: u64,
}

impl<K: Clone + Eq> SelectionManager<K> {
    /// Create an empty manager.
    pub fn new(options: SelectionOptions) -> Self {
        Self {
            options,
            selected: Vec::new(),
            focused_key: None,
            epoch: 0,
        }
    }

    /// The configured selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.options.mode
    }

    /// Counter of real state changes, for host-side recomputation.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Selected keys in the order they were selected.
    ///
    /// For collection-ordered endpoints see [`Self::first_selected_key`] and
    /// [`Self::last_selected_key`].
    pub fn selected_keys(&self) -> &[K] {
        &self.selected
    }

    /// True if `key` is selected.
    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    /// True if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The selected key that comes first in collection order.
    pub fn first_selected_key<'a>(&self, collection: &'a Collection<K>) -> Option<&'a K> {
        collection
            .iter()
            .map(|item| &item.key)
            .find(|key| self.is_selected(key))
    }

    /// The selected key that comes last in collection order.
    pub fn last_selected_key<'a>(&self, collection: &'a Collection<K>) -> Option<&'a K> {
        let mut last = None;
        for item in collection.iter() {
            if self.is_selected(&item.key) {
                last = Some(&item.key);
            }
        }
        last
    }

    /// The key with keyboard focus, if any.
    pub fn focused_key(&self) -> Option<&K> {
        self.focused_key.as_ref()
    }

    /// Move keyboard focus to `key`, or clear it with `None`.
    ///
    /// The key must exist in the collection; unknown keys are ignored.
    /// Disabled keys are legal focus targets here — the keyboard delegates
    /// never produce them, but a host may focus one directly (e.g. hover).
    pub fn set_focused_key(&mut self, collection: &Collection<K>, key: Option<K>) -> bool {
        if let Some(k) = &key
            && !collection.contains_key(k)
        {
            return false;
        }
        if self.focused_key == key {
            return false;
        }
        self.focused_key = key;
        self.bump();
        true
    }

    /// Replace the entire selection with `key`.
    ///
    /// In single mode, re-selecting the selected key is suppressed unless
    /// duplicate events are allowed.
    pub fn replace_selection(&mut self, collection: &Collection<K>, key: &K) -> bool {
        if self.options.mode == SelectionMode::None || !collection.contains_key(key) {
            return false;
        }
        let already = self.selected.len() == 1 && self.selected[0] == *key;
        if already && !self.options.allow_duplicate_selection_events {
            return false;
        }
        self.selected.clear();
        self.selected.push(key.clone());
        self.bump();
        true
    }

    /// Toggle `key`: add if absent, remove if present.
    ///
    /// In single mode, toggling an unselected key replaces the selection.
    /// Removal is refused when it would empty the selection and
    /// [`SelectionOptions::disallow_empty_selection`] is set.
    pub fn toggle_selection(&mut self, collection: &Collection<K>, key: &K) -> bool {
        if self.options.mode == SelectionMode::None || !collection.contains_key(key) {
            return false;
        }
        if let Some(pos) = self.selected.iter().position(|k| k == key) {
            if self.selected.len() == 1 && self.options.disallow_empty_selection {
                return false;
            }
            self.selected.remove(pos);
            self.bump();
            return true;
        }
        if self.options.mode == SelectionMode::Single {
            return self.replace_selection(collection, key);
        }
        self.selected.push(key.clone());
        self.bump();
        true
    }

    /// Select `key` using the mode's default gesture: replace in single mode,
    /// toggle in multiple mode.
    pub fn select(&mut self, collection: &Collection<K>, key: &K) -> bool {
        match self.options.mode {
            SelectionMode::None => false,
            SelectionMode::Single => self.replace_selection(collection, key),
            SelectionMode::Multiple => self.toggle_selection(collection, key),
        }
    }

    /// Clear all selected keys.
    ///
    /// A no-op when the selection is already empty or emptying is disallowed.
    pub fn clear_selection(&mut self) -> bool {
        if self.selected.is_empty() || self.options.disallow_empty_selection {
            return false;
        }
        self.selected.clear();
        self.bump();
        true
    }

    fn bump(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
    }
}
