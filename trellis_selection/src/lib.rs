// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Selection: keyed collections, selection state, keyboard delegates.
//!
//! ## Overview
//!
//! This crate is the shared state core behind list-shaped widgets — listbox,
//! combobox, tabs, toggle group. It has three layers:
//!
//! 1. [`Collection`](crate::collection::Collection): an ordered sequence of
//!    keyed items, each with flags (disabled) and an optional text value for
//!    typeahead. Order is significant for next/previous navigation.
//! 2. [`SelectionManager`](crate::manager::SelectionManager): selected keys,
//!    the focused key, and the selection-mode semantics (none, single,
//!    multiple), including empty-selection and duplicate-event policies.
//! 3. [`ListKeyboardDelegate`](crate::keyboard::ListKeyboardDelegate): pure
//!    mapping from directional intent to collection keys, aware of
//!    orientation and text direction, skipping disabled items.
//!
//! ## Contract
//!
//! Operations on unknown keys are no-ops: the collection can change
//! asynchronously relative to pending operations, so the manager absorbs
//! stale keys instead of erroring. Mutators return whether the state actually
//! changed, and [`SelectionManager::epoch`](crate::manager::SelectionManager::epoch)
//! counts real changes so hosts can recompute derived views.
//!
//! ## Example
//!
//! ```rust
//! use trellis_selection::collection::{Collection, Item};
//! use trellis_selection::keyboard::ListKeyboardDelegate;
//! use trellis_selection::manager::{SelectionManager, SelectionOptions};
//! use trellis_selection::types::{ItemFlags, Orientation, SelectionMode, TextDirection};
//!
//! let mut list: Collection<&str> = Collection::new();
//! list.push(Item::new("a"));
//! list.push(Item::new("b").with_flags(ItemFlags::DISABLED));
//! list.push(Item::new("c"));
//!
//! let delegate = ListKeyboardDelegate::new(Orientation::Vertical, TextDirection::Ltr);
//! assert_eq!(delegate.first_key(&list), Some("a"));
//! // Disabled items are skipped.
//! assert_eq!(delegate.next_key(&list, &"a"), Some("c"));
//!
//! let mut selection = SelectionManager::new(SelectionOptions {
//!     mode: SelectionMode::Single,
//!     ..Default::default()
//! });
//! assert!(selection.replace_selection(&list, &"c"));
//! assert!(selection.is_selected(&"c"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod collection;
pub mod keyboard;
pub mod manager;
pub mod types;

pub use collection::{Collection, Item};
pub use keyboard::ListKeyboardDelegate;
pub use manager::{SelectionManager, SelectionOptions};
pub use types::{ItemFlags, Orientation, SelectionMode, TextDirection};
