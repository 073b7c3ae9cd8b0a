// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared enums and item flags.

bitflags::bitflags! {
    /// Per-item flags controlling interactivity.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// Item cannot be selected or focused by keyboard navigation.
        const DISABLED = 0b0000_0001;
    }
}

/// How many items may be selected at once.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum SelectionMode {
    /// Selection is not interactive; all mutators are no-ops.
    #[default]
    None,
    /// At most one key; selecting a new key replaces the old one.
    Single,
    /// Any number of keys.
    Multiple,
}

/// Main axis of a list widget.
///
/// Directional keyboard mapping is axis-exclusive: a horizontal list does not
/// respond to vertical arrow intents, and vice versa.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Orientation {
    /// Items flow top to bottom; up/down navigate.
    #[default]
    Vertical,
    /// Items flow along the reading direction; left/right navigate.
    Horizontal,
}

/// Text direction, flipping left/right mapping for horizontal lists.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum TextDirection {
    /// Left-to-right scripts.
    #[default]
    Ltr,
    /// Right-to-left scripts.
    Rtl,
}
