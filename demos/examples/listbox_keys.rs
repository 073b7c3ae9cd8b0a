// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listbox keyboard navigation and selection.
//!
//! Wires a collection, a keyboard delegate, and a selection manager together
//! the way a listbox widget would, then replays a short key sequence.
//!
//! Run:
//! - `cargo run -p trellis_demos --example listbox_keys`

use trellis_selection::{
    Collection, Item, ItemFlags, ListKeyboardDelegate, Orientation, SelectionManager,
    SelectionMode, SelectionOptions, TextDirection,
};

enum Key {
    Down,
    Up,
    Enter,
    Char(char),
}

fn main() {
    let collection: Collection<&str> = [
        Item::new("apple").with_text_value("Apple"),
        Item::new("banana").with_text_value("Banana"),
        Item::new("cherry").with_flags(ItemFlags::DISABLED).with_text_value("Cherry"),
        Item::new("date").with_text_value("Date"),
        Item::new("elderberry").with_text_value("Elderberry"),
    ]
    .into_iter()
    .collect();

    let delegate = ListKeyboardDelegate::new(Orientation::Vertical, TextDirection::Ltr);
    let mut manager = SelectionManager::new(SelectionOptions {
        mode: SelectionMode::Multiple,
        ..Default::default()
    });

    let sequence = [
        Key::Down,      // -> Apple
        Key::Down,      // -> Banana
        Key::Enter,     // toggle Banana
        Key::Down,      // skips disabled Cherry -> Date
        Key::Enter,     // toggle Date
        Key::Char('e'), // typeahead -> Elderberry
        Key::Up,        // back -> Date
    ];

    for key in sequence {
        let focused = manager.focused_key().copied();
        let next = match key {
            Key::Down => match focused {
                Some(ref k) => delegate.key_below(&collection, k),
                None => delegate.first_key(&collection),
            },
            Key::Up => match focused {
                Some(ref k) => delegate.key_above(&collection, k),
                None => delegate.last_key(&collection),
            },
            Key::Char(c) => {
                delegate.key_for_search(&collection, &c.to_string(), focused.as_ref())
            }
            Key::Enter => {
                if let Some(k) = focused {
                    manager.select(&collection, &k);
                }
                None
            }
        };
        if let Some(key) = next {
            manager.set_focused_key(&collection, Some(key));
        }
        println!(
            "focused {:?}, selected {:?}",
            manager.focused_key(),
            manager.selected_keys()
        );
    }

    assert_eq!(manager.focused_key(), Some(&"date"));
    assert!(manager.is_selected(&"banana") && manager.is_selected(&"date"));
    assert_eq!(
        manager.first_selected_key(&collection),
        Some(&"banana"),
        "endpoints follow collection order"
    );
}
