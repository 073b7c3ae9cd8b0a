// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Formatting hints for locale-aware hosts.
//!
//! Trellis owns no formatting logic; the host's internationalization layer
//! formats dates and ranges. Two small pieces of the contract live here: the
//! era-display rule and the split of a formatted range into separate start and
//! end strings for a "doubled" localized announcement.

use alloc::string::String;
use chrono::{Datelike, NaiveDate};

/// Era display style requested from the host's date formatter.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EraFormat {
    /// Abbreviated era name (for example "BC").
    Short,
}

/// Era display hint for a date.
///
/// Only dates before the common era ask for an era; everything else formats
/// without one. This is a display hint, not a general era rule.
pub fn era_format(date: NaiveDate) -> Option<EraFormat> {
    // Astronomical year numbering: year 0 is 1 BCE.
    (date.year() < 1).then_some(EraFormat::Short)
}

/// Which side of a formatted range a part belongs to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RangeSource {
    /// Part of the start date.
    Start,
    /// Part shared between both dates (separators, shared fields).
    Shared,
    /// Part of the end date.
    End,
}

/// One token of a formatter's range-parts output.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RangeFormatPart {
    /// Side of the range this part describes.
    pub source: RangeSource,
    /// True for literal text (separators, spaces) rather than a date field.
    pub literal: bool,
    /// The formatted text of the part.
    pub text: String,
}

/// Split a range-parts stream into separate start and end display strings.
///
/// The split point is the last shared literal before the first end-range
/// part: everything before it joins the start string, everything after it
/// the end string, and the separator itself is dropped. With no such
/// separator the whole stream is treated as the end string, which matches
/// formatters that collapse identical ranges.
pub fn split_range_parts(parts: &[RangeFormatPart]) -> (String, String) {
    let mut separator = None;
    for (i, part) in parts.iter().enumerate() {
        if part.source == RangeSource::Shared && part.literal {
            separator = Some(i);
        } else if part.source == RangeSource::End {
            break;
        }
    }

    let mut start = String::new();
    let mut end = String::new();
    for (i, part) in parts.iter().enumerate() {
        match separator {
            Some(sep) if i < sep => start.push_str(&part.text),
            Some(sep) if i > sep => end.push_str(&part.text),
            Some(_) => {}
            None => end.push_str(&part.text),
        }
    }
    (start, end)
}

/// Convenience constructor for range parts.
impl RangeFormatPart {
    /// A date-field part.
    pub fn field(source: RangeSource, text: impl Into<String>) -> Self {
        Self {
            source,
            literal: false,
            text: text.into(),
        }
    }

    /// A literal (separator) part.
    pub fn literal(source: RangeSource, text: impl Into<String>) -> Self {
        Self {
            source,
            literal: true,
            text: text.into(),
        }
    }
}
