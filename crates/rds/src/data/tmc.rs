//! Traffic Message Channel reference data: duration classes, the event
//! table and its code index, and the optional-content label/length
//! tables used by the §4.8.1 optional-content walk (ISO 14819-1/-2).
//!
//! The full ISO 14819-2 event table runs to several thousand entries;
//! this keeps a representative subset and falls back to a textual
//! "unknown event" marker for anything not listed, the same way the
//! decoder falls back rather than panics on every other guarded lookup.

use once_cell::sync::Lazy;
use std::collections::HashMap;

pub static DURATION_NAMES: Lazy<[&'static str; 8]> = Lazy::new(|| {
    [
        "no duration given",
        "15 minutes",
        "30 minutes",
        "1 hour",
        "2 hours",
        "3 hours",
        "4 hours",
        "rest of the day",
    ]
});

/// Duration (or continuity-index, for multi-group messages) description.
/// `dp_ci` is masked to 3 bits, so this never indexes out of bounds.
pub fn duration_name(dp_ci: u8) -> &'static str {
    DURATION_NAMES[(dp_ci & 0x7) as usize]
}

static EVENT_TABLE: Lazy<HashMap<u16, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (1, "traffic problem"),
        (2, "closed"),
        (3, "queuing traffic"),
        (4, "slow traffic"),
        (5, "stationary traffic"),
        (25, "accident"),
        (50, "roadworks"),
        (100, "overtaking lane closed"),
        (200, "fog"),
        (257, "snow"),
        (300, "icy road"),
        (401, "heavy traffic"),
        (513, "vehicle on fire"),
        (700, "danger of avalanches"),
        (800, "demonstration"),
        (1400, "earlier accident removed"),
        (1500, "earlier congestion cleared"),
    ])
});

/// Event description for an 11-bit TMC event code. Codes outside the
/// retained subset resolve to a visible, non-panicking placeholder.
pub fn event_name(event_code: u16) -> &'static str {
    EVENT_TABLE.get(&event_code).copied().unwrap_or("unknown event")
}

pub static LABEL_DESCRIPTIONS: Lazy<[&'static str; 16]> = Lazy::new(|| {
    [
        "end of optional content",
        "additional information",
        "detailed diversion instructions",
        "destination",
        "routeing advice",
        "extent of congestion (distance)",
        "extent of congestion (time)",
        "speed limit advice",
        "duration of delay",
        "start time",
        "end time",
        "cause of event",
        "vehicles affected",
        "number of vehicles involved",
        "supplementary information",
        "date and time of the event",
    ]
});

static LABEL_LENGTHS: Lazy<[u8; 16]> =
    Lazy::new(|| [0, 3, 3, 5, 5, 5, 8, 8, 3, 8, 8, 5, 3, 8, 8, 8]);

/// Bit width of the content field following a given 4-bit optional-
/// content label. `label` is masked to 4 bits, so this never indexes
/// out of bounds.
pub fn content_length(label: u8) -> u8 {
    LABEL_LENGTHS[(label & 0xF) as usize]
}

/// Description for a 4-bit optional-content label.
pub fn label_description(label: u8) -> &'static str {
    LABEL_DESCRIPTIONS[(label & 0xF) as usize]
}
