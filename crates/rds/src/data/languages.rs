//! Language names for type-1A variant-3 slow labelling, IEC 62106 Annex J
//! (44-entry language code table).

use once_cell::sync::Lazy;

pub static LANGUAGE_NAMES: Lazy<[&'static str; 44]> = Lazy::new(|| {
    [
        "Unknown",
        "Albanian",
        "Breton",
        "Catalan",
        "Croatian",
        "Welsh",
        "Czech",
        "Danish",
        "German",
        "English",
        "Spanish",
        "Esperanto",
        "Estonian",
        "Basque",
        "Faroese",
        "French",
        "Frisian",
        "Irish",
        "Gaelic",
        "Galician",
        "Icelandic",
        "Italian",
        "Lappish",
        "Latin",
        "Latvian",
        "Luxembourgian",
        "Lithuanian",
        "Hungarian",
        "Maltese",
        "Dutch",
        "Norwegian",
        "Occitan",
        "Polish",
        "Portuguese",
        "Romanian",
        "Romansh",
        "Serbian",
        "Slovak",
        "Slovene",
        "Finnish",
        "Swedish",
        "Turkish",
        "Flemish",
        "Walloon",
    ]
});

/// Language name for a slow-label value. Callers must pre-check
/// `slow_label < 44`; this crate never calls it otherwise.
pub fn name(slow_label: u16) -> Option<&'static str> {
    LANGUAGE_NAMES.get(slow_label as usize).copied()
}
