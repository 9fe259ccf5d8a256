//! Coverage-area names, IEC 62106 Annex D.1 (PI area-coverage nibble).

use once_cell::sync::Lazy;

pub static AREA_NAMES: Lazy<[&'static str; 16]> = Lazy::new(|| {
    [
        "local",
        "international",
        "national",
        "supra-regional",
        "regional 1",
        "regional 2",
        "regional 3",
        "regional 4",
        "regional 5",
        "regional 6",
        "regional 7",
        "regional 8",
        "regional 9",
        "regional 10",
        "regional 11",
        "regional 12",
    ]
});

/// Name for a coverage-area code. `area` is masked to 4 bits, so this
/// never indexes out of bounds.
pub fn name(area: u8) -> &'static str {
    AREA_NAMES[(area & 0xF) as usize]
}
