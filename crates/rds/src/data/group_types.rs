//! Group-type acronyms, e.g. `"0A"`, `"15B"` — 16 group-type numbers times
//! the two version letters, IEC 62106 table 2.

use once_cell::sync::Lazy;

use crate::group::Version;

pub static ACRONYMS: Lazy<[[&'static str; 2]; 16]> = Lazy::new(|| {
    [
        ["0A", "0B"],
        ["1A", "1B"],
        ["2A", "2B"],
        ["3A", "3B"],
        ["4A", "4B"],
        ["5A", "5B"],
        ["6A", "6B"],
        ["7A", "7B"],
        ["8A", "8B"],
        ["9A", "9B"],
        ["10A", "10B"],
        ["11A", "11B"],
        ["12A", "12B"],
        ["13A", "13B"],
        ["14A", "14B"],
        ["15A", "15B"],
    ]
});

/// The acronym for a group-type/version pair, e.g. `"8A"`. `group_type`
/// is masked to 4 bits so this never indexes out of bounds.
pub fn acronym(group_type: u8, version: Version) -> &'static str {
    let row = ACRONYMS[(group_type & 0xF) as usize];
    match version {
        Version::A => row[0],
        Version::B => row[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_acronyms() {
        assert_eq!(acronym(0, Version::A), "0A");
        assert_eq!(acronym(8, Version::A), "8A");
        assert_eq!(acronym(15, Version::B), "15B");
    }

    #[test]
    fn masks_out_of_range_input() {
        assert_eq!(acronym(0xFF, Version::A), acronym(0xF, Version::A));
    }
}
