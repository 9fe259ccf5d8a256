//! Programme Type (PTY) names, IEC 62106 Annex E.1 (European table).

use once_cell::sync::Lazy;

pub static PTY_NAMES: Lazy<[&'static str; 32]> = Lazy::new(|| {
    [
        "No programme type",
        "News",
        "Current affairs",
        "Information",
        "Sport",
        "Education",
        "Drama",
        "Culture",
        "Science",
        "Varied",
        "Pop music",
        "Rock music",
        "Easy listening",
        "Light classical",
        "Serious classical",
        "Other music",
        "Weather",
        "Finance",
        "Children's programmes",
        "Social affairs",
        "Religion",
        "Phone in",
        "Travel",
        "Leisure",
        "Jazz music",
        "Country music",
        "National music",
        "Oldies music",
        "Folk music",
        "Documentary",
        "Alarm test",
        "Alarm",
    ]
});

/// Name for a PTY code. `pty` is masked to 5 bits, so this never
/// indexes out of bounds even on adversarial input.
pub fn name(pty: u8) -> &'static str {
    PTY_NAMES[(pty & 0x1F) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_has_a_name() {
        for pty in 0..=31u8 {
            assert!(!name(pty).is_empty());
        }
    }

    #[test]
    fn masks_out_of_range_input() {
        assert_eq!(name(0xFF), name(0x1F));
    }
}
