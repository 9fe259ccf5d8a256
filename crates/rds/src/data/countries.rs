//! PI country / Extended Country Code (ECC) table, IEC 62106 Annex D.2.
//!
//! Indexed by the PI country nibble (1..=15; `0` is reserved) and by
//! `ecc - 224` (`ecc` is only meaningful in `224..=228`, one column per
//! ITU broadcasting area sharing that nibble).

use once_cell::sync::Lazy;

const UNKNOWN_COUNTRY: &str = "unknown country";
const INVALID: &str = "invalid";

pub static COUNTRY_CODES: Lazy<[[&'static str; 5]; 15]> = Lazy::new(|| {
    [
        ["Germany", "Algeria", "Albania", "Andorra", "Angola"],
        ["Morocco", "Egypt", "Austria", "Belgium", "Benin"],
        ["France", "Ghana", "Belarus", "Bulgaria", "Botswana"],
        ["Netherlands", "Iraq", "Bosnia-Herzegovina", "Croatia", "Burkina Faso"],
        ["Luxembourg", "Iran", "Cyprus", "Cyprus", "Burundi"],
        ["Ireland", "Israel", "Czechia", "Czechia", "Cameroon"],
        ["United Kingdom", "Jordan", "Estonia", "Estonia", "Cape Verde"],
        ["Denmark", "Kuwait", "Finland", "Finland", "Central African Republic"],
        ["Switzerland", "Lebanon", "Georgia", "Georgia", "Chad"],
        ["Czechia", "Libya", "Greece", "Greece", "Comoros"],
        ["Belgium", "Mauritania", "Hungary", "Hungary", "Congo"],
        ["Iceland", "Morocco", "Italy", "Italy", "Cote d'Ivoire"],
        ["Italy", "Oman", "Latvia", "Latvia", "Djibouti"],
        ["Finland", "Qatar", "Liechtenstein", "Liechtenstein", "Egypt"],
        ["Greece", "Saudi Arabia", "Lithuania", "Lithuania", "Equatorial Guinea"],
    ]
});

/// Extended Country Code lookup. `country` is the PI country nibble
/// (`1..=15`); `0` is reserved by the standard and has no row, so it is
/// guarded explicitly rather than indexed as `country - 1`. `ecc`
/// outside `224..=228` has no column either.
pub fn ecc_name(country: u8, ecc: u8) -> &'static str {
    if country == 0 || country > 15 {
        return UNKNOWN_COUNTRY;
    }
    match ecc {
        224..=228 => COUNTRY_CODES[(country - 1) as usize][(ecc - 224) as usize],
        _ => INVALID,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_country() {
        assert_eq!(ecc_name(1, 224), "Germany");
        assert_eq!(ecc_name(7, 224), "United Kingdom");
    }

    #[test]
    fn guards_reserved_country_nibble() {
        assert_eq!(ecc_name(0, 224), UNKNOWN_COUNTRY);
    }

    #[test]
    fn guards_ecc_out_of_range() {
        assert_eq!(ecc_name(1, 100), INVALID);
        assert_eq!(ecc_name(1, 229), INVALID);
    }
}
