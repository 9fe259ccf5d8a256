//! Type 1A — slow labelling (§4.4). Version B is dispatched nowhere
//! near this decoder; see the dispatch table in `crate::dispatch`.

use tracing::debug;

use crate::data::{countries, languages};
use crate::group::{bits, Group};
use crate::record::Record;
use crate::state::ParserState;

const INVALID: &str = "invalid";

pub fn decode(group: &Group, _state: &mut ParserState) -> Vec<Record> {
    let variant = bits(group.b2, 12, 3) as u8;
    let slow_label = bits(group.b2, 0, 12);

    let mut records = Vec::new();
    match variant {
        0 => {
            let paging = bits(slow_label, 8, 4) as u8;
            let ecc = (slow_label & 0xFF) as u8;
            debug!(paging, ecc, "type 1A variant 0 (ECC)");
            let name = countries::ecc_name(group.country(), ecc);
            records.push(Record::Pty(name.to_string()));
        }
        1 => records.push(Record::Pty("TMC identification".to_string())),
        2 => records.push(Record::Pty("Paging identification".to_string())),
        3 => {
            let name = languages::name(slow_label).unwrap_or(INVALID);
            records.push(Record::Pty(name.to_string()));
        }
        _ => {}
    }

    let day = bits(group.b3, 11, 5);
    let hour = bits(group.b3, 6, 5);
    let minute = bits(group.b3, 0, 6);
    if day != 0 || hour != 0 || minute != 0 {
        debug!(day, hour, minute, "programme item time");
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(b0: u16, b1: u16, b2: u16, b3: u16) -> Group {
        Group { b0, b1, b2, b3 }
    }

    #[test]
    fn variant_0_resolves_ecc() {
        let mut state = ParserState::default();
        // country=1 (B0 top nibble), ecc=224 (slow_label low byte)
        let records = decode(&group(0x1000, 0, 0x00E0, 0), &mut state);
        assert_eq!(records[0].text(), "Germany");
    }

    #[test]
    fn variant_3_resolves_language() {
        let mut state = ParserState::default();
        let records = decode(&group(0x0000, 0, 0x3009, 0), &mut state);
        assert_eq!(records[0].text(), "English");
    }

    #[test]
    fn variant_3_out_of_range_is_invalid() {
        let mut state = ParserState::default();
        let records = decode(&group(0x0000, 0, 0x3FFF, 0), &mut state);
        assert_eq!(records[0].text(), INVALID);
    }

    #[test]
    fn unassigned_variant_emits_nothing() {
        let mut state = ParserState::default();
        let records = decode(&group(0x0000, 0, 0x4000, 0), &mut state);
        assert!(records.is_empty());
    }
}
