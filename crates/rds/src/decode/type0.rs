//! Type 0 — basic tuning & switching (§4.3).

use crate::af::format_frequency;
use crate::group::{bit, bits, split_bytes, Group, Version};
use crate::record::Record;
use crate::state::ParserState;

pub fn decode(group: &Group, state: &mut ParserState) -> Vec<Record> {
    let ta = bit(group.b1, 4) != 0;
    let musp = bit(group.b1, 3) != 0;
    let di = bit(group.b1, 2) != 0;
    let segment = bits(group.b1, 0, 2) as u8;

    state.flags.tp = group.tp();
    state.flags.ta = ta;
    state.flags.musp = musp;
    state.flags.set_di(segment, di);

    let (hi, lo) = split_bytes(group.b3);
    let offset = 2 * segment as usize;
    state.ps_buf[offset] = hi;
    state.ps_buf[offset + 1] = lo;

    let mut records = vec![
        Record::Ps(state.ps_string()),
        Record::Flags(state.flags.as_bitstring()),
    ];

    // Block 2's AF bytes are only meaningful on version A; 0B reserves
    // them for PI repetition (Design Note / Open Question 4). A kind-6
    // record is still emitted for 0B, blank, since §4.3 emits it for
    // both versions.
    let af_text = if matches!(group.version(), Version::A) {
        let (af1, af2) = split_bytes(group.b2);
        let khz1 = state.af.decode(af1);
        let khz2 = state.af.decode(af2);
        let band = state.af.band();
        let mut parts = Vec::new();
        if let Some(text) = format_frequency(band, khz1) {
            parts.push(text);
        }
        if let Some(text) = format_frequency(band, khz2) {
            parts.push(text);
        }
        parts.join(", ")
    } else {
        String::new()
    };
    records.push(Record::Af(af_text));

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(b0: u16, b1: u16, b2: u16, b3: u16) -> Group {
        Group { b0, b1, b2, b3 }
    }

    #[test]
    fn ps_assembly_across_four_segments() {
        let mut state = ParserState::default();
        for (segment, b3) in [(0u16, 0x4142u16), (1, 0x4344), (2, 0x4546), (3, 0x4748)] {
            decode(&group(0x1111, 0x0000 | segment, 0, b3), &mut state);
        }
        assert_eq!(state.ps_string(), "ABCDEFGH");
    }

    #[test]
    fn flags_record_is_seven_bits() {
        let mut state = ParserState::default();
        let records = decode(&group(0x1111, 0x0400, 0, 0), &mut state);
        let flags = records
            .iter()
            .find(|r| r.kind() == 3)
            .expect("flags record present");
        assert_eq!(flags.text().len(), 7);
        assert_eq!(&flags.text()[0..1], "1"); // TP set via bit 10
    }

    #[test]
    fn version_b_emits_blank_af_record() {
        let mut state = ParserState::default();
        let records = decode(&group(0x1111, 0x0800, 0xE5E5, 0), &mut state);
        let af = records.iter().find(|r| r.kind() == 6).expect("AF record present");
        assert_eq!(af.text(), "");
    }

    #[test]
    fn version_a_decodes_af_pair() {
        let mut state = ParserState::default();
        // announce one VHF AF, then a concrete code in the same group:
        // AF1 = preamble (225 => 1 VHF AF follows), AF2 = 100 (=> 97.5MHz)
        let records = decode(&group(0x1111, 0x0000, 0xE164, 0), &mut state);
        let af = records.iter().find(|r| r.kind() == 6).unwrap();
        assert_eq!(af.text(), "97.50MHz");
    }
}
