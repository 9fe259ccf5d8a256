//! Type 14 — Enhanced Other Network (§4.9). Version B carries only the
//! always-emitted PI/PTY fields plus the `pi_on`/`tp_on` tail below;
//! the per-variant payload in block 2 is a version-A-only field.

use crate::af::format_frequency;
use crate::data::pty as pty_table;
use crate::group::{bit, bits, split_bytes, Group, Version};
use crate::record::Record;
use crate::state::ParserState;

pub fn decode(group: &Group, state: &mut ParserState) -> Vec<Record> {
    let tp_on = bit(group.b1, 4) != 0;
    let variant = (group.b1 & 0xF) as u8;
    let info = group.b2;
    let pi_on = group.b3;

    let mut text = if matches!(group.version(), Version::A) {
        decode_variant(variant, info, state)
    } else {
        String::new()
    };

    if pi_on != 0 {
        if !text.is_empty() {
            text.push_str(", ");
        }
        text.push_str(&format!("PI(ON)={pi_on:04X}"));
        if tp_on {
            text.push_str(", TP(ON)");
        }
    }

    vec![Record::Pty(text)]
}

fn decode_variant(variant: u8, info: u16, state: &mut ParserState) -> String {
    match variant {
        0..=3 => {
            let (hi, lo) = split_bytes(info);
            let offset = 2 * variant as usize;
            state.eon_ps[offset] = hi;
            state.eon_ps[offset + 1] = lo;
            String::from_utf8_lossy(&state.eon_ps[..8]).into_owned()
        }
        4 => {
            let (b1, b2) = split_bytes(info);
            let khz1 = (b1 as f64 + 875.0) * 100.0;
            let khz2 = (b2 as f64 + 875.0) * 100.0;
            format!(
                "AF(ON)={}, {}",
                format_frequency(crate::af::Band::Vhf, khz1).unwrap_or_default(),
                format_frequency(crate::af::Band::Vhf, khz2).unwrap_or_default(),
            )
        }
        5..=8 => {
            let (tuned, other) = split_bytes(info);
            let tuned_khz = (tuned as f64 + 875.0) * 100.0;
            let other_khz = (other as f64 + 875.0) * 100.0;
            format!(
                "mapped freq: tuned={}, other={}",
                format_frequency(crate::af::Band::Vhf, tuned_khz).unwrap_or_default(),
                format_frequency(crate::af::Band::Vhf, other_khz).unwrap_or_default(),
            )
        }
        9 => {
            let (tuned, other) = split_bytes(info);
            let tuned_khz = (tuned as f64 + 875.0) * 100.0;
            let other_khz = (other as f64 - 16.0) * 9.0 + 531.0;
            format!(
                "mapped freq: tuned={}, other={}",
                format_frequency(crate::af::Band::Vhf, tuned_khz).unwrap_or_default(),
                format_frequency(crate::af::Band::LfMf, other_khz).unwrap_or_default(),
            )
        }
        10 | 11 => "unallocated".to_string(),
        12 => format!("linkage information: {info:04X}"),
        13 => {
            let ta_on = bit(info, 0) != 0;
            let pty_on = bits(info, 11, 5) as u8;
            format!("TA(ON)={}, PTY(ON)={}", ta_on as u8, pty_table::name(pty_on))
        }
        14 => format!("PIN(ON)={info:04X}"),
        _ => "reserved for broadcasters".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(b0: u16, b1: u16, b2: u16, b3: u16) -> Group {
        Group { b0, b1, b2, b3 }
    }

    #[test]
    fn pi_on_is_appended_when_nonzero() {
        let mut state = ParserState::default();
        let records = decode(&group(0, 0x000A, 0, 0xBEEF), &mut state);
        assert!(records[0].text().contains("PI(ON)=BEEF"));
    }

    #[test]
    fn pi_on_absent_when_zero() {
        let mut state = ParserState::default();
        let records = decode(&group(0, 0x000A, 0, 0), &mut state);
        assert!(!records[0].text().contains("PI(ON)"));
    }

    #[test]
    fn variant_13_resolves_pty_name() {
        let mut state = ParserState::default();
        let info = 1u16 << 11; // PTY(ON) = 1 -> "News"
        let records = decode(&group(0, 0x000D, info, 0), &mut state);
        assert!(records[0].text().contains("News"));
    }
}
