//! Type 2 — radiotext (§4.5).

use crate::group::{bit, bits, split_bytes, Group, Version};
use crate::record::Record;
use crate::state::ParserState;

pub fn decode(group: &Group, state: &mut ParserState) -> Vec<Record> {
    let segment = bits(group.b1, 0, 4) as u8;
    let ab = bit(group.b1, 4) as u8;

    if ab != state.rt_ab {
        state.rt_buf = [b' '; 64];
        state.rt_ab = ab;
    }

    match group.version() {
        Version::A => {
            let (b2_hi, b2_lo) = split_bytes(group.b2);
            let (b3_hi, b3_lo) = split_bytes(group.b3);
            let offset = 4 * segment as usize;
            state.rt_buf[offset] = b2_hi;
            state.rt_buf[offset + 1] = b2_lo;
            state.rt_buf[offset + 2] = b3_hi;
            state.rt_buf[offset + 3] = b3_lo;
        }
        Version::B => {
            let (b3_hi, b3_lo) = split_bytes(group.b3);
            let offset = 2 * segment as usize;
            state.rt_buf[offset] = b3_hi;
            state.rt_buf[offset + 1] = b3_lo;
        }
    }

    vec![Record::RadioText(state.rt_string())]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(b0: u16, b1: u16, b2: u16, b3: u16) -> Group {
        Group { b0, b1, b2, b3 }
    }

    #[test]
    fn version_a_first_segment() {
        let mut state = ParserState::default();
        let records = decode(&group(0x1111, 0x2000, 0x4869, 0x2121), &mut state);
        assert_eq!(&records[0].text()[0..4], "Hi!!");
    }

    #[test]
    fn ab_toggle_flushes_buffer() {
        let mut state = ParserState::default();
        decode(&group(0x1111, 0x2000, 0x4869, 0x2121), &mut state);
        let records = decode(&group(0x1111, 0x2010, 0x4142, 0x4344), &mut state);
        let text = records[0].text();
        assert_eq!(&text[0..4], "ABCD");
        assert!(text[4..].bytes().all(|b| b == b' '));
    }

    #[test]
    fn version_b_writes_two_bytes_per_segment() {
        let mut state = ParserState::default();
        let records = decode(&group(0x1111, 0x2800, 0x0000, 0x4142), &mut state);
        assert_eq!(&records[0].text()[0..2], "AB");
    }
}
