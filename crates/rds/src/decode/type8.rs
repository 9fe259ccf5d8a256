//! Type 8A — Traffic Message Channel (§4.8, §4.8.1).

use tracing::warn;

use crate::data::tmc;
use crate::group::{bit, bits, Group};
use crate::record::Record;
use crate::state::{ParserState, TmcAssembly};

pub fn decode(group: &Group, state: &mut ParserState) -> Vec<Record> {
    let t = bit(group.b1, 4);
    let f = bit(group.b1, 3);
    let d = bit(group.b2, 15);

    if t == 1 {
        return decode_tuning(group);
    }
    if f == 1 || (f == 0 && d == 1) {
        return decode_user_message(group, state, f == 0);
    }
    decode_continuation(group, state)
}

fn decode_tuning(group: &Group) -> Vec<Record> {
    let variant = (group.b1 & 0xF) as u8;
    let text = match variant {
        4..=9 => format!(
            "tuning info: variant {variant}, {:04X} {:04X}",
            group.b2, group.b3
        ),
        _ => "invalid".to_string(),
    };
    vec![Record::Pty(text)]
}

fn decode_user_message(group: &Group, state: &mut ParserState, is_head_of_burst: bool) -> Vec<Record> {
    let dp_ci = (group.b1 & 0x7) as u8;
    let sign = bit(group.b2, 14);
    let extent = bits(group.b2, 11, 3) as u8;
    let event = bits(group.b2, 0, 11);
    let location = group.b3;

    if is_head_of_burst {
        state.tmc = TmcAssembly::begin();
    }

    // Single-group messages (F=1) render dp_ci as a duration via the
    // table; a multi-group head (F=0,D=1) carries a continuity index
    // instead, a plain number with no table lookup (§4.8).
    let duration = if is_head_of_burst {
        format!("continuity index:{dp_ci}")
    } else {
        tmc::duration_name(dp_ci).to_string()
    };
    let event_name = tmc::event_name(event);
    let extent_sign = if sign != 0 { "-" } else { "+" };
    let text = format!(
        "{duration}, extent:{extent_sign}{}, event:{event_name}, location:{location:04X}",
        extent + 1
    );
    vec![Record::Pty(text)]
}

fn decode_continuation(group: &Group, state: &mut ParserState) -> Vec<Record> {
    let sg = bit(group.b2, 14);
    let gsi = bits(group.b2, 12, 2) as u8;
    let payload = ((group.b2 as u32 & 0xFFF) << 16) | group.b3 as u32;

    let TmcAssembly::Collecting { expected_groups, slots } = &mut state.tmc else {
        warn!("TMC continuation group with no head group observed, dropping");
        return Vec::new();
    };

    slots.insert(gsi, payload);
    if sg == 1 {
        *expected_groups = Some(gsi);
    }

    if gsi == 0 {
        let expected_groups = *expected_groups;
        let slots = slots.clone();
        state.tmc = TmcAssembly::Idle;
        return decode_optional_content(&slots, expected_groups);
    }

    Vec::new()
}

/// Walk the reassembled burst MSB-first as (4-bit label, variable
/// content) pairs (Open Question 1: re-derived from ISO 14819-1 §7
/// rather than transliterated from the source's buggy loop).
fn decode_optional_content(
    slots: &std::collections::HashMap<u8, u32>,
    expected_groups: Option<u8>,
) -> Vec<Record> {
    let highest = expected_groups.unwrap_or(3).min(3);
    let mut bitstream: Vec<u8> = Vec::new();
    for gsi in (0..=highest).rev() {
        if let Some(&payload) = slots.get(&gsi) {
            for i in (0..28).rev() {
                bitstream.push(((payload >> i) & 1) as u8);
            }
        }
    }

    let mut records = Vec::new();
    let mut pos = 0usize;
    while pos + 4 <= bitstream.len() {
        let label = read_bits(&bitstream, pos, 4) as u8;
        pos += 4;
        if label == 0 {
            break;
        }
        let len = tmc::content_length(label) as usize;
        if len == 0 || pos + len > bitstream.len() {
            break;
        }
        let content = read_bits(&bitstream, pos, len);
        pos += len;
        records.push(Record::Pty(format!(
            "{}: {content}",
            tmc::label_description(label)
        )));
    }
    records
}

fn read_bits(bits: &[u8], pos: usize, len: usize) -> u32 {
    bits[pos..pos + len]
        .iter()
        .fold(0u32, |acc, &b| (acc << 1) | b as u32)
}
