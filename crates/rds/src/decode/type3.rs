//! Type 3A — application identification / TMC announcement (§4.6).

use crate::group::{bit, bits, Group};
use crate::record::Record;
use crate::state::ParserState;

const GAP_GROUPS: [u8; 4] = [3, 5, 8, 11];

pub fn decode(group: &Group, _state: &mut ParserState) -> Vec<Record> {
    let app_group = bits(group.b1, 1, 4) as u8;
    let app_version = bit(group.b1, 0);
    let message = group.b2;
    let aid = group.b3;

    let text = if app_group == 8 && app_version == 0 {
        let variant = bits(message, 14, 2);
        match variant {
            0 => {
                let location_table = bits(message, 6, 6);
                let afi = bit(message, 5);
                let mode = bit(message, 4);
                let i = bit(message, 3);
                let n = bit(message, 2);
                let r = bit(message, 1);
                let u = bit(message, 0);
                format!(
                    "TMC announcement: location-table:{location_table}, afi:{afi}, mode:{mode}, i:{i}, n:{n}, r:{r}, u:{u}, aid:{aid:04X}"
                )
            }
            1 => {
                let gap_index = bits(message, 12, 2) as usize;
                let sid = bits(message, 6, 6);
                format!(
                    "TMC announcement: gap:{} groups, SID:{sid:02X}",
                    GAP_GROUPS[gap_index]
                )
            }
            _ => format!("TMC announcement: message:{message:04X} - aid:{aid:04X}"),
        }
    } else {
        format!("message:{message:04X} - aid:{aid:04X}")
    };

    vec![Record::Pty(text)]
}
