//! Type 4A — clock-time (§4.7).

use crate::group::{bit, bits, Group};
use crate::record::Record;
use crate::state::ParserState;
use crate::time::mjd_to_date;

pub fn decode(group: &Group, _state: &mut ParserState) -> Vec<Record> {
    let mjd = ((bits(group.b1, 0, 2) as u32) << 15) | (bits(group.b2, 1, 15) as u32);
    let hours = (bit(group.b2, 0) << 4) | bits(group.b3, 12, 4);
    let minutes = bits(group.b3, 6, 6);
    let offset = bits(group.b3, 0, 5) as f64 / 2.0;
    let negative = bit(group.b3, 5) != 0;
    let signed_offset = if negative { -offset } else { offset };

    let date = mjd_to_date(mjd);
    let text = format!(
        "{:02}.{:02}.{:04}, {:02}:{:02} ({}{:.1}h)",
        date.day,
        date.month,
        date.year,
        hours,
        minutes,
        if signed_offset < 0.0 { "" } else { "+" },
        signed_offset,
    );

    vec![Record::ClockTime(text)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(b0: u16, b1: u16, b2: u16, b3: u16) -> Group {
        Group { b0, b1, b2, b3 }
    }

    #[test]
    fn new_year_2020_zero_offset() {
        let mut state = ParserState::default();
        // MJD=58849 split as (B1&0x3)<<15 | (B2>>1)&0x7FFF; hours=1,
        // minutes=0, offset=+0 packed into B3's top nibble.
        let records = decode(&group(0, 0x4001, 0xCBC2, 0x1000), &mut state);
        assert_eq!(records[0].text(), "01.01.2020, 01:00 (+0.0h)");
    }
}
