//! The seven outbound record kinds (§4.11) and their text rendering.

use std::fmt;

use serde::Serialize;

/// One decoded record, tagged with its `kind` integer (§4.11, §6) on
/// serialisation so callers who only see JSON can still dispatch on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text")]
pub enum Record {
    #[serde(rename = "0")]
    Pi(String),
    #[serde(rename = "1")]
    Ps(String),
    #[serde(rename = "2")]
    Pty(String),
    #[serde(rename = "3")]
    Flags(String),
    #[serde(rename = "4")]
    RadioText(String),
    #[serde(rename = "5")]
    ClockTime(String),
    #[serde(rename = "6")]
    Af(String),
}

impl Record {
    /// The integer kind from §4.11's `{0:PI, 1:PS, 2:PTY, 3:flags, 4:RT,
    /// 5:clock, 6:AF}` enumeration.
    pub fn kind(&self) -> u8 {
        match self {
            Record::Pi(_) => 0,
            Record::Ps(_) => 1,
            Record::Pty(_) => 2,
            Record::Flags(_) => 3,
            Record::RadioText(_) => 4,
            Record::ClockTime(_) => 5,
            Record::Af(_) => 6,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Record::Pi(s)
            | Record::Ps(s)
            | Record::Pty(s)
            | Record::Flags(s)
            | Record::RadioText(s)
            | Record::ClockTime(s)
            | Record::Af(s) => s,
        }
    }

    pub fn pi(pi: u16) -> Self {
        Record::Pi(format!("{pi:04X}"))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:?})", self.kind(), self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pi_is_four_uppercase_hex_digits() {
        let record = Record::pi(0xD388);
        assert_eq!(record.text(), "D388");
        assert_eq!(record.kind(), 0);
    }

    #[test]
    fn kind_numbers_match_the_enumeration() {
        assert_eq!(Record::Ps("A".into()).kind(), 1);
        assert_eq!(Record::Pty("A".into()).kind(), 2);
        assert_eq!(Record::Flags("A".into()).kind(), 3);
        assert_eq!(Record::RadioText("A".into()).kind(), 4);
        assert_eq!(Record::ClockTime("A".into()).kind(), 5);
        assert_eq!(Record::Af("A".into()).kind(), 6);
    }
}
