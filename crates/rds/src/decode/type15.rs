//! Type 15B — fast basic tuning (§4.10). Carries nothing beyond the
//! always-emitted PI/PTY; this decoder is a no-op sentinel.

use crate::group::Group;
use crate::record::Record;
use crate::state::ParserState;

pub fn decode(_group: &Group, _state: &mut ParserState) -> Vec<Record> {
    Vec::new()
}
