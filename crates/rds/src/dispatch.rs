//! The dispatcher: validates inbound payloads, performs the fixed
//! extraction (§4.1), and routes to the per-group decoder. Grounded on
//! the channel-in/channel-out consumer loop shape of the teacher's
//! Beast source, generalised from "read bytes off a socket" to "drain
//! an inbound mpsc channel of opaque group payloads".

use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use tracing::{debug, warn};

use crate::data::{coverage, group_types, pty};
use crate::decode;
use crate::group::Group;
use crate::record::Record;
use crate::state::ParserState;

/// Dispatches inbound RDS groups to per-group decoders and publishes
/// the resulting records, holding a lock on [`ParserState`] for the
/// duration of exactly one group (§5).
pub struct Parser {
    state: Arc<Mutex<ParserState>>,
    log: bool,
    debug: bool,
}

impl Parser {
    pub fn new(log: bool, debug: bool) -> Self {
        Self { state: Arc::new(Mutex::new(ParserState::default())), log, debug }
    }

    /// Re-initialise parser state to its starting values. Safe to call
    /// from any task: it takes the same lock `process_group` does, so
    /// no group is ever decoded against a half-reset state.
    pub async fn reset(&self) {
        self.state.lock().await.reset();
    }

    /// Parse one 8-byte group payload and return the records it
    /// produced, in emission order (PI, PTY, then the decoder's own).
    /// Malformed payloads are logged and yield no records; no state is
    /// mutated.
    pub async fn process_group(&self, payload: &[u8]) -> Vec<Record> {
        let group = match Group::from_bytes(payload) {
            Ok(group) => group,
            Err(err) => {
                warn!(%err, "dropping malformed group");
                return Vec::new();
            }
        };

        let mut state = self.state.lock().await;
        state.pi = group.pi();
        state.pty = group.pty();

        if self.debug {
            debug!(
                group_type = group.group_type(),
                version = ?group.version(),
                acronym = group_types::acronym(group.group_type(), group.version()),
                pi = format!("{:04X}", group.pi()),
                pty = pty::name(group.pty()),
                country = group.country(),
                area = coverage::name(group.area()),
                prn = group.prn(),
                "accepted group"
            );
        }

        let mut records = vec![Record::pi(group.pi()), Record::Pty(pty::name(group.pty()).to_string())];

        use crate::group::Version::{A, B};
        let mut decoded = match (group.group_type(), group.version()) {
            (0, A) | (0, B) => decode::type0::decode(&group, &mut state),
            (1, A) => decode::type1::decode(&group, &mut state),
            (2, A) | (2, B) => decode::type2::decode(&group, &mut state),
            (3, A) => decode::type3::decode(&group, &mut state),
            (4, A) => decode::type4::decode(&group, &mut state),
            (8, A) => decode::type8::decode(&group, &mut state),
            (14, A) | (14, B) => decode::type14::decode(&group, &mut state),
            (15, B) => decode::type15::decode(&group, &mut state),
            (group_type, version) => {
                if self.log {
                    warn!(
                        group_type,
                        version = ?version,
                        acronym = group_types::acronym(group_type, version),
                        "unsupported group type/version, no decoder"
                    );
                }
                Vec::new()
            }
        };
        records.append(&mut decoded);
        records
    }

    /// Drain `inbound` and forward every produced record to `outbound`,
    /// preserving per-group ordering, until the channel closes.
    pub async fn run(
        &self,
        mut inbound: mpsc::Receiver<Vec<u8>>,
        outbound: mpsc::Sender<Record>,
    ) {
        while let Some(payload) = inbound.recv().await {
            for record in self.process_group(&payload).await {
                if outbound.send(record).await.is_err() {
                    warn!("outbound channel closed, stopping dispatcher");
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack(b0: u16, b1: u16, b2: u16, b3: u16) -> Vec<u8> {
        [b0, b1, b2, b3].iter().flat_map(|w| w.to_ne_bytes()).collect()
    }

    #[tokio::test]
    async fn malformed_payload_yields_no_records() {
        let parser = Parser::new(false, false);
        let records = parser.process_group(&[0u8; 3]).await;
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn every_group_emits_pi_and_pty_first() {
        let parser = Parser::new(false, false);
        let payload = pack(0xD388, 0x0540, 0x0123, 0x4567);
        let records = parser.process_group(&payload).await;
        assert_eq!(records[0].kind(), 0);
        assert_eq!(records[0].text(), "D388");
        assert_eq!(records[1].kind(), 2);
    }

    #[tokio::test]
    async fn unsupported_group_type_still_emits_pi_pty() {
        let parser = Parser::new(true, false);
        let payload = pack(0x1234, 0x5000, 0, 0); // group_type 5, no decoder
        let records = parser.process_group(&payload).await;
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn reset_clears_state_between_groups() {
        let parser = Parser::new(false, false);
        parser.process_group(&pack(0xD388, 0x0000, 0, 0x4142)).await;
        parser.reset().await;
        let state = parser.state.lock().await;
        assert_eq!(state.pi, 0);
    }

    #[tokio::test]
    async fn run_forwards_every_record_in_order() {
        let parser = Parser::new(false, false);
        let (in_tx, in_rx) = mpsc::channel(4);
        let (out_tx, mut out_rx) = mpsc::channel(16);
        in_tx.send(pack(0xD388, 0x0540, 0x0123, 0x4567)).await.unwrap();
        drop(in_tx);
        parser.run(in_rx, out_tx).await;
        let first = out_rx.recv().await.unwrap();
        assert_eq!(first.kind(), 0);
    }
}
