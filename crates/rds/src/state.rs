//! The parser's accumulating view of the current station.
//!
//! Everything here is mutated only by [`crate::dispatch::Parser`], one
//! group at a time; [`ParserState::reset`] is the only operation a
//! caller on another thread may invoke (through a mutex the dispatcher
//! holds for the duration of one group's processing, see
//! [`crate::dispatch`]).

use std::collections::HashMap;

use crate::af::AfDecoder;

/// The seven single-bit per-station flags, consolidated into named
/// fields rather than left as scattered booleans.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flags {
    pub tp: bool,
    pub ta: bool,
    pub musp: bool,
    pub most: bool,
    pub ah: bool,
    pub cmp: bool,
    pub st_pty: bool,
}

impl Flags {
    /// Render as the seven-character `'0'`/`'1'` string, in the fixed
    /// order TP, TA, MuSp, MoSt, AH, CMP, stPTY.
    pub fn as_bitstring(&self) -> String {
        [
            self.tp, self.ta, self.musp, self.most, self.ah, self.cmp,
            self.st_pty,
        ]
        .iter()
        .map(|&b| if b { '1' } else { '0' })
        .collect()
    }

    /// Set one of {MoSt, AH, CMP, stPTY} by DI segment address (0..3).
    pub fn set_di(&mut self, segment: u8, bit: bool) {
        match segment & 0x3 {
            0 => self.most = bit,
            1 => self.ah = bit,
            2 => self.cmp = bit,
            _ => self.st_pty = bit,
        }
    }
}

/// Multi-group TMC reassembly. The source never properly initialises
/// `expected_groups` before it is read; here it is `None` until an
/// `sg=1` continuation group has actually announced it, and
/// optional-content decoding only runs once a head group has been
/// observed (see `crate::decode::type8`).
#[derive(Debug, Clone, Default)]
pub enum TmcAssembly {
    #[default]
    Idle,
    Collecting {
        expected_groups: Option<u8>,
        slots: HashMap<u8, u32>,
    },
}

impl TmcAssembly {
    pub fn begin() -> Self {
        TmcAssembly::Collecting { expected_groups: None, slots: HashMap::new() }
    }
}

/// The accumulating decoded view of one station, reset explicitly by
/// [`ParserState::reset`].
#[derive(Debug, Clone)]
pub struct ParserState {
    pub pi: u16,
    pub pty: u8,
    pub flags: Flags,
    pub ps_buf: [u8; 8],
    pub rt_buf: [u8; 64],
    pub rt_ab: u8,
    pub af: AfDecoder,
    pub tmc: TmcAssembly,
    pub eon_ps: [u8; 9],
}

impl Default for ParserState {
    fn default() -> Self {
        Self {
            pi: 0,
            pty: 0,
            flags: Flags::default(),
            ps_buf: [b' '; 8],
            rt_buf: [b' '; 64],
            rt_ab: 0,
            af: AfDecoder::default(),
            tmc: TmcAssembly::default(),
            eon_ps: eon_ps_initial(),
        }
    }
}

fn eon_ps_initial() -> [u8; 9] {
    let mut buf = [b' '; 9];
    buf[8] = 0;
    buf
}

impl ParserState {
    /// Re-initialise every field to its starting value. Callers observe
    /// this as atomic: the dispatcher takes the same lock around a
    /// single group's processing, so no decoder ever sees a state that
    /// is reset halfway.
    pub fn reset(&mut self) {
        *self = ParserState::default();
    }

    pub fn ps_string(&self) -> String {
        String::from_utf8_lossy(&self.ps_buf).into_owned()
    }

    pub fn rt_string(&self) -> String {
        String::from_utf8_lossy(&self.rt_buf).into_owned()
    }
}
