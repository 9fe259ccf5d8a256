#![doc = include_str!("../readme.md")]

pub mod af;
pub mod data;
pub mod decode;
pub mod dispatch;
pub mod group;
pub mod record;
pub mod state;
pub mod time;

pub mod prelude {
    pub use crate::dispatch::Parser;
    pub use crate::group::{Group, GroupError, Version};
    pub use crate::record::Record;
    pub use crate::state::{Flags, ParserState, TmcAssembly};
}
