//! Per-group decoders, one module per supported group type (§4.3-§4.10).
//! Each `decode` takes the group and the mutable parser state it
//! updates, and returns the records that group produced.

pub mod type0;
pub mod type1;
pub mod type14;
pub mod type15;
pub mod type2;
pub mod type3;
pub mod type4;
pub mod type8;
