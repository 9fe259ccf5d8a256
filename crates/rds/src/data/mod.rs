//! Read-only reference tables. Data, not logic: every public function
//! here is a guarded table lookup with no side effects.

pub mod coverage;
pub mod countries;
pub mod group_types;
pub mod languages;
pub mod pty;
pub mod tmc;
