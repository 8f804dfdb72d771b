//! Per-tick passes that operate across several entity managers.
//!
//! Systems are free functions. They do not own state; everything lives in
//! the managers owned by the round controller.

pub mod collision;
pub mod snapshot;
