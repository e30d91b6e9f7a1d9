//! Maintenance operations for meetkeep
//!
//! Each operation is an independent top-level boundary: it runs to
//! completion or returns a typed error, and never affects the others.

pub mod backup;
pub mod orphans;
pub mod status;
