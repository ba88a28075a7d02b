//! Domain models for reaction role synchronization.
//!
//! - `reaction` - Inbound reaction events and the role mutations derived from them
//! - `reaction_map` - The validated emoji to role mapping loaded at startup

pub mod reaction;
pub mod reaction_map;
