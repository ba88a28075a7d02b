//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON, simulating what
//! Discord's API and gateway would deliver, with sensible defaults for every field the
//! bot doesn't read.
//!
//! # Available Factories
//!
//! - `role::create_test_role` - Create Serenity Role objects
//! - `reaction::create_test_reaction` - Create Serenity Reaction gateway events

pub mod reaction;
pub mod role;

// Re-export commonly used functions for convenience
pub use reaction::create_test_reaction;
pub use role::create_test_role;
