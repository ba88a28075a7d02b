//! Reaction Roles Test Utils
//!
//! Provides shared testing utilities for unit tests of the reaction role bot. Serenity
//! models can't be constructed directly since most of them are `#[non_exhaustive]`, so
//! the factories here build them by deserializing the JSON Discord would send.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_reaction, create_test_role};
//!
//! #[tokio::test]
//! async fn test_reaction_sync() {
//!     let role = create_test_role(101, "Green Team");
//!     let reaction = create_test_reaction(30, 20, Some(10), Some(40), "🟢");
//!
//!     // Use in your tests...
//! }
//! ```

pub mod serenity;
