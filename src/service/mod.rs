//! Core reaction role components.
//!
//! - `reaction_role` - Turns reaction events into role mutations and notifications
//! - `role_cache` - Role display names used in notification text
//! - `reconcile` - Re-asserts the configured reactions on the target message at startup
//! - `notification` - Best-effort direct messages to users
//! - `report` - Sink for platform errors that are contained rather than propagated

pub mod notification;
pub mod reaction_role;
pub mod reconcile;
pub mod report;
pub mod role_cache;

pub use notification::Notifier;
pub use reaction_role::{ReactionRoleService, SyncOutcome};
pub use reconcile::ReactionReconciler;
pub use report::{ErrorReporter, TracingReporter};
pub use role_cache::RoleNameCache;
