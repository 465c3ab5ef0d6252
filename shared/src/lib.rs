//! Shared types for the Mandi platform
//!
//! Domain vocabulary used across crates: user roles, verification states,
//! and id/time utilities. Kept free of storage concerns so a future client
//! surface can depend on it directly.

pub mod role;
pub mod util;

// Re-exports
pub use role::{UserRole, VerificationStatus};
pub use serde::{Deserialize, Serialize};
