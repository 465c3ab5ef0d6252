//! Session Model

use serde::{Deserialize, Serialize};
use shared::UserRole;

/// Login session
///
/// At most one session exists per store (single slot, overwritten on
/// login). Sessions carry no expiry; they live until logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub role: UserRole,
    pub name: String,
    pub login_time: String,
}
