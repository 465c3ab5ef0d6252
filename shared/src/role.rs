//! User roles and verification states
//!
//! # 角色与仪表盘
//!
//! | 角色 | 仪表盘 |
//! |------|--------|
//! | farmer, fpo | `/dashboard/farmer` |
//! | processor, startup, retailer | `/dashboard/buyer` |
//! | consumer | `/dashboard/consumer` |

use serde::{Deserialize, Serialize};

/// Platform user role
///
/// FPO = Farmer Producer Organization (farmer collective).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Farmer,
    Fpo,
    Processor,
    Startup,
    Retailer,
    Consumer,
}

impl UserRole {
    /// Dashboard route for this role
    ///
    /// Producer roles land on the farmer dashboard, business buyer roles on
    /// the buyer dashboard, consumers on the consumer storefront.
    pub fn dashboard_route(&self) -> &'static str {
        match self {
            UserRole::Farmer | UserRole::Fpo => "/dashboard/farmer",
            UserRole::Processor | UserRole::Startup | UserRole::Retailer => "/dashboard/buyer",
            UserRole::Consumer => "/dashboard/consumer",
        }
    }

    /// Whether the role sells produce (as opposed to buying it)
    pub fn is_producer(&self) -> bool {
        matches!(self, UserRole::Farmer | UserRole::Fpo)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UserRole::Farmer => "farmer",
            UserRole::Fpo => "fpo",
            UserRole::Processor => "processor",
            UserRole::Startup => "startup",
            UserRole::Retailer => "retailer",
            UserRole::Consumer => "consumer",
        };
        f.write_str(s)
    }
}

/// Document verification state of a registered account
///
/// Transitions pending → approved via the simulated review workflow;
/// rejected is reachable only through manual updates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Pending,
    Approved,
    Rejected,
}

impl VerificationStatus {
    /// Terminal states stop the verification watcher
    pub fn is_terminal(&self) -> bool {
        !matches!(self, VerificationStatus::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_routes() {
        assert_eq!(UserRole::Farmer.dashboard_route(), "/dashboard/farmer");
        assert_eq!(UserRole::Fpo.dashboard_route(), "/dashboard/farmer");
        assert_eq!(UserRole::Processor.dashboard_route(), "/dashboard/buyer");
        assert_eq!(UserRole::Startup.dashboard_route(), "/dashboard/buyer");
        assert_eq!(UserRole::Retailer.dashboard_route(), "/dashboard/buyer");
        assert_eq!(UserRole::Consumer.dashboard_route(), "/dashboard/consumer");
    }

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Fpo).unwrap(), "\"fpo\"");
        let role: UserRole = serde_json::from_str("\"retailer\"").unwrap();
        assert_eq!(role, UserRole::Retailer);
    }

    #[test]
    fn test_terminal_states() {
        assert!(!VerificationStatus::Pending.is_terminal());
        assert!(VerificationStatus::Approved.is_terminal());
        assert!(VerificationStatus::Rejected.is_terminal());
    }
}
