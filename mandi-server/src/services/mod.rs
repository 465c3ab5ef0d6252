//! Service layer: identity, catalog, commerce
//!
//! Services compose repositories and own the business rules. All state
//! flows through explicit arguments (user ids, drafts, payloads); no
//! service consults ambient global state.

pub mod catalog;
pub mod commerce;
pub mod identity;

pub use catalog::CatalogService;
pub use commerce::{CartTotals, CommerceService};
pub use identity::IdentityService;
