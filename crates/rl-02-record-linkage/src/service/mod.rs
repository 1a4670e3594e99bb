//! Service Layer
//!
//! Contains the matchers and the linkage service that exposes them.

pub mod federated;
pub mod linkage_service;
pub mod single_org;

pub use federated::{FederatedMatcher, PARALLEL_THRESHOLD};
pub use linkage_service::LinkageService;
pub use single_org::SingleOrganizationMatcher;
