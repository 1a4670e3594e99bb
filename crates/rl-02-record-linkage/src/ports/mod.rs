//! Ports Layer
//!
//! - Driving Port (inbound) - linkage API of the trusted party

pub mod inbound;

pub use inbound::RecordLinkageApi;
