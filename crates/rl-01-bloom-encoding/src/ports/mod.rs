//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - encoding API for data holders
//! - Driven Ports (outbound) - source of identifying data

pub mod inbound;
pub mod outbound;

pub use inbound::RecordEncodingApi;
pub use outbound::{IdatProvider, LocalIdat};
