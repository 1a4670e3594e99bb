//! Ports layer for pseudonyms

pub mod inbound;

pub use inbound::PseudonymizationApi;
