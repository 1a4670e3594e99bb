//! Adapters Layer
//!
//! - `InMemoryIdatProvider`: serves identifying data held in memory

pub mod in_memory;

pub use in_memory::InMemoryIdatProvider;
