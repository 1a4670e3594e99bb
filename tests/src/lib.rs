//! # Record-Linkage Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/
//! │   ├── fixtures.rs         # Identifying data and encoders shared by tests
//! │   └── integration/        # Cross-crate flows
//! │       ├── flows.rs        # encode → transfer → link → pseudonymize
//! │       ├── federated.rs    # Multi-organization clustering
//! │       └── properties.rs   # Property tests over real encodings
//! └── benches/
//!     └── linkage_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p rl-tests
//!
//! # By category
//! cargo test -p rl-tests integration::flows::
//!
//! # Benchmarks
//! cargo bench -p rl-tests
//! ```

pub mod fixtures;
pub mod integration;
