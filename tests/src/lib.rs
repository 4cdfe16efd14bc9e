//! # Beacon Light Client Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Committees with real BLS secret keys, signed updates
//! └── integration/      # End-to-end sync flows through SyncProtocolService
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p blc-tests
//!
//! # Benchmarks
//! cargo bench -p blc-tests
//! ```

pub mod fixtures;
pub mod integration;
