//! # Integration Tests
//!
//! End-to-end flows through `SyncProtocolService` with blst signatures and
//! SSZ signing roots.
