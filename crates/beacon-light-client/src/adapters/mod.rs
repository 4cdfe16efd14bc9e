//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits: blst crypto, SSZ chain-spec helpers,
//! the branch proof checker and observers.

mod blst_crypto;
#[cfg(feature = "metrics")]
mod prometheus_observer;
mod proof_checker;
mod ssz_chain_spec;
mod tracing_observer;

pub use blst_crypto::{BlstCrypto, DST};
#[cfg(feature = "metrics")]
pub use prometheus_observer::PrometheusObserver;
pub use proof_checker::PendingProofChecker;
pub use ssz_chain_spec::SszChainSpec;
pub use tracing_observer::TracingObserver;
