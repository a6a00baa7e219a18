//! Synapse HTTP server library.
//!
//! Exposes the gateway router so the binary and integration tests share one wiring.

pub mod gateway;
