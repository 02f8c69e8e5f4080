//! Deterministic simulation harness for quiz session testing.
//!
//! A virtual-clock implementation of the `Environment` trait, so toast expiry
//! and session identifiers replay exactly from a seed.
//!
//! # Model-Based Testing
//!
//! The `model` module provides a reference implementation for model-based
//! testing. Operations are applied to both the model and the real app, and
//! their observable states are compared.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod model;
pub mod sim_env;

pub use model::{ModelSession, ObservableState, Operation, RealSession};
pub use sim_env::{SimEnv, SimInstant};
