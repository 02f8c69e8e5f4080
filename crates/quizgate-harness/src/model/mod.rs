//! Reference model for model-based testing.
//!
//! The model is a flat restatement of the quiz page rules: a handful of
//! booleans and counters, no listeners, no actions. It serves as the oracle
//! against which the real app is verified.
//!
//! # Design Principles
//!
//! - Simplicity: The model should be obviously correct
//! - Rules not mechanism: Captures WHAT, not HOW
//! - Deterministic: Same inputs produce same outputs

pub mod operation;
mod real;
mod session;

pub use operation::Operation;
pub use real::RealSession;
pub use session::{ModelSession, ObservableState};
