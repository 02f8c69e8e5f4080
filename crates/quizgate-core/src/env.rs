//! Environment abstraction for deterministic testing.
//!
//! The `Environment` trait decouples the quiz state machines from system
//! resources (clock, timers, randomness). Toast lifetimes are computed from
//! `now()`, and session identifiers come from `random_bytes()`, so a test
//! environment with a virtual clock and a seeded RNG replays any event
//! sequence exactly.
//!
//! # Invariants
//!
//! - Monotonicity: `env.now()` must never go backwards
//! - Determinism: Given the same seed, `random_bytes()` produces the same
//!   sequence
//! - Isolation: Implementations must not share global state

use std::{fmt::Debug, future::Future, ops::Add, time::Duration};

/// Abstract environment providing time, randomness, and async primitives.
///
/// State machines only call `now()` and `random_bytes()`. `sleep()` exists
/// for drivers that pace ticks.
pub trait Environment: Clone + Send + Sync + 'static {
    /// Point in time used for toast expiry.
    ///
    /// `std::time::Instant` in production, a virtual instant in simulation.
    type Instant: Copy + Ord + Debug + Send + Sync + Add<Duration, Output = Self::Instant>;

    /// Returns the current time.
    ///
    /// # Invariants
    ///
    /// - Monotonicity: Subsequent calls must return times >= previous calls.
    fn now(&self) -> Self::Instant;

    /// Sleeps for the specified duration.
    ///
    /// Only driver code awaits this; state machines never do.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;

    /// Fills the provided buffer with random bytes.
    ///
    /// Simulation implementations must be seeded so runs are reproducible.
    fn random_bytes(&self, buffer: &mut [u8]);

    /// Generates a random `u64`.
    ///
    /// Used for exam session identifiers in logs.
    fn random_u64(&self) -> u64 {
        let mut bytes = [0u8; 8];
        self.random_bytes(&mut bytes);
        u64::from_be_bytes(bytes)
    }
}
