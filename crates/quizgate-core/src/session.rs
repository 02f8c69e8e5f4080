//! Page session state.
//!
//! A `Session` lives exactly as long as one page load. It is created
//! unauthenticated with zero warnings and is only ever reset by a reload.

/// Authentication flag plus the proctoring warning counter.
///
/// # Invariants
///
/// - `warning_count` never decreases within a session
/// - Only [`crate::SessionGate`] sets `authenticated`; only logout and
///   disqualification clear it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    authenticated: bool,
    warning_count: u32,
}

impl Session {
    /// Fresh page-load session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the quiz view is reachable.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Number of tab-switch warnings recorded in this session.
    pub fn warning_count(&self) -> u32 {
        self.warning_count
    }

    pub(crate) fn authenticate(&mut self) {
        self.authenticated = true;
    }

    /// Clear authentication. Warnings are kept.
    pub(crate) fn revoke(&mut self) {
        self.authenticated = false;
    }

    /// Record one warning and return the new count.
    pub(crate) fn record_warning(&mut self) -> u32 {
        self.warning_count = self.warning_count.saturating_add(1);
        self.warning_count
    }
}
