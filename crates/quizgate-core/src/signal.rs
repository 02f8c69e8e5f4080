//! Proctoring signals.
//!
//! A signal is one client-observable event the monitor may listen to. The
//! set of signal *sources* a monitor is subscribed to is tracked as
//! [`Signals`] flags.

use bitflags::bitflags;

bitflags! {
    /// Set of signal sources.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Signals: u8 {
        /// Clipboard paste.
        const PASTE = 0b001;
        /// Clipboard copy.
        const COPY = 0b010;
        /// Document visibility change.
        const VISIBILITY = 0b100;
    }
}

impl Signals {
    /// Every source the monitor subscribes to while armed.
    pub const PROCTORED: Self = Self::all();
}

/// One observed signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    /// Clipboard paste into the page.
    Paste,
    /// Clipboard copy from the page.
    Copy,
    /// The document's visibility changed.
    Visibility {
        /// `true` when the document became hidden.
        hidden: bool,
    },
}

impl Signal {
    /// Source this signal is delivered through.
    pub fn source(self) -> Signals {
        match self {
            Self::Paste => Signals::PASTE,
            Self::Copy => Signals::COPY,
            Self::Visibility { .. } => Signals::VISIBILITY,
        }
    }

    /// Whether the signal carries a suppressible default action.
    pub fn is_clipboard(self) -> bool {
        matches!(self, Self::Paste | Self::Copy)
    }
}
