//! Transient notifications.
//!
//! A toast is a [`Notice`] with an id and an expiry instant. Error toasts
//! linger longer than success toasts. Expired toasts are removed on tick;
//! when the visible limit is exceeded the oldest toast is dropped.

use std::{collections::VecDeque, time::Duration};

use crate::notice::{Notice, NoticeKind};

/// Default lifetime of an error toast.
pub const DEFAULT_ERROR_LIFETIME: Duration = Duration::from_millis(4000);

/// Default lifetime of a success toast.
pub const DEFAULT_SUCCESS_LIFETIME: Duration = Duration::from_millis(2000);

/// Default maximum number of visible toasts.
pub const DEFAULT_TOAST_LIMIT: usize = 20;

/// Toast identifier, unique within a page session.
pub type ToastId = u64;

/// Toaster configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastConfig {
    /// Lifetime of [`NoticeKind::Error`] toasts.
    pub error_lifetime: Duration,
    /// Lifetime of [`NoticeKind::Success`] toasts.
    pub success_lifetime: Duration,
    /// Maximum visible toasts. Values below 1 are treated as 1.
    pub limit: usize,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            error_lifetime: DEFAULT_ERROR_LIFETIME,
            success_lifetime: DEFAULT_SUCCESS_LIFETIME,
            limit: DEFAULT_TOAST_LIMIT,
        }
    }
}

impl ToastConfig {
    /// Lifetime for a notice of `kind`.
    pub fn lifetime(&self, kind: NoticeKind) -> Duration {
        match kind {
            NoticeKind::Error => self.error_lifetime,
            NoticeKind::Success => self.success_lifetime,
        }
    }
}

/// A visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast<I> {
    /// Identifier for later dismissal.
    pub id: ToastId,
    /// What to show.
    pub notice: Notice,
    /// When the toast disappears.
    pub expires_at: I,
}

impl<I> Toast<I> {
    /// Severity of the underlying notice.
    pub fn kind(&self) -> NoticeKind {
        self.notice.kind()
    }
}

/// Ordered set of visible toasts, oldest first.
#[derive(Debug, Clone)]
pub struct Toaster<I> {
    config: ToastConfig,
    visible: VecDeque<Toast<I>>,
    next_id: ToastId,
}

impl<I> Toaster<I>
where
    I: Copy + Ord + std::ops::Add<Duration, Output = I>,
{
    /// Empty toaster.
    pub fn new(config: ToastConfig) -> Self {
        Self { config, visible: VecDeque::new(), next_id: 1 }
    }

    /// Visible toasts, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Toast<I>> {
        self.visible.iter()
    }

    /// Number of visible toasts.
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    /// No visible toasts.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Show `notice` at `now`.
    ///
    /// Returns the new toast and the ids evicted to stay within the limit.
    pub fn push(&mut self, notice: Notice, now: I) -> (Toast<I>, Vec<ToastId>) {
        let id = self.next_id;
        self.next_id += 1;

        let toast = Toast { id, expires_at: now + self.config.lifetime(notice.kind()), notice };
        self.visible.push_back(toast.clone());

        let mut evicted = Vec::new();
        while self.visible.len() > self.config.limit.max(1) {
            if let Some(oldest) = self.visible.pop_front() {
                evicted.push(oldest.id);
            }
        }

        (toast, evicted)
    }

    /// Remove every toast whose expiry is at or before `now`.
    pub fn expire(&mut self, now: I) -> Vec<ToastId> {
        let mut expired = Vec::new();
        self.visible.retain(|toast| {
            let keep = toast.expires_at > now;
            if !keep {
                expired.push(toast.id);
            }
            keep
        });
        expired
    }

    /// Remove every toast. Ids keep counting up.
    pub fn clear(&mut self) -> Vec<ToastId> {
        self.visible.drain(..).map(|toast| toast.id).collect()
    }
}
