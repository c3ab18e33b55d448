//! Transient notifications
//!
//! A single toast is shown at a time; a new one replaces the old. Toasts
//! expire after a fixed lifetime and are cleared on the next tick.

use std::time::{Duration, Instant};

/// How long a toast stays on screen
pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

/// Visual kind of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

/// A message with the instant it was raised
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub shown_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant, lifetime: Duration) -> bool {
        now.saturating_duration_since(self.shown_at) >= lifetime
    }
}

/// Holds the current toast, if any
#[derive(Debug, Clone)]
pub struct Toaster {
    current: Option<Toast>,
    lifetime: Duration,
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new(TOAST_LIFETIME)
    }
}

impl Toaster {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            current: None,
            lifetime,
        }
    }

    /// Show a success toast
    pub fn success(&mut self, message: impl Into<String>) {
        self.show_at(message, ToastKind::Success, Instant::now());
    }

    /// Show an error toast
    pub fn error(&mut self, message: impl Into<String>) {
        self.show_at(message, ToastKind::Error, Instant::now());
    }

    pub fn show_at(&mut self, message: impl Into<String>, kind: ToastKind, now: Instant) {
        let message = message.into();
        tracing::debug!(?kind, %message, "toast");
        self.current = Some(Toast {
            message,
            kind,
            shown_at: now,
        });
    }

    /// Drop the toast once its lifetime has elapsed
    pub fn tick(&mut self, now: Instant) {
        if self
            .current
            .as_ref()
            .is_some_and(|t| t.is_expired(now, self.lifetime))
        {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}
