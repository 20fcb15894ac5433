//! Transient user notices
//!
//! A notice carries a "visible until" timestamp; the presentation layer
//! decides visibility by comparing it with the current time. Showing a new
//! notice replaces the previous one.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    pub visible_until: Instant,
}

impl Notice {
    #[must_use]
    pub fn new(text: impl Into<String>, kind: NoticeKind, now: Instant, duration: Duration) -> Self {
        Self {
            text: text.into(),
            kind,
            visible_until: now + duration,
        }
    }

    #[must_use]
    pub fn is_visible(&self, now: Instant) -> bool {
        now < self.visible_until
    }
}
