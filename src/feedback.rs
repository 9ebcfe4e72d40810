//! User feedback capability
//!
//! Handlers report taps and confirmations through an injected [`Feedback`]
//! instead of reaching for a process-wide manager, so tests can record them.

/// Strength of an impact cue
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactStyle {
    light,
    medium,
}

/// Kind of a notification cue
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    success,
}

pub trait Feedback: Send + Sync {
    fn impact(&self, style: ImpactStyle);
    fn notification(&self, kind: NotificationKind);
}

/// Feedback that only emits debug events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFeedback;

impl Feedback for TracingFeedback {
    fn impact(&self, style: ImpactStyle) {
        tracing::debug!(?style, "impact feedback");
    }

    fn notification(&self, kind: NotificationKind) {
        tracing::debug!(?kind, "notification feedback");
    }
}
