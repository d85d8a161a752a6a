//! # Notification Sink
//!
//! The user-alert seam. The store pushes (severity, message) pairs at it and
//! moves on; delivery is the consumer's problem. A storefront UI routes these
//! into toasts, the CLI prints them, tests record them.

use serde::{Deserialize, Serialize};

/// How loudly the alert should surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Fire-and-forget user alerts.
///
/// Implementations must not block or fail; the store never waits on an
/// acknowledgment.
pub trait NotificationSink: Send + Sync {
    /// Delivers one alert.
    fn notify(&self, severity: Severity, message: &str);
}

/// Default sink that forwards alerts to the tracing log.
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => tracing::info!("{}", message),
            Severity::Warning => tracing::warn!("{}", message),
            Severity::Error => tracing::error!("{}", message),
        }
    }
}
