//! User-facing notification sink.
//!
//! Every fault the dashboard surfaces to the user goes through the
//! `UserNotifier` trait rather than straight to the log, so the policy of
//! what gets shown (and what stays silent, like a signing rejection) lives
//! with the callers while the delivery mechanism stays swappable. The
//! default sink renders notices through `tracing`.

/// Sink for user-facing notices.
///
/// Implementors decide how a notice reaches the user. The orchestrator and
/// wallet bridge call this for every surfaced fault and success message.
pub trait UserNotifier: Send + Sync {
	/// Show a success notice.
	fn success(&self, message: &str);

	/// Show an error notice.
	fn error(&self, message: &str);
}

/// Notifier that renders notices through the tracing subscriber.
pub struct TracingNotifier;

impl UserNotifier for TracingNotifier {
	fn success(&self, message: &str) {
		tracing::info!("{}", message);
	}

	fn error(&self, message: &str) {
		tracing::error!("{}", message);
	}
}
