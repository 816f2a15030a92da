#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Event system for async communication in pokerep
//!
//! All operator-visible output flows through events: the orchestrator and
//! the layers below it emit, the CLI renders. Events are grouped by
//! functional domain (catalog, report lifecycle, general) and aggregated
//! in [`AppEvent`].

pub mod events;
pub use events::{AppEvent, CatalogEvent, FailureContext, GeneralEvent, ReportEvent};

use tokio::sync::mpsc::UnboundedSender;

/// Type alias for event sender using the `AppEvent` system
pub type EventSender = UnboundedSender<AppEvent>;

/// Type alias for event receiver using the `AppEvent` system
pub type EventReceiver = tokio::sync::mpsc::UnboundedReceiver<AppEvent>;

/// Create a new event channel with the `AppEvent` system
#[must_use]
pub fn channel() -> (EventSender, EventReceiver) {
    tokio::sync::mpsc::unbounded_channel()
}

/// The unified trait for emitting events throughout the pokerep system
///
/// This trait provides a single, consistent API for emitting events
/// regardless of whether you have a raw `EventSender` or a struct that
/// contains one.
pub trait EventEmitter {
    /// Get the event sender for this emitter
    fn event_sender(&self) -> Option<&EventSender>;

    /// Emit an event through this emitter
    fn emit(&self, event: AppEvent) {
        if let Some(sender) = self.event_sender() {
            // Ignore send errors - if receiver is dropped, we just continue
            let _ = sender.send(event);
        }
    }

    /// Emit a debug log event
    fn emit_debug(&self, message: impl Into<String>) {
        self.emit(AppEvent::General(GeneralEvent::debug(message)));
    }

    /// Emit a warning event
    fn emit_warning(&self, message: impl Into<String>) {
        self.emit(AppEvent::General(GeneralEvent::warning(message)));
    }

    /// Emit an error event
    fn emit_error(&self, message: impl Into<String>) {
        self.emit(AppEvent::General(GeneralEvent::error(message)));
    }

    /// Emit an operation started event
    fn emit_operation_started(&self, operation: impl Into<String>) {
        self.emit(AppEvent::General(GeneralEvent::OperationStarted {
            operation: operation.into(),
        }));
    }

    /// Emit an operation completed event
    fn emit_operation_completed(&self, operation: impl Into<String>, success: bool) {
        self.emit(AppEvent::General(GeneralEvent::OperationCompleted {
            operation: operation.into(),
            success,
        }));
    }

    /// Emit an operation failed event
    fn emit_operation_failed(&self, operation: impl Into<String>, error: impl Into<String>) {
        self.emit(AppEvent::General(GeneralEvent::OperationFailed {
            operation: operation.into(),
            error: error.into(),
        }));
    }
}

impl EventEmitter for EventSender {
    fn event_sender(&self) -> Option<&EventSender> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn emitter_delivers_through_channel() {
        let (tx, mut rx) = channel();
        tx.emit_operation_started("refresh");
        tx.emit_operation_completed("refresh", true);

        let first = rx.recv().await.unwrap();
        assert!(matches!(
            first,
            AppEvent::General(GeneralEvent::OperationStarted { .. })
        ));
        let second = rx.recv().await.unwrap();
        assert!(matches!(
            second,
            AppEvent::General(GeneralEvent::OperationCompleted { success: true, .. })
        ));
    }

    #[tokio::test]
    async fn emit_survives_dropped_receiver() {
        let (tx, rx) = channel();
        drop(rx);
        // must not panic or error out
        tx.emit_warning("receiver is gone");
    }
}
