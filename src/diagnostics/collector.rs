// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing picker events.
//!
//! Pickers hold a [`DiagnosticsHandle`] and send events through a bounded
//! channel; the owner of the [`DiagnosticsCollector`] drains them into a
//! circular buffer and can export the buffer as JSON.

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use serde::Serialize;

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, StateChange, UserAction,
    WarningEvent,
};

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone. Sending never blocks: events are dropped when the
/// channel is full or the collector is gone.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs an interaction that went through.
    pub fn log_action(&self, action: UserAction) {
        self.send(DiagnosticEventKind::UserAction {
            action,
            accepted: true,
        });
    }

    /// Logs an interaction that range checks refused.
    pub fn log_rejected(&self, action: UserAction) {
        self.send(DiagnosticEventKind::UserAction {
            action,
            accepted: false,
        });
    }

    /// Logs a navigation state change.
    pub fn log_state(&self, change: StateChange) {
        self.send(DiagnosticEventKind::StateChange { change });
    }

    /// Logs a warning.
    pub fn log_warning(&self, event: WarningEvent) {
        self.send(DiagnosticEventKind::Warning { event });
    }

    /// Sends an event, reporting whether it was accepted.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` if the channel buffer is full,
    /// or `TrySendError::Disconnected` if the collector has been dropped.
    pub fn try_log(&self, kind: DiagnosticEventKind) -> Result<(), TrySendError<DiagnosticEvent>> {
        self.event_tx.try_send(DiagnosticEvent::new(kind))
    }

    fn send(&self, kind: DiagnosticEventKind) {
        // Non-blocking send - drop if channel is full
        let _ = self.try_log(kind);
    }
}

/// Central collector for diagnostic events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    collection_started_at: DateTime<Utc>,
}

/// Events buffered in the channel before the collector drains them.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Exported view of the collected events.
#[derive(Debug, Serialize)]
pub struct DiagnosticReport<'a> {
    pub crate_version: &'static str,
    pub collection_started_at: DateTime<Utc>,
    pub exported_at: DateTime<Utc>,
    pub event_count: usize,
    pub events: Vec<&'a DiagnosticEvent>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves all pending channel events into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Logs a warning directly to the buffer (bypassing the channel).
    pub fn log_warning(&mut self, event: WarningEvent) {
        self.buffer
            .push(DiagnosticEvent::new(DiagnosticEventKind::Warning { event }));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Builds a report of the stored events.
    #[must_use]
    pub fn report(&self) -> DiagnosticReport<'_> {
        let events: Vec<&DiagnosticEvent> = self.buffer.iter().collect();
        DiagnosticReport {
            crate_version: env!("CARGO_PKG_VERSION"),
            collection_started_at: self.collection_started_at,
            exported_at: Utc::now(),
            event_count: events.len(),
            events,
        }
    }

    /// Exports the stored events as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.report())
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
