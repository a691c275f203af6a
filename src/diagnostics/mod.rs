// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording picker activity.
//!
//! Interactions, state changes and warnings are captured as structured,
//! timestamped events, stored in a memory-bounded circular buffer and
//! exportable as a JSON report.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: A timestamped [`DiagnosticEventKind`]
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: Receiving and sending ends
//! - [`BufferCapacity`]: Newtype for validated buffer capacity bounds

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticReport, DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, StateChange, UserAction, WarningEvent, WarningType,
};
