// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording the notification lifecycle.
//!
//! The manager logs every placement and lifecycle decision (monitor capture,
//! show, fade start, close, missed close) into a memory-bounded ring buffer.
//! Events carry the manager's virtual clock, so a test that fast-forwards
//! time sees exactly when each transition happened.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: A timestamped [`DiagnosticEventKind`]
//! - [`DiagnosticsCollector`]: The buffer plus per-notification queries

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::DiagnosticsCollector;
pub use events::{CloseReason, DiagnosticEvent, DiagnosticEventKind};
