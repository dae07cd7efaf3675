// SPDX-License-Identifier: MPL-2.0
//! Lifecycle event collector.
//!
//! The collector lives inside the notification manager and is written to
//! synchronously on the UI thread; readers borrow it through
//! `Manager::diagnostics`.

use std::time::Duration;

use super::buffer::{BufferCapacity, CircularBuffer};
use super::events::{CloseReason, DiagnosticEvent, DiagnosticEventKind};
use crate::ui::notifications::NotificationId;

/// Bounded store of lifecycle events.
#[derive(Debug, Clone)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            buffer: CircularBuffer::new(capacity),
        }
    }

    /// Records an event at the given virtual time.
    pub fn log(&mut self, at: Duration, kind: DiagnosticEventKind) {
        self.buffer.push(DiagnosticEvent::new(at, kind));
    }

    /// Events oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Events that concern one notification, oldest first.
    pub fn history(&self, id: NotificationId) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter().filter(move |event| match &event.kind {
            DiagnosticEventKind::Shown { id: event_id, .. }
            | DiagnosticEventKind::FadeStarted { id: event_id }
            | DiagnosticEventKind::Closed { id: event_id, .. }
            | DiagnosticEventKind::CloseMissed { id: event_id } => *event_id == id,
            _ => false,
        })
    }

    /// How the given notification was closed, if it was.
    #[must_use]
    pub fn close_reason(&self, id: NotificationId) -> Option<CloseReason> {
        self.history(id).find_map(|event| match event.kind {
            DiagnosticEventKind::Closed { reason, .. } => Some(reason),
            _ => None,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Events lost to the capacity limit since the last clear.
    #[must_use]
    pub fn dropped(&self) -> u64 {
        self.buffer.evicted()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
