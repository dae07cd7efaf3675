// SPDX-License-Identifier: MPL-2.0
//! Lifecycle event types.
//!
//! Every placement or lifecycle decision the notification manager takes is
//! recorded as one of these events, stamped with the manager's virtual clock.

use std::time::Duration;

use iced::Rectangle;
use serde::Serialize;

use crate::application::port::MonitorId;
use crate::ui::notifications::{NotificationId, NotificationType};

/// Why a notification left the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseReason {
    /// The fade-out ran to full transparency.
    Faded,
    /// The user clicked somewhere inside the toast.
    Clicked,
    /// The caller closed it through `close_by_id`.
    ById,
    /// Closed as part of clearing every notification.
    Cleared,
}

/// A single recorded event.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticEvent {
    /// Virtual clock time at which the event happened.
    #[serde(serialize_with = "serialize_millis")]
    pub at: Duration,
    /// The type and data of the event.
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(at: Duration, kind: DiagnosticEventKind) -> Self {
        Self { at, kind }
    }
}

/// The type and associated data for a lifecycle event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A monitor was seen for the first time.
    MonitorCaptured {
        monitor: MonitorId,
        #[serde(serialize_with = "serialize_rect")]
        work_area: Rectangle,
    },
    /// A known monitor reported a different work area and the cache followed.
    MonitorGeometryChanged {
        monitor: MonitorId,
        #[serde(serialize_with = "serialize_rect")]
        work_area: Rectangle,
    },
    /// A notification window was opened.
    Shown {
        id: NotificationId,
        kind: NotificationType,
        monitor: MonitorId,
        truncated: bool,
    },
    /// The host failed to open a notification window.
    ShowFailed { message: String },
    /// The auto-close delay elapsed and the fade-out began.
    FadeStarted { id: NotificationId },
    /// A notification was closed and removed from its stack.
    Closed {
        id: NotificationId,
        reason: CloseReason,
    },
    /// `close_by_id` was called for an id that is not live.
    CloseMissed { id: NotificationId },
}

fn serialize_millis<S: serde::Serializer>(at: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(at.as_millis()).unwrap_or(u64::MAX))
}

fn serialize_rect<S: serde::Serializer>(rect: &Rectangle, s: S) -> Result<S::Ok, S::Error> {
    [rect.x, rect.y, rect.width, rect.height].serialize(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_keeps_its_timestamp() {
        let event = DiagnosticEvent::new(
            Duration::from_millis(3200),
            DiagnosticEventKind::CloseMissed {
                id: NotificationId::from_raw(7),
            },
        );
        assert_eq!(event.at, Duration::from_millis(3200));
        assert!(matches!(
            event.kind,
            DiagnosticEventKind::CloseMissed { .. }
        ));
    }

    #[test]
    fn events_serialize_to_tagged_toml() {
        #[derive(Serialize)]
        struct Wrapper {
            event: DiagnosticEvent,
        }

        let event = DiagnosticEvent::new(
            Duration::from_millis(20),
            DiagnosticEventKind::Closed {
                id: NotificationId::from_raw(3),
                reason: CloseReason::ById,
            },
        );
        let rendered = toml::to_string(&Wrapper { event }).expect("serializable");

        assert!(rendered.contains("at = 20"));
        assert!(rendered.contains("type = \"closed\""));
        assert!(rendered.contains("reason = \"by_id\""));
    }
}
