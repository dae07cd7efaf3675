// SPDX-License-Identifier: MPL-2.0
//! Desktop toast notifications.
//!
//! Each notification lives in its own borderless popup window, stacked in the
//! bottom-right corner of the monitor the pointer was on when it was shown.
//! Non-persistent toasts fade out after their duration; any click closes a
//! toast at once.
//!
//! # Components
//!
//! - [`notification`] - `Notification` state machine and type presets
//! - [`manager`] - `Manager` owning the per-monitor stacks and virtual clock
//! - [`layout`] - Text wrapping and stack placement
//! - [`toast`] - Toast widget rendering one notification
//!
//! # Usage
//!
//! ```
//! use iced_toasts::infrastructure::HeadlessHost;
//! use iced_toasts::ui::notifications::{Manager, NotificationType};
//! use std::time::Duration;
//!
//! let mut manager = Manager::new(HeadlessHost::single_monitor());
//! let id = manager
//!     .show(NotificationType::Success, "Saved", "All changes written", None, None)
//!     .unwrap();
//!
//! // 3s on screen, then ten 20ms fade steps.
//! let closed = manager.advance(Duration::from_millis(3200));
//! assert_eq!(closed, vec![id]);
//! ```

pub mod layout;
mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{
    Graphic, Notification, NotificationId, NotificationSpec, NotificationTimer, NotificationType,
    TimerKind, Transition, VisualState,
};
pub use toast::Toast;
