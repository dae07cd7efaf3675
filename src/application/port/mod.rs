// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The windowing toolkit is an external collaborator: the engine never
//! creates a window, paints, or queries the screen itself. It asks a
//! [`WindowHost`] to do so.
//!
//! # Available Ports
//!
//! - [`host`]: Popup windows, pointer and monitor queries, text measurement
//!
//! # Design Notes
//!
//! - Geometry and colors use Iced's plain value types (`Point`, `Size`,
//!   `Rectangle`, `Color`); no widget or window handles cross the boundary
//! - Methods are synchronous and called on the UI thread only
//! - Only window creation and monitor lookup can fail; the other operations
//!   target windows the host already accepted

pub mod host;

// Re-export main types for convenience
pub use host::{HostError, Monitor, MonitorId, TextMeasure, TextRole, WindowHost, WindowSpec};
