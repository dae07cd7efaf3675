// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! # Modules
//!
//! - [`notifications`] - Toast notification lifecycle, placement and view
//! - [`widgets`] - Custom Iced widgets (loading spinner)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod notifications;
pub mod widgets;
