// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Stacking**: Gap between toasts and the work-area edges
//! - **Lifetime**: Auto-close delay and fade-out cadence
//! - **Message**: Wrapping cap for the message body
//! - **Spinner**: Loading indicator animation
//! - **Diagnostics**: Lifecycle event buffer

// ==========================================================================
// Stacking Defaults
// ==========================================================================

/// Gap between stacked toasts and between a toast and the work-area edge (px).
pub const DEFAULT_SPACING: f32 = 10.0;

/// Minimum allowed spacing.
pub const MIN_SPACING: f32 = 0.0;

/// Maximum allowed spacing.
pub const MAX_SPACING: f32 = 100.0;

// ==========================================================================
// Lifetime Defaults
// ==========================================================================

/// Time a non-persistent toast stays fully visible before it starts fading.
pub const DEFAULT_DURATION_MS: u64 = 3000;

/// Interval between two fade-out steps.
pub const DEFAULT_FADE_INTERVAL_MS: u64 = 20;

/// Minimum fade interval.
pub const MIN_FADE_INTERVAL_MS: u64 = 1;

/// Maximum fade interval.
pub const MAX_FADE_INTERVAL_MS: u64 = 1000;

/// Opacity removed at each fade-out step.
pub const DEFAULT_FADE_STEP: f32 = 0.1;

/// Minimum fade step (keeps the fade finite).
pub const MIN_FADE_STEP: f32 = 0.01;

/// Maximum fade step (a single step closes the toast).
pub const MAX_FADE_STEP: f32 = 1.0;

/// Resting opacity of a toast when hover highlighting is enabled.
pub const HOVER_RESTING_OPACITY: f32 = 0.9;

// ==========================================================================
// Message Defaults
// ==========================================================================

/// Maximum number of wrapped message lines before truncation.
pub const DEFAULT_MAX_MESSAGE_LINES: u32 = 5;

/// Minimum message line cap.
pub const MIN_MAX_MESSAGE_LINES: u32 = 1;

/// Maximum message line cap.
pub const MAX_MAX_MESSAGE_LINES: u32 = 20;

// ==========================================================================
// Spinner Defaults
// ==========================================================================

/// Interval between two spinner frames.
pub const DEFAULT_SPINNER_INTERVAL_MS: u64 = 24;

/// Degrees the spinner advances per frame.
pub const DEFAULT_SPINNER_STEP_DEGREES: u16 = 4;

/// Number of dots drawn along the spinner path.
pub const DEFAULT_SPINNER_DOTS: u8 = 8;

/// Minimum dot count.
pub const MIN_SPINNER_DOTS: u8 = 2;

/// Maximum dot count.
pub const MAX_SPINNER_DOTS: u8 = 32;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default capacity of the lifecycle event buffer.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 256;

/// Minimum capacity of the lifecycle event buffer.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum capacity of the lifecycle event buffer.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 4096;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_SPACING >= MIN_SPACING && DEFAULT_SPACING <= MAX_SPACING);
    assert!(DEFAULT_FADE_INTERVAL_MS >= MIN_FADE_INTERVAL_MS);
    assert!(DEFAULT_FADE_INTERVAL_MS <= MAX_FADE_INTERVAL_MS);
    assert!(DEFAULT_FADE_STEP >= MIN_FADE_STEP && DEFAULT_FADE_STEP <= MAX_FADE_STEP);
    assert!(HOVER_RESTING_OPACITY > 0.0 && HOVER_RESTING_OPACITY < 1.0);
    assert!(DEFAULT_MAX_MESSAGE_LINES >= MIN_MAX_MESSAGE_LINES);
    assert!(DEFAULT_MAX_MESSAGE_LINES <= MAX_MAX_MESSAGE_LINES);
    assert!(DEFAULT_SPINNER_DOTS >= MIN_SPINNER_DOTS && DEFAULT_SPINNER_DOTS <= MAX_SPINNER_DOTS);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
