// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Opacity
// =============================================================================

/// Residual opacity below which a fading window counts as fully transparent.
const TRANSPARENT_EPSILON: f32 = 1e-4;

/// Window opacity, guaranteed to be within `0.0..=1.0`.
///
/// Repeated subtraction of a decimal step drifts in binary floating point
/// (ten steps of `0.1` do not land exactly on zero), so [`Opacity::fade`]
/// snaps tiny residues to zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Opacity(f32);

impl Opacity {
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self(0.0);

    /// Fully opaque.
    pub const OPAQUE: Self = Self(1.0);

    /// Creates a new opacity, clamping the value to `0.0..=1.0`.
    ///
    /// NaN is treated as transparent.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::TRANSPARENT;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Lowers the opacity by `step`, never going below zero.
    #[must_use]
    pub fn fade(self, step: f32) -> Self {
        let next = self.0 - step.abs();
        if next <= TRANSPARENT_EPSILON {
            Self::TRANSPARENT
        } else {
            Self(next)
        }
    }

    /// Returns true once nothing is visible anymore.
    #[must_use]
    pub fn is_transparent(self) -> bool {
        self.0 <= TRANSPARENT_EPSILON
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::OPAQUE
    }
}

// =============================================================================
// SpinnerAngle
// =============================================================================

/// Angular offset of a loading spinner, in whole degrees (`0..360`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SpinnerAngle(u16);

impl SpinnerAngle {
    /// Start position (0°).
    pub const ZERO: Self = Self(0);

    /// Creates a new angle, wrapping into `0..360`.
    #[must_use]
    pub fn new(degrees: u16) -> Self {
        Self(degrees % 360)
    }

    /// Returns the angle in degrees.
    #[must_use]
    pub fn degrees(self) -> u16 {
        self.0
    }

    /// Returns the angle in radians.
    #[must_use]
    pub fn radians(self) -> f32 {
        f32::from(self.0) * std::f32::consts::PI / 180.0
    }

    /// Advances by `step` degrees, wrapping at 360°.
    #[must_use]
    pub fn advance(self, step: u16) -> Self {
        Self(((u32::from(self.0) + u32::from(step)) % 360) as u16)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    // -------------------------------------------------------------------------
    // Opacity tests
    // -------------------------------------------------------------------------

    #[test]
    fn opacity_clamps() {
        assert_eq!(Opacity::new(-1.0), Opacity::TRANSPARENT);
        assert_eq!(Opacity::new(3.0), Opacity::OPAQUE);
        assert_eq!(Opacity::new(f32::NAN), Opacity::TRANSPARENT);
        assert_abs_diff_eq!(Opacity::new(0.9).value(), 0.9);
    }

    #[test]
    fn ten_tenth_steps_reach_transparent() {
        let mut opacity = Opacity::OPAQUE;
        for _ in 0..9 {
            opacity = opacity.fade(0.1);
            assert!(!opacity.is_transparent());
        }
        opacity = opacity.fade(0.1);
        assert!(opacity.is_transparent());
        assert_eq!(opacity.value(), 0.0);
    }

    #[test]
    fn fade_never_goes_negative() {
        assert_eq!(Opacity::new(0.05).fade(0.1), Opacity::TRANSPARENT);
        assert_eq!(Opacity::TRANSPARENT.fade(0.1), Opacity::TRANSPARENT);
    }

    // -------------------------------------------------------------------------
    // SpinnerAngle tests
    // -------------------------------------------------------------------------

    #[test]
    fn spinner_angle_wraps() {
        assert_eq!(SpinnerAngle::new(360).degrees(), 0);
        assert_eq!(SpinnerAngle::new(358).advance(4).degrees(), 2);
        assert_eq!(SpinnerAngle::new(u16::MAX).advance(u16::MAX).degrees(), 30);
    }

    #[test]
    fn spinner_angle_radians() {
        assert_abs_diff_eq!(
            SpinnerAngle::new(180).radians(),
            std::f32::consts::PI,
            epsilon = 1e-6
        );
    }
}
