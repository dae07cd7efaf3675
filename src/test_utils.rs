// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Toast geometry and opacity are `f32`; `assert_eq!` on them breaks as soon
//! as a value goes through a scale factor or a fade step.

pub use approx::assert_abs_diff_eq;
