// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value objects with ZERO external dependencies.
//!
//! This module contains pure domain types and the rules that keep them valid.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`ui`]: UI value objects ([`Opacity`](ui::newtypes::Opacity),
//!   [`SpinnerAngle`](ui::newtypes::SpinnerAngle))

pub mod ui;
