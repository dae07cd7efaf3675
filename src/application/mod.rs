// SPDX-License-Identifier: MPL-2.0
//! Application layer - Boundaries the engine depends on.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - The notification engine (`ui::notifications`) talks to the outside world
//!   only through the ports defined here
//! - Infrastructure adapters (`infrastructure`) implement those ports
//! - Domain value objects (`domain`) flow through both

pub mod port;
