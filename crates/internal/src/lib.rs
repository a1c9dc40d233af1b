//! Internal utilities for the kemlock library
//!
//! Shared helpers that are not part of the public API surface. Semver
//! guarantees do not apply to this crate.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
