//! Adapter utilities for the `spotlight` crate.
//!
//! The `spotlight` crate is UI-agnostic and focuses on the per-pass layout math. This crate
//! provides small, framework-neutral helpers commonly needed by hosts:
//!
//! - A frame driver that owns the item geometry and scroll state ([`Controller`])
//! - Programmatic scrolling to an item within the scrollable bounds
//! - Spotlight anchoring across data reloads
//!
//! This crate is intentionally framework-agnostic (no UIKit/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod controller;

#[cfg(test)]
mod tests;

pub use anchor::{SpotlightAnchor, apply_anchor, capture_spotlight_anchor};
pub use controller::Controller;
