//! A headless, scroll-driven "spotlight" layout engine for vertically scrolling lists.
//!
//! For host-side utilities (a frame driver, clamped scrolling, spotlight anchoring), see the
//! `spotlight-adapter` crate.
//!
//! As the list scrolls, one item is kept at (at least) its natural height near the top of the
//! viewport while the items scrolled past collapse to a small height and the next item grows
//! back in, producing a parallax effect. The engine recomputes every participating item's
//! rectangle and the total content height as a continuous function of the scroll offset.
//!
//! It is UI-agnostic. A host layer is expected to provide, per pass:
//! - the ordered item geometry produced by its ordinary layout
//! - the scroll offset, insets and viewport height
//! - a collapsed-height oracle (and optionally per-section insets)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod engine;
mod options;
mod state;
mod types;


pub use engine::{SpotlightEngine, apply_updates};
pub use options::{SectionInsetFn, SmallHeightFn, SpotlightOptions};
pub use state::ScrollFrame;
pub use types::{IndexPath, ItemGeometry, ItemUpdate, PassSummary, Rect};
