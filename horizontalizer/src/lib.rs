//! A headless horizontal-scroll section engine.
//!
//! For host-facing utilities (group construction, instance lifecycle, hash-link
//! navigation), see the `horizontalizer-adapter` crate.
//!
//! This crate focuses on the core math and state needed to drive a run of page
//! sections sideways from a 1-D vertical scroll coordinate: region measurement,
//! the before/active/after zone machine, progress → pixel-shift mapping, and
//! boundary-crossing detection.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - viewport size (width/height)
//! - the group's layout geometry (content width, top offset)
//! - scroll coordinates, delivered once per rendering frame
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod events;
mod mapper;
mod measure;
mod options;
mod state;
mod types;


pub use events::{EventBus, EventListener, GroupEvent};
pub use mapper::{Region, ScrollMapper};
pub use measure::{GroupGeometry, Measurements, measure};
pub use options::{Defaults, GroupOptions, GroupOverrides};
pub use state::GroupState;
pub use types::{Crossing, Frame, GroupId, Viewport, Zone};
