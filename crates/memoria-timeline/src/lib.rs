//! # memoria-timeline
//!
//! Interaction controllers for the timeline and map views of memoria.
//!
//! - [`TimelineController`]: current year, zoom level, event selection and
//!   the visible-window computation with its nearest-year fallback
//! - [`MapController`]: pan/zoom viewport, location focus and the location
//!   filter
//!
//! Both controllers share one immutable [`memoria_core::RecordStore`].

pub mod controller;
pub mod map;

pub use controller::{TimelineController, TimelineOptions};
pub use map::{MapController, MapView};
