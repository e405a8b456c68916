//! Glyph placement around the wheel.
//!
//! Points closer together than a glyph's width are spread apart for
//! display. Only the label position moves; ticks, aspect lines and every
//! computed quantity keep using the true longitude.

pub mod interval;
pub mod resolver;

pub use interval::ArcInterval;
pub use resolver::{resolve_layout, Layout, LayoutResolver, LayoutSettings, Placement};
