//! Navigation indicator model.
//!
//! The indicator is a decorative underline that slides between nav links.
//! This crate holds everything about it that does not touch the DOM:
//! - `Rect` / `Placement` - Geometry relative to the nav bar
//! - `normalize_path` / `active_link` - Which link matches the current page
//! - `IndicatorState` - Focus, visibility and placement transitions

mod geometry;
mod indicator;
mod path;

pub use geometry::*;
pub use indicator::*;
pub use path::*;
