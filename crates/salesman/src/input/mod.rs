//! Pure helpers for input producers and result consumers.
//!
//! - `extract_locations`: pull `[x, y]` pairs out of free text.
//! - `LocationBounds`: caller-side ceiling/floor on instance size; the solver
//!   itself only enforces `MIN_LOCATIONS`.
//! - `format_elapsed`: human-readable solve time.

mod bounds;
mod text;

pub use bounds::{BoundsError, LocationBounds};
pub use text::{extract_locations, format_elapsed};
