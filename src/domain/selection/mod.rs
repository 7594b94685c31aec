//! `selected_points` documents: parsing, the selectable grid and a selection builder.

mod builder;
mod grid;
mod parse;
mod record;

pub use builder::Selection;
pub use grid::{DistanceLayer, grid_points};
pub use parse::{SelectionParseError, parse_selected_points};
pub use record::AngleRecord;
