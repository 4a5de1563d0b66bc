mod cell;
mod geometry;
mod universe;
pub mod codec;
pub mod raster;

pub use cell::Cell;
pub use geometry::{CellCoord, GridSize};
pub use raster::{Point, line_to_cells};
pub use universe::{LifeUniverse, Universe};
