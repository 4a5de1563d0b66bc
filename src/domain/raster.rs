//! Rasterization of pointer-drag segments into grid cells.
//!
//! The segment is walked one sample per integer pixel column. Each sample
//! is converted to the cell containing it, so consecutive samples often
//! repeat a cell. Repeats are kept.

use super::CellCoord;

/// Height returned for columns the near-vertical sampler does not cover.
const NO_SAMPLE: f32 = 0.0;

/// A pointer position in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// `y(x)` for one segment.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Sampler {
    /// Vertical extent under one cell edge
    Flat { y: f32 },
    /// Horizontal extent under one cell edge
    Column { x: f32, y: f32, edge: f32 },
    /// `y = k * x + y0` where `k = dx / dy`
    Slope { k: f32, y0: f32 },
}

impl Sampler {
    fn new(start: Point, end: Point, cell_size: u32) -> Self {
        let edge = cell_size as f32;
        if (end.y - start.y).abs() < edge {
            return Sampler::Flat { y: start.y };
        }
        if (end.x - start.x).abs() < edge {
            return Sampler::Column { x: start.x, y: start.y, edge };
        }
        // x-over-y on purpose; this walk only has to hit the end point.
        let k = (end.x - start.x) / (end.y - start.y);
        Sampler::Slope { k, y0: end.y - k * end.x }
    }

    fn sample(&self, x: f32) -> f32 {
        match *self {
            Sampler::Flat { y } => y,
            Sampler::Column { x: x1, y, edge } => {
                if (x - x1).abs() < edge { y } else { NO_SAMPLE }
            }
            Sampler::Slope { k, y0 } => k * x + y0,
        }
    }
}

/// Convert the segment `start`-`end` into the ordered cells it samples.
///
/// Yields exactly `floor(max_x) - floor(min_x) + 1` cells, left to right.
/// Cells may fall outside any particular grid; callers filter.
pub fn line_to_cells(start: Point, end: Point, cell_size: u32) -> Vec<CellCoord> {
    let sampler = Sampler::new(start, end, cell_size);
    let pitch = cell_size + 1;

    let (x1, x2) = if start.x > end.x {
        (end.x, start.x)
    } else {
        (start.x, end.x)
    };
    let (first, last) = (x1.floor() as i32, x2.floor() as i32);

    (first..=last)
        .map(|x| {
            let x = x as f32;
            CellCoord::from_pixel(x, sampler.sample(x), pitch)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CELL_SIZE: u32 = 5;

    #[test]
    fn test_horizontal_segment_one_sample_per_pixel() {
        let cells = line_to_cells(Point::new(0.0, 10.0), Point::new(20.0, 10.0), CELL_SIZE);
        assert_eq!(cells.len(), 21);
        assert!(cells.iter().all(|c| c.row == 1));
        assert_eq!(cells.first(), Some(&CellCoord::new(0, 1)));
        assert_eq!(cells.last(), Some(&CellCoord::new(3, 1)));
    }

    #[test]
    fn test_vertical_segment_terminates_on_single_column() {
        let cells = line_to_cells(Point::new(10.0, 0.0), Point::new(10.0, 20.0), CELL_SIZE);
        assert_eq!(cells, vec![CellCoord::new(1, 0)]);
    }

    #[test]
    fn test_column_sampler_falls_back_far_from_start() {
        let sampler = Sampler::new(Point::new(10.0, 30.0), Point::new(12.0, 60.0), CELL_SIZE);
        assert_eq!(sampler.sample(11.0), 30.0);
        assert_eq!(sampler.sample(40.0), NO_SAMPLE);
    }

    #[test]
    fn test_diagonal_follows_identity() {
        let cells = line_to_cells(Point::new(0.0, 0.0), Point::new(30.0, 30.0), CELL_SIZE);
        assert_eq!(cells.len(), 31);
        assert!(cells.iter().all(|c| c.col == c.row));
    }

    #[test]
    fn test_inverted_slope_passes_through_end_point() {
        // k = 30 / 15 = 2, y0 = 15 - 60 = -45
        let cells = line_to_cells(Point::new(0.0, 0.0), Point::new(30.0, 15.0), CELL_SIZE);
        assert_eq!(cells.len(), 31);
        assert_eq!(cells[0], CellCoord::new(0, -8));
        assert_eq!(cells[30], CellCoord::new(5, 2));
    }

    #[test]
    fn test_right_to_left_is_normalized() {
        let forward = line_to_cells(Point::new(2.0, 10.0), Point::new(20.0, 10.0), CELL_SIZE);
        let backward = line_to_cells(Point::new(20.0, 10.0), Point::new(2.0, 10.0), CELL_SIZE);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_fractional_endpoints_sample_integer_columns() {
        let cells = line_to_cells(Point::new(0.5, 3.0), Point::new(2.2, 3.0), CELL_SIZE);
        assert_eq!(cells.len(), 3);
    }

    proptest! {
        #[test]
        fn output_length_matches_pixel_extent(
            x1 in 0.0f32..800.0, y1 in 0.0f32..800.0,
            x2 in 0.0f32..800.0, y2 in 0.0f32..800.0
        ) {
            let cells = line_to_cells(Point::new(x1, y1), Point::new(x2, y2), CELL_SIZE);
            let expected = x1.max(x2).floor() as i32 - x1.min(x2).floor() as i32 + 1;
            prop_assert_eq!(cells.len() as i32, expected);
        }
    }
}
