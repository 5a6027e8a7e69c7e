//! Feature point record shared with detection algorithms.
//!
//! Extraction does not build these; detectors that track scale and extent
//! fill them in from extracted corners.

use crate::response::Coordinate;
use crate::select::ScoredCorner;

/// A detected feature point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Feature {
    /// Centroid x coordinate (column).
    pub x: i32,
    /// Centroid y coordinate (row).
    pub y: i32,
    /// Pyramid level the feature was detected at.
    pub octave: i32,
    /// Feature extent along x.
    pub width: f32,
    /// Feature extent along y.
    pub height: f32,
    /// Detector response.
    pub score: f32,
}

impl Feature {
    /// Creates a feature at `(x, y)` with every other field zeroed.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// Creates an octave-0 feature at a response-matrix cell.
    ///
    /// Indices beyond `i32::MAX` saturate.
    pub fn at(coord: Coordinate, score: f32) -> Self {
        Self {
            x: i32::try_from(coord.col).unwrap_or(i32::MAX),
            y: i32::try_from(coord.row).unwrap_or(i32::MAX),
            score,
            ..Self::default()
        }
    }
}

impl From<ScoredCorner<f32>> for Feature {
    fn from(corner: ScoredCorner<f32>) -> Self {
        Self::at(corner.coord, corner.score)
    }
}

#[cfg(test)]
mod tests {
    use super::Feature;
    use crate::response::Coordinate;
    use crate::select::ScoredCorner;

    #[test]
    fn fields_are_independently_settable() {
        let mut feature = Feature::new(4, 9);
        feature.octave = 2;
        feature.width = 3.5;
        feature.height = 1.5;
        feature.score = 0.75;
        assert_eq!((feature.x, feature.y, feature.octave), (4, 9, 2));
        assert_eq!((feature.width, feature.height, feature.score), (3.5, 1.5, 0.75));
    }

    #[test]
    fn scored_corner_maps_col_to_x() {
        let corner = ScoredCorner {
            coord: Coordinate::new(2, 7),
            score: 0.5f32,
        };
        let feature = Feature::from(corner);
        assert_eq!((feature.x, feature.y), (7, 2));
        assert_eq!(feature.octave, 0);
        assert_eq!(feature.score, 0.5);
    }
}
