//! Cornerpick selects ranked feature points from corner-response matrices.
//!
//! A corner detector (Harris, Shi-Tomasi, ...) produces a dense grid of
//! scores; this crate returns the top-K cells scoring above a threshold,
//! best first, with optional row parallelism via the `rayon` feature.

pub mod extract;
pub mod feature;
pub mod response;
mod select;
mod trace;
pub mod util;

pub use extract::{
    count_from_signed, extract_corners, extract_scored, try_extract_corners, ExtractConfig,
};
pub use feature::Feature;
pub use response::{Coordinate, OwnedResponse, ResponseValue, ResponseView};
pub use select::ScoredCorner;
pub use util::{CornerError, CornerResult};
