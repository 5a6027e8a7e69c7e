//! End-to-end extraction on small hand-built response matrices.

use cornerpick::{
    extract_corners, extract_scored, try_extract_corners, Coordinate, ExtractConfig, OwnedResponse,
    ResponseView,
};

fn single_peak() -> OwnedResponse<f32> {
    OwnedResponse::from_rows(vec![
        vec![0.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0],
        vec![0.0, 0.0, 0.0],
    ])
    .unwrap()
}

fn column_ramp() -> OwnedResponse<f32> {
    OwnedResponse::new(vec![0.0, 0.1, 0.0, 0.0, 0.3, 0.0, 0.0, 0.2, 0.0], 3, 3).unwrap()
}

#[test]
fn single_peak_is_the_only_corner() {
    let matrix = single_peak();
    let corners = extract_corners(matrix.view(), None, 0.0).unwrap();
    assert_eq!(corners, vec![Coordinate::new(1, 1)]);
}

#[test]
fn unbounded_extraction_orders_by_response() {
    let matrix = column_ramp();
    let corners = extract_corners(matrix.view(), None, 0.0).unwrap();
    assert_eq!(
        corners,
        vec![
            Coordinate::new(1, 1),
            Coordinate::new(2, 1),
            Coordinate::new(0, 1),
        ]
    );
}

#[test]
fn count_limits_to_strongest() {
    let matrix = column_ramp();
    let corners = extract_corners(matrix.view(), Some(1), 0.0).unwrap();
    assert_eq!(corners, vec![Coordinate::new(1, 1)]);
}

#[test]
fn threshold_is_strict() {
    let matrix = column_ramp();
    let corners = extract_corners(matrix.view(), None, 0.2).unwrap();
    assert_eq!(corners, vec![Coordinate::new(1, 1)]);
}

#[test]
fn empty_matrix_yields_no_data() {
    let data: [f32; 0] = [];
    let view = ResponseView::from_slice(&data, 0, 0).unwrap();
    assert_eq!(extract_corners(view, None, 0.0), None);
    assert_eq!(extract_corners(view, Some(0), 0.0), None);
    assert_eq!(extract_corners(view, Some(10), -1.0), None);
    assert_eq!(try_extract_corners(view, None, 0.0), Ok(None));
}

#[test]
fn zero_count_yields_empty_result() {
    let matrix = column_ramp();
    let corners = extract_corners(matrix.view(), Some(0), 0.0).unwrap();
    assert!(corners.is_empty());
}

#[test]
fn nothing_above_threshold_yields_empty_result() {
    let matrix = column_ramp();
    let corners = extract_corners(matrix.view(), None, 0.3).unwrap();
    assert!(corners.is_empty());
}

#[test]
fn oversized_count_returns_only_qualifying_cells() {
    let matrix = column_ramp();
    let corners = extract_corners(matrix.view(), Some(100), 0.0).unwrap();
    assert_eq!(corners.len(), 3);
}

#[test]
fn negative_threshold_admits_zero_cells() {
    let matrix = single_peak();
    let corners = extract_corners(matrix.view(), None, -0.5).unwrap();
    assert_eq!(corners.len(), 9);
    assert_eq!(corners[0], Coordinate::new(1, 1));
}

#[test]
fn padded_rows_report_logical_coordinates() {
    let data = [0u8, 9, 255, 4, 0, 255];
    let view = ResponseView::new(&data, 2, 2, 3).unwrap();
    let corners = extract_scored(view, None, 0).unwrap();
    let found: Vec<(Coordinate, u8)> = corners.iter().map(|c| (c.coord, c.score)).collect();
    assert_eq!(
        found,
        vec![(Coordinate::new(0, 1), 9), (Coordinate::new(1, 0), 4)]
    );
}

#[test]
fn materialized_transpose_can_be_extracted() {
    let matrix = column_ramp();
    let transposed = OwnedResponse::from_view(matrix.view().transposed());
    let corners = extract_corners(transposed.view(), None, 0.0).unwrap();
    assert_eq!(
        corners,
        vec![
            Coordinate::new(1, 1),
            Coordinate::new(1, 2),
            Coordinate::new(1, 0),
        ]
    );
}

#[test]
fn config_extraction_matches_free_functions() {
    let matrix = column_ramp();
    let cfg = ExtractConfig {
        count: Some(2),
        ..ExtractConfig::default()
    };
    assert_eq!(
        cfg.extract(matrix.view()),
        extract_corners(matrix.view(), Some(2), 0.0)
    );
    assert_eq!(cfg.try_extract(matrix.view()).unwrap(), cfg.extract(matrix.view()));
}
