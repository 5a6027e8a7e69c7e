#![cfg(feature = "rayon")]

use cornerpick::{ExtractConfig, ResponseView};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn make_response(rows: usize, cols: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..rows * cols)
        .map(|_| rng.random_range(0..64) as f64 - 16.0)
        .collect()
}

#[test]
fn parallel_matches_sequential() {
    let rows = 97;
    let cols = 131;
    let data = make_response(rows, cols, 11);
    let view = ResponseView::from_slice(&data, rows, cols).unwrap();

    for count in [None, Some(0), Some(1), Some(25), Some(rows * cols)] {
        let seq = ExtractConfig {
            count,
            threshold: 4.0,
            parallel: false,
        };
        let par = ExtractConfig {
            parallel: true,
            ..seq
        };
        assert_eq!(seq.extract_scored(view), par.extract_scored(view));
    }
}

#[test]
fn parallel_handles_padded_rows() {
    let rows = 40;
    let cols = 30;
    let stride = 37;
    let mut data = vec![-1.0f64; rows * stride];
    for row in 0..rows {
        for col in 0..cols {
            data[row * stride + col] = ((row * 7 + col * 13) % 29) as f64;
        }
    }
    let view = ResponseView::new(&data, rows, cols, stride).unwrap();

    let seq = ExtractConfig {
        count: Some(50),
        threshold: 10.0,
        parallel: false,
    };
    let par = ExtractConfig {
        parallel: true,
        ..seq
    };
    assert_eq!(seq.extract(view), par.extract(view));
}
