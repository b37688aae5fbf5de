#![allow(dead_code)]

use std::sync::LazyLock;

use approx::assert_relative_eq;
use igrf::{coefficient_set::CoefficientSet, igrf::Igrf};

pub const SYNTHETIC_TABLE_PATH: &str = "tests/data/synthetic_igrf.txt";

pub static SYNTHETIC_TABLE: LazyLock<String> = LazyLock::new(|| {
    std::fs::read_to_string(SYNTHETIC_TABLE_PATH).expect("synthetic table is missing")
});

pub static IGRF_TEST: LazyLock<Igrf> =
    LazyLock::new(|| Igrf::from_text(&SYNTHETIC_TABLE).expect("synthetic table must load"));

/// Raw `g`/`h` rows of the synthetic table, split by hand: `rows[row][column]`.
pub static RAW_ROWS: LazyLock<Vec<Vec<f64>>> = LazyLock::new(|| {
    SYNTHETIC_TABLE
        .lines()
        .filter(|line| line.starts_with("g ") || line.starts_with("h "))
        .map(|line| {
            line.split_whitespace()
                .skip(3)
                .map(|v| v.parse().unwrap())
                .collect()
        })
        .collect()
});

/// Column of the SV rates in the synthetic table.
pub const SV_COLUMN: usize = 26;

/// Row of `g[n][m]` in the file.
pub fn g_row(n: usize, m: usize) -> usize {
    n * n - 1 + if m == 0 { 0 } else { 2 * m - 1 }
}

/// Row of `h[n][m]` in the file, `m >= 1`.
pub fn h_row(n: usize, m: usize) -> usize {
    n * n - 1 + 2 * m
}

/// Tabulated value of `g[n][m]` at epoch column `column`.
pub fn raw_g(n: usize, m: usize, column: usize) -> f64 {
    RAW_ROWS[g_row(n, m)][column]
}

/// Tabulated value of `h[n][m]` at epoch column `column`.
pub fn raw_h(n: usize, m: usize, column: usize) -> f64 {
    RAW_ROWS[h_row(n, m)][column]
}

/// Check every defined term of `set` against `expected_g` / `expected_h`.
pub fn assert_coefficients<G, H>(set: &CoefficientSet, expected_g: G, expected_h: H)
where
    G: Fn(usize, usize) -> f64,
    H: Fn(usize, usize) -> f64,
{
    for n in 1..=set.nmax() {
        for m in 0..=n {
            assert_relative_eq!(
                set.g(n, m).unwrap(),
                expected_g(n, m),
                epsilon = 1e-9,
                max_relative = 1e-12
            );
            if m == 0 {
                assert!(set.h(n, m).is_none());
            } else {
                assert_relative_eq!(
                    set.h(n, m).unwrap(),
                    expected_h(n, m),
                    epsilon = 1e-9,
                    max_relative = 1e-12
                );
            }
        }
    }
}
