//! # Constants and type definitions for the IGRF coefficient model
//!
//! This module centralizes the **structural constants** of the IGRF coefficient
//! table layout and the **default date bounds** used by the interpolator.
//!
//! ## Overview
//!
//! - Epoch grid of the tabulated models (first epoch, five-year spacing)
//! - Truncation degrees of the historical and main-field model generations
//! - Slot counts per epoch block in the flat coefficient buffer
//! - Default validity bounds, overridable through
//!   [`ModelParams`](crate::model_params::ModelParams)
//!
//! ## Buffer layout
//!
//! ```text
//! | 19 × 120 (degree 10) | n13 × 195 (degree 13) | 195 (SV rates) | 0.0 |
//! ```

// -------------------------------------------------------------------------------------------------
// Epoch grid
// -------------------------------------------------------------------------------------------------

/// Reference year of the oldest tabulated epoch model
pub const FIRST_EPOCH_YEAR: f64 = 1900.0;

/// Spacing between two tabulated epoch models, in years
pub const EPOCH_SPACING_YEARS: f64 = 5.0;

/// Number of leading epoch models truncated at degree 10 (1900.0 … 1990.0)
pub const HISTORICAL_EPOCHS: usize = 19;

/// First year modelled to degree 13 (1995.0)
pub const MAIN_FIELD_START_YEAR: f64 =
    FIRST_EPOCH_YEAR + HISTORICAL_EPOCHS as f64 * EPOCH_SPACING_YEARS;

// -------------------------------------------------------------------------------------------------
// Truncation degrees and block sizes
// -------------------------------------------------------------------------------------------------

/// Truncation degree of the historical models
pub const HISTORICAL_NMAX: usize = 10;

/// Truncation degree of the main-field and secular-variation models
pub const MAIN_FIELD_NMAX: usize = 13;

/// Number of Gauss coefficients (g and h together) of a model truncated at `nmax`.
///
/// Every degree `n` carries one `g[n][0]` and a `(g, h)` pair for each order
/// `m = 1..=n`, i.e. `2n + 1` values, which sums to `nmax · (nmax + 2)`.
pub const fn coefficient_count(nmax: usize) -> usize {
    nmax * (nmax + 2)
}

/// Slots occupied by one historical epoch in the buffer (120)
pub const HISTORICAL_BLOCK: usize = coefficient_count(HISTORICAL_NMAX);

/// Slots occupied by one main-field or SV epoch in the buffer (195)
pub const MAIN_FIELD_BLOCK: usize = coefficient_count(MAIN_FIELD_NMAX);

/// Buffer offset of the first degree-13 epoch
pub const MAIN_FIELD_OFFSET: usize = HISTORICAL_EPOCHS * HISTORICAL_BLOCK;

/// Value appended after the SV block
pub const BUFFER_SENTINEL: f64 = 0.0;

// -------------------------------------------------------------------------------------------------
// Default validity bounds
// -------------------------------------------------------------------------------------------------

/// Default lower bound of the accepted decimal years
pub const DEFAULT_MIN_YEAR: f64 = FIRST_EPOCH_YEAR;

/// Default upper bound of the accepted decimal years (IGRF-14 generation)
pub const DEFAULT_MAX_YEAR: f64 = 2035.0;

/// Default year beyond which extrapolated results carry a reduced-accuracy advisory
pub const DEFAULT_ADVISORY_YEAR: f64 = 2030.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Decimal year (e.g. `2024.5` is mid-2024)
pub type DecimalYear = f64;

/// Spherical-harmonic degree `n`
pub type Degree = usize;

/// Spherical-harmonic order `m`
pub type Order = usize;

/// Gauss coefficient value, in nanotesla (main field) or nanotesla per year (SV)
pub type NanoTesla = f64;
