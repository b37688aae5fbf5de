//! # igrf
//!
//! Loader and time interpolator for the International Geomagnetic Reference Field
//! (IGRF) Gauss coefficients.
//!
//! A coefficient file tabulates `g[n][m]`, `h[n][m]` for five-year epochs
//! (1900.0 … 2025.0) plus secular-variation rates. This crate parses it once into a
//! read-only [`CoefficientBuffer`](coefficient_table::CoefficientBuffer) and, for any
//! decimal year, produces the interpolated (or SV-extrapolated)
//! [`CoefficientSet`](coefficient_set::CoefficientSet) that feeds spherical-harmonic
//! synthesis of the field.
//!
//! ```rust, no_run
//! use igrf::igrf::Igrf;
//!
//! let igrf = Igrf::from_path(Some("igrf14coeffs.txt")).unwrap();
//! let coeffs = igrf.evaluate(2024.5).unwrap();
//! assert_eq!(coeffs.nmax(), 13);
//! ```
pub mod coefficient_set;
pub mod coefficient_table;
pub mod constants;
pub mod igrf;
pub mod igrf_errors;
pub mod interpolation;
pub mod model_params;
pub mod time;
