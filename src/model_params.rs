//! # Validity bounds of the coefficient model
//!
//! [`ModelParams`] holds the date limits the interpolator enforces. They are tied to a
//! specific IGRF generation (IGRF-14: valid up to 2035.0, reduced accuracy after
//! 2030.0) and must move forward when a new generation is published, so they are
//! plain configuration rather than literals buried in the interpolator.
//!
//! ```rust
//! use igrf::model_params::ModelParams;
//!
//! let params = ModelParams::builder()
//!     .max_year(2040.0)
//!     .advisory_year(2035.0)
//!     .build()
//!     .unwrap();
//! assert_eq!(params.max_year, 2040.0);
//! ```
//!
//! The structural layout of the table (19 degree-10 epochs, five-year spacing) is not
//! configurable; see [`crate::constants`].
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        DecimalYear, DEFAULT_ADVISORY_YEAR, DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR, FIRST_EPOCH_YEAR,
    },
    igrf_errors::IgrfError,
};

/// Date bounds applied by [`evaluate`](crate::interpolation::evaluate).
///
/// Fields
/// -----------------
/// * `min_year` – Earliest accepted decimal year (inclusive).
/// * `max_year` – Latest accepted decimal year (inclusive).
/// * `advisory_year` – Years strictly above this value are computed but flagged
///   with a reduced-accuracy [`Advisory`](crate::coefficient_set::Advisory).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    pub min_year: DecimalYear,
    pub max_year: DecimalYear,
    pub advisory_year: DecimalYear,
}

impl ModelParams {
    /// Construct a new [`ModelParams`] with the IGRF-14 bounds.
    ///
    /// This is equivalent to calling [`ModelParams::default()`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`ModelParamsBuilder`] to override some of the bounds.
    pub fn builder() -> ModelParamsBuilder {
        ModelParamsBuilder::new()
    }

    /// Whether `year` lies inside `[min_year, max_year]`.
    ///
    /// Non-finite years are never in range.
    pub fn contains(&self, year: DecimalYear) -> bool {
        year.is_finite() && year >= self.min_year && year <= self.max_year
    }
}

impl Default for ModelParams {
    fn default() -> Self {
        ModelParams {
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
            advisory_year: DEFAULT_ADVISORY_YEAR,
        }
    }
}

/// Builder for [`ModelParams`], with validation.
#[derive(Debug, Clone)]
pub struct ModelParamsBuilder {
    params: ModelParams,
}

impl Default for ModelParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelParamsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            params: ModelParams::default(),
        }
    }

    pub fn min_year(mut self, v: DecimalYear) -> Self {
        self.params.min_year = v;
        self
    }
    pub fn max_year(mut self, v: DecimalYear) -> Self {
        self.params.max_year = v;
        self
    }
    pub fn advisory_year(mut self, v: DecimalYear) -> Self {
        self.params.advisory_year = v;
        self
    }

    /// Validate and return the parameters.
    ///
    /// Return
    /// ----------
    /// * `Err(IgrfError::InvalidModelParameter)` if a bound is not finite, if
    ///   `min_year` precedes the first tabulated epoch, if `max_year < min_year`, or if
    ///   `advisory_year` falls outside `[min_year, max_year]`.
    pub fn build(self) -> Result<ModelParams, IgrfError> {
        let p = &self.params;

        if !(p.min_year.is_finite() && p.max_year.is_finite() && p.advisory_year.is_finite()) {
            return Err(IgrfError::InvalidModelParameter(
                "year bounds must be finite".into(),
            ));
        }
        if p.min_year < FIRST_EPOCH_YEAR {
            return Err(IgrfError::InvalidModelParameter(format!(
                "min_year must be >= {FIRST_EPOCH_YEAR}, the first tabulated epoch"
            )));
        }
        if p.max_year < p.min_year {
            return Err(IgrfError::InvalidModelParameter(
                "max_year must be >= min_year".into(),
            ));
        }
        if p.advisory_year < p.min_year || p.advisory_year > p.max_year {
            return Err(IgrfError::InvalidModelParameter(
                "advisory_year must lie within [min_year, max_year]".into(),
            ));
        }

        Ok(self.params)
    }
}
