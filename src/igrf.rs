//! # Igrf: loaded coefficient model and its query surface
//!
//! This module defines the [`Igrf`](crate::igrf::Igrf) struct, the façade that bundles:
//!
//! 1. **The coefficient buffer** ([`CoefficientBuffer`]): loaded once, never mutated,
//!    held behind an [`Arc`] so clones share it.
//! 2. **The validity bounds** ([`ModelParams`]): date range and advisory threshold of the
//!    IGRF generation in use.
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use igrf::igrf::Igrf;
//!
//! // Look for the table at the given path, then $IGRF_COEFFS_FILE, then the user data dir
//! let igrf = Igrf::from_path(Some("igrf14coeffs.txt")).unwrap();
//!
//! let coeffs = igrf.evaluate(2024.5).unwrap();
//! println!("g10 = {:?}", coeffs.g(1, 0));
//! ```
//!
//! ## Concurrency
//!
//! [`Igrf`] is `Send + Sync` and cheap to clone. Every query takes `&self`; hand a
//! clone (or a reference) to each worker thread.
//!
//! ## Errors
//!
//! - Loading fails with [`IgrfError::MalformedTable`], [`IgrfError::IoError`] or
//!   [`IgrfError::CoefficientFileNotFound`]; there is no fallback table.
//! - Queries fail per call with [`IgrfError::OutOfRange`] (or
//!   [`IgrfError::BufferUnderflow`] on a corrupted buffer) and leave the model usable.
use std::{io::Read, sync::Arc};

use hifitime::Epoch;

use crate::{
    coefficient_set::CoefficientSet,
    coefficient_table::{file_source::CoefficientFilePath, CoefficientBuffer},
    constants::DecimalYear,
    igrf_errors::IgrfError,
    interpolation::evaluate_with,
    model_params::ModelParams,
    time::decimal_year,
};

#[derive(Debug, Clone)]
pub struct Igrf {
    buffer: Arc<CoefficientBuffer>,
    params: ModelParams,
}

impl Igrf {
    /// Wrap an already loaded buffer with the default IGRF-14 bounds.
    pub fn new(buffer: CoefficientBuffer) -> Self {
        Igrf {
            buffer: Arc::new(buffer),
            params: ModelParams::default(),
        }
    }

    /// Locate and load the coefficient file.
    ///
    /// Arguments
    /// -----------------
    /// * `user_path`: Preferred location, tried before the environment override and the
    ///   user data directory.
    ///
    /// See also
    /// ------------
    /// * [`CoefficientFilePath`] – Search order.
    pub fn from_path(user_path: Option<&str>) -> Result<Self, IgrfError> {
        let path = CoefficientFilePath::resolve(user_path)?;
        Ok(Self::new(CoefficientBuffer::read_coefficient_file(&path)?))
    }

    /// Load the model from the text of a coefficient file.
    pub fn from_text(text: &str) -> Result<Self, IgrfError> {
        Ok(Self::new(CoefficientBuffer::parse(text)?))
    }

    /// Load the model from a byte stream.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, IgrfError> {
        Ok(Self::new(CoefficientBuffer::load(reader)?))
    }

    /// Replace the validity bounds, e.g. for a newer IGRF generation.
    pub fn with_params(mut self, params: ModelParams) -> Self {
        self.params = params;
        self
    }

    pub fn buffer(&self) -> &CoefficientBuffer {
        &self.buffer
    }

    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    /// Reference year of the latest tabulated main-field epoch.
    pub fn latest_epoch_year(&self) -> DecimalYear {
        self.buffer.latest_epoch_year()
    }

    /// Year from which coefficients are extrapolated with secular variation.
    ///
    /// Equal to [`Igrf::latest_epoch_year`]: 2025.0 for the IGRF-14 table.
    pub fn sv_start_year(&self) -> DecimalYear {
        self.latest_epoch_year()
    }

    /// Gauss coefficients at a decimal year.
    ///
    /// See also
    /// ------------
    /// * [`evaluate_with`] – Underlying interpolator.
    pub fn evaluate(&self, year: DecimalYear) -> Result<CoefficientSet, IgrfError> {
        evaluate_with(&self.buffer, &self.params, year)
    }

    /// Gauss coefficients at a hifitime epoch.
    pub fn evaluate_epoch(&self, epoch: &Epoch) -> Result<CoefficientSet, IgrfError> {
        self.evaluate(decimal_year(epoch))
    }

    /// Evaluate a batch of years.
    ///
    /// Each year gets its own result; an out-of-range year does not affect the others.
    pub fn evaluate_many<I>(&self, years: I) -> Vec<Result<CoefficientSet, IgrfError>>
    where
        I: IntoIterator<Item = DecimalYear>,
    {
        years.into_iter().map(|year| self.evaluate(year)).collect()
    }
}
