//! # Coefficient table loading
//!
//! This module turns an IGRF coefficient file into the flat, read-only
//! [`CoefficientBuffer`] consumed by the [interpolator](crate::interpolation).
//!
//! ## Pipeline
//!
//! 1. [`parser`] selects the `g`/`h` lines and parses `(kind, n, m, values…)`,
//!    checking that rows follow the canonical degree/order sequence.
//! 2. [`matrix::CoefficientMatrix`] gathers the rows into a `rows × epochs` matrix
//!    and exposes one coefficient vector per epoch model.
//! 3. [`CoefficientBuffer`] concatenates the epoch vectors: the 19 historical
//!    epochs contribute their first 120 entries (degree 10), every later epoch
//!    contributes all of its entries, then a trailing `0.0` sentinel is appended.
//!
//! ```text
//! | 1900 | 1905 | ... | 1990 | 1995 | ... | 2025 |  SV  | 0.0 |
//! |  120 |  120 | ... |  120 |  195 | ... |  195 |  195 |  1  |
//! ```
//!
//! Any structural problem (no rows, unparsable value, ragged columns, missing
//! epochs) is reported as [`IgrfError::MalformedTable`]; a partially built buffer
//! is never returned.
//!
//! ## Example
//!
//! ```rust, no_run
//! use camino::Utf8Path;
//! use igrf::coefficient_table::CoefficientBuffer;
//!
//! let buffer = CoefficientBuffer::read_coefficient_file(Utf8Path::new("igrf14coeffs.txt")).unwrap();
//! println!("{} epochs, latest {}", buffer.epoch_count(), buffer.latest_epoch_year());
//! ```
pub mod file_source;
pub mod matrix;
pub mod parser;

use std::{fs, io::Read, str::FromStr};

use camino::Utf8Path;
use log::{debug, info};

use crate::{
    constants::{
        DecimalYear, NanoTesla, BUFFER_SENTINEL, EPOCH_SPACING_YEARS, HISTORICAL_BLOCK,
        HISTORICAL_EPOCHS, MAIN_FIELD_BLOCK, MAIN_FIELD_OFFSET, MAIN_FIELD_START_YEAR,
    },
    igrf_errors::IgrfError,
};

use matrix::CoefficientMatrix;
use parser::parse_rows;

/// Flat, epoch-ordered coefficient storage.
///
/// Built once from a coefficient file and never mutated afterwards. Share it by
/// reference (or `Arc`) between any number of concurrent queries.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientBuffer {
    values: Vec<NanoTesla>,
    main_field_epochs: usize,
}

impl CoefficientBuffer {
    /// Parse the full text of a coefficient file.
    ///
    /// Arguments
    /// -----------------
    /// * `text`: Content of the file, in the whitespace-delimited IGRF layout.
    ///
    /// Return
    /// ----------
    /// * The assembled buffer, or [`IgrfError::MalformedTable`].
    pub fn parse(text: &str) -> Result<Self, IgrfError> {
        let rows = parse_rows(text)?;
        let matrix = CoefficientMatrix::from_rows(&rows)?;
        debug!(
            "coefficient matrix: {} rows x {} epoch columns",
            matrix.n_rows(),
            matrix.n_epochs()
        );
        Self::from_matrix(&matrix)
    }

    /// Read a coefficient table from any byte stream.
    pub fn load<R: Read>(mut reader: R) -> Result<Self, IgrfError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Read a coefficient table from a file on disk.
    ///
    /// See also
    /// ------------
    /// * [`file_source::CoefficientFilePath::resolve`] – Locate the file first.
    pub fn read_coefficient_file(path: &Utf8Path) -> Result<Self, IgrfError> {
        let text = fs::read_to_string(path)?;
        let buffer = Self::parse(&text)?;
        info!(
            "loaded IGRF coefficients from {path}: {} epochs up to {}, {} slots",
            buffer.epoch_count(),
            buffer.latest_epoch_year(),
            buffer.len()
        );
        Ok(buffer)
    }

    /// Assemble the flat buffer from the epoch-major matrix.
    ///
    /// The matrix must hold at least `HISTORICAL_BLOCK` rows, and enough columns for
    /// the historical epochs, one main-field epoch and the SV column.
    fn from_matrix(matrix: &CoefficientMatrix) -> Result<Self, IgrfError> {
        let n_rows = matrix.n_rows();
        let n_epochs = matrix.n_epochs();

        if n_rows < HISTORICAL_BLOCK {
            return Err(IgrfError::MalformedTable(format!(
                "{n_rows} coefficient rows, at least {HISTORICAL_BLOCK} are required"
            )));
        }
        if n_epochs < HISTORICAL_EPOCHS + 2 {
            return Err(IgrfError::MalformedTable(format!(
                "{n_epochs} epoch columns, at least {} are required",
                HISTORICAL_EPOCHS + 2
            )));
        }

        let main_field_epochs = n_epochs - HISTORICAL_EPOCHS - 1;
        let mut values = Vec::with_capacity(expected_len(main_field_epochs));

        for (index, epoch) in matrix.epochs().enumerate() {
            if index < HISTORICAL_EPOCHS {
                values.extend_from_slice(&epoch[..HISTORICAL_BLOCK]);
            } else {
                values.extend_from_slice(epoch);
            }
        }
        values.push(BUFFER_SENTINEL);

        if values.len() != expected_len(main_field_epochs) {
            return Err(IgrfError::MalformedTable(format!(
                "buffer holds {} slots, expected {} for {main_field_epochs} degree-13 epochs \
                 (is a degree-13 row missing?)",
                values.len(),
                expected_len(main_field_epochs)
            )));
        }

        Ok(CoefficientBuffer {
            values,
            main_field_epochs,
        })
    }

    /// Build a buffer without any layout validation.
    #[cfg(test)]
    pub(crate) fn from_raw_parts(values: Vec<NanoTesla>, main_field_epochs: usize) -> Self {
        CoefficientBuffer {
            values,
            main_field_epochs,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[NanoTesla] {
        &self.values
    }

    /// Number of degree-13 main-field epochs (1995.0 onwards).
    pub fn main_field_epochs(&self) -> usize {
        self.main_field_epochs
    }

    /// Number of tabulated main-field epochs, historical ones included.
    pub fn epoch_count(&self) -> usize {
        HISTORICAL_EPOCHS + self.main_field_epochs
    }

    /// Offset of the latest main-field epoch block.
    pub fn latest_epoch_offset(&self) -> usize {
        MAIN_FIELD_OFFSET + self.main_field_epochs.saturating_sub(1) * MAIN_FIELD_BLOCK
    }

    /// Offset of the secular-variation block.
    pub fn sv_offset(&self) -> usize {
        MAIN_FIELD_OFFSET + self.main_field_epochs * MAIN_FIELD_BLOCK
    }

    /// Reference year of the latest main-field epoch, where SV extrapolation starts.
    pub fn latest_epoch_year(&self) -> DecimalYear {
        MAIN_FIELD_START_YEAR
            + self.main_field_epochs.saturating_sub(1) as f64 * EPOCH_SPACING_YEARS
    }

    /// Stored coefficients of one main-field epoch, oldest first.
    ///
    /// Historical epochs yield 120 values, later epochs 195.
    pub fn epoch_block(&self, index: usize) -> Option<&[NanoTesla]> {
        if index < HISTORICAL_EPOCHS {
            let start = index * HISTORICAL_BLOCK;
            self.values.get(start..start + HISTORICAL_BLOCK)
        } else if index < self.epoch_count() {
            let start = MAIN_FIELD_OFFSET + (index - HISTORICAL_EPOCHS) * MAIN_FIELD_BLOCK;
            self.values.get(start..start + MAIN_FIELD_BLOCK)
        } else {
            None
        }
    }

    /// Secular-variation rates, in nT/year.
    pub fn sv_block(&self) -> Option<&[NanoTesla]> {
        let start = self.sv_offset();
        self.values.get(start..start + MAIN_FIELD_BLOCK)
    }
}

impl FromStr for CoefficientBuffer {
    type Err = IgrfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// `19·120 + n13·195 + 195 + 1`
fn expected_len(main_field_epochs: usize) -> usize {
    MAIN_FIELD_OFFSET + main_field_epochs * MAIN_FIELD_BLOCK + MAIN_FIELD_BLOCK + 1
}
