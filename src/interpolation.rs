//! # Time interpolation of Gauss coefficients
//!
//! Given a loaded [`CoefficientBuffer`] and a decimal year, [`evaluate`] produces the
//! [`CoefficientSet`] valid at that year.
//!
//! ## Regimes
//!
//! * **Interpolation** (first epoch ≤ year < latest epoch): the year falls between two
//!   tabulated epochs `E` and `E + 5`, and every coefficient is blended linearly,
//!   `(1 − t)·c(E) + t·c(E + 5)` with `t = (year − E) / 5`. Before 1995.0 both epochs
//!   are read as degree-10 blocks of 120 slots (the 1995.0 block is read through its
//!   degree-10 prefix); from 1995.0 on, blocks are degree 13 (195 slots).
//! * **Extrapolation** (year ≥ latest epoch, 2025.0 for IGRF-14): coefficients are
//!   the latest epoch plus `(year − 2025)` years of secular variation,
//!   `c(2025) + t·sv`. The weight is a rate multiplier and is not clamped.
//!
//! Both regimes reduce to one weighted sum over two blocks of the buffer,
//! described by an [`EpochBracket`].
//!
//! ## Errors
//!
//! * [`IgrfError::OutOfRange`] – year outside `[min_year, max_year]` or not finite.
//! * [`IgrfError::BufferUnderflow`] – the buffer is shorter than the selected blocks.
//!   A validated buffer never triggers it; missing slots are never replaced by zeros.
//!
//! Years beyond [`ModelParams::advisory_year`] succeed with a reduced-accuracy
//! [`Advisory`].
use log::{debug, warn};

use crate::{
    coefficient_set::{Advisory, CoefficientSet},
    coefficient_table::CoefficientBuffer,
    constants::{
        coefficient_count, DecimalYear, Degree, NanoTesla, EPOCH_SPACING_YEARS,
        FIRST_EPOCH_YEAR, HISTORICAL_EPOCHS, HISTORICAL_NMAX, MAIN_FIELD_NMAX, MAIN_FIELD_OFFSET,
        MAIN_FIELD_START_YEAR,
    },
    igrf_errors::IgrfError,
    model_params::ModelParams,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    Interpolation,
    Extrapolation,
}

/// The two buffer blocks a query reads and how they are weighted.
///
/// The low block spans `[offset, offset + block)`, the high block
/// `[offset + block, offset + 2·block)`. Each coefficient is
/// `w_lo · low + w_hi · high`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochBracket {
    pub regime: Regime,
    pub nmax: Degree,
    pub block: usize,
    pub offset: usize,
    pub w_lo: f64,
    pub w_hi: f64,
}

impl EpochBracket {
    /// Select the blocks and weights for `year`.
    ///
    /// `year` must already be range-checked and not precede the first epoch.
    pub fn select(buffer: &CoefficientBuffer, year: DecimalYear) -> Self {
        let latest_epoch_year = buffer.latest_epoch_year();

        if year >= latest_epoch_year {
            return EpochBracket {
                regime: Regime::Extrapolation,
                nmax: MAIN_FIELD_NMAX,
                block: coefficient_count(MAIN_FIELD_NMAX),
                offset: buffer.latest_epoch_offset(),
                w_lo: 1.0,
                w_hi: year - latest_epoch_year,
            };
        }

        let u = (year - FIRST_EPOCH_YEAR) / EPOCH_SPACING_YEARS;
        let epoch_floor = u.floor();
        let t = u - epoch_floor;
        let epoch_index = epoch_floor as usize;

        let (nmax, block, offset) = if year < MAIN_FIELD_START_YEAR {
            let block = coefficient_count(HISTORICAL_NMAX);
            (HISTORICAL_NMAX, block, epoch_index * block)
        } else {
            // same epoch grid, counted from 1995.0
            let block = coefficient_count(MAIN_FIELD_NMAX);
            let main_index = epoch_index - HISTORICAL_EPOCHS;
            (MAIN_FIELD_NMAX, block, MAIN_FIELD_OFFSET + main_index * block)
        };

        EpochBracket {
            regime: Regime::Interpolation,
            nmax,
            block,
            offset,
            w_lo: 1.0 - t,
            w_hi: t,
        }
    }
}

/// Sequential reader over one block of the buffer.
struct BlockCursor<'a> {
    values: &'a [NanoTesla],
    pos: usize,
    end: usize,
}

impl<'a> BlockCursor<'a> {
    fn new(values: &'a [NanoTesla], start: usize, len: usize) -> Self {
        BlockCursor {
            values,
            pos: start,
            end: start + len,
        }
    }

    fn next_value(&mut self) -> Result<NanoTesla, IgrfError> {
        let underflow = || IgrfError::BufferUnderflow {
            cursor: self.pos,
            segment_end: self.end,
            buffer_len: self.values.len(),
        };

        if self.pos >= self.end {
            return Err(underflow());
        }
        let value = self.values.get(self.pos).copied().ok_or_else(underflow)?;
        self.pos += 1;
        Ok(value)
    }
}

/// Evaluate the coefficients at `year` with the default IGRF-14 bounds.
///
/// Arguments
/// -----------------
/// * `buffer`: Coefficient table loaded once at startup.
/// * `year`: Decimal year, `1900.0 <= year <= 2035.0`.
///
/// Return
/// ----------
/// * The coefficient set, or [`IgrfError::OutOfRange`] / [`IgrfError::BufferUnderflow`].
///
/// See also
/// ------------
/// * [`evaluate_with`] – Same with custom [`ModelParams`].
pub fn evaluate(buffer: &CoefficientBuffer, year: DecimalYear) -> Result<CoefficientSet, IgrfError> {
    evaluate_with(buffer, &ModelParams::default(), year)
}

/// Evaluate the coefficients at `year` within the bounds of `params`.
///
/// Pure function of its inputs: identical arguments give bit-identical results, and
/// nothing is shared or mutated, so it can run concurrently from any number of threads.
pub fn evaluate_with(
    buffer: &CoefficientBuffer,
    params: &ModelParams,
    year: DecimalYear,
) -> Result<CoefficientSet, IgrfError> {
    if !params.contains(year) || year < FIRST_EPOCH_YEAR {
        return Err(IgrfError::OutOfRange {
            year,
            min_year: params.min_year,
            max_year: params.max_year,
        });
    }

    let bracket = EpochBracket::select(buffer, year);
    debug!("IGRF {year}: {bracket:?}");

    let values = buffer.as_slice();
    let mut low = BlockCursor::new(values, bracket.offset, bracket.block);
    let mut high = BlockCursor::new(values, bracket.offset + bracket.block, bracket.block);
    let mut blend = || -> Result<NanoTesla, IgrfError> {
        Ok(bracket.w_lo * low.next_value()? + bracket.w_hi * high.next_value()?)
    };

    let mut set = CoefficientSet::new(year, bracket.nmax);
    for n in 1..=bracket.nmax {
        for m in 0..=n {
            set.g.set(n, m, blend()?);
            if m != 0 {
                set.h.set(n, m, blend()?);
            }
        }
    }

    if year > params.advisory_year {
        let advisory = Advisory::ReducedAccuracy {
            year,
            advisory_year: params.advisory_year,
        };
        warn!("{advisory}");
        set.advisory = Some(advisory);
    }

    Ok(set)
}
