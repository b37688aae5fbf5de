use hifitime::{Epoch, TimeScale};
use std::str::FromStr;

use crate::{constants::DecimalYear, igrf_errors::IgrfError};

/// Transformation from an epoch to a decimal year
///
/// The fractional part is the elapsed fraction of the calendar year, both measured in
/// UTC from January 1st 00:00, so leap years count 366 days.
///
/// Argument
/// --------
/// * `epoch`: any hifitime epoch
///
/// Return
/// ------
/// * the decimal year, e.g. `2021.5` for 2021-07-02T12:00:00 UTC
pub fn decimal_year(epoch: &Epoch) -> DecimalYear {
    let (year, ..) = epoch.to_gregorian_utc();
    let start = Epoch::from_gregorian(year, 1, 1, 0, 0, 0, 0, TimeScale::UTC);
    let end = Epoch::from_gregorian(year + 1, 1, 1, 0, 0, 0, 0, TimeScale::UTC);

    year as f64 + (*epoch - start).to_seconds() / (end - start).to_seconds()
}

/// Transformation from a date string (e.g. `2024-06-01T00:00:00`) to a decimal year
///
/// Argument
/// --------
/// * `date`: any format accepted by [`Epoch::from_str`], UTC when no scale is given
///
/// Return
/// ------
/// * the decimal year, or [`IgrfError::InvalidDate`]
pub fn decimal_year_from_str(date: &str) -> Result<DecimalYear, IgrfError> {
    let epoch =
        Epoch::from_str(date).map_err(|e| IgrfError::InvalidDate(format!("{date}: {e}")))?;
    Ok(decimal_year(&epoch))
}
