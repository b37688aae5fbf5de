//! # Interpolated Gauss coefficients
//!
//! [`CoefficientSet`] is the result of one [`evaluate`](crate::interpolation::evaluate)
//! call: two triangular arrays `g[n][m]`, `h[n][m]` for `n = 0..=nmax`, `m = 0..=n`.
//!
//! Cells without a physical term are **absent**, not zero:
//!
//! - `g[0][0]` (no monopole),
//! - `h[n][0]` for every `n` (order-0 terms have no sine component).
//!
//! Absent cells read as `None` through [`CoefficientSet::g`] / [`CoefficientSet::h`]
//! and serialize as `null`.
//!
//! ```text
//! n\m   0      1      2   ...
//! 0   [None]
//! 1   [g10,   g11]
//! 2   [g20,   g21,   g22]
//! ```
use std::fmt;

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Row, Table};
use serde::{Deserialize, Serialize};

use crate::constants::{DecimalYear, Degree, NanoTesla, Order};

/// Lower-triangular array of optional coefficients, indexed `[n][m]` with `m <= n`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TriangularCoeffs {
    rows: Vec<Vec<Option<NanoTesla>>>,
}

impl TriangularCoeffs {
    /// All-absent array for degrees `0..=nmax`.
    pub fn new(nmax: Degree) -> Self {
        TriangularCoeffs {
            rows: (0..=nmax).map(|n| vec![None; n + 1]).collect(),
        }
    }

    /// Highest degree stored.
    pub fn nmax(&self) -> Degree {
        self.rows.len().saturating_sub(1)
    }

    /// Value at `(n, m)`; `None` when absent or outside the triangle.
    pub fn get(&self, n: Degree, m: Order) -> Option<NanoTesla> {
        self.rows.get(n)?.get(m).copied().flatten()
    }

    pub(crate) fn set(&mut self, n: Degree, m: Order, value: NanoTesla) {
        self.rows[n][m] = Some(value);
    }

    /// Row of degree `n`, `m = 0..=n`.
    pub fn degree(&self, n: Degree) -> Option<&[Option<NanoTesla>]> {
        self.rows.get(n).map(Vec::as_slice)
    }
}

/// Non-fatal condition attached to a successful evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Advisory {
    /// The year lies beyond the span the model is intended for; coefficients were
    /// extrapolated from the secular-variation rates.
    ReducedAccuracy {
        year: DecimalYear,
        advisory_year: DecimalYear,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::ReducedAccuracy {
                year,
                advisory_year,
            } => write!(
                f,
                "this IGRF generation is intended for use up to {advisory_year}; \
                 values for {year} are computed but may be of reduced accuracy"
            ),
        }
    }
}

/// Gauss coefficients of the geomagnetic main field at one decimal year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientSet {
    pub(crate) year: DecimalYear,
    pub(crate) nmax: Degree,
    pub(crate) g: TriangularCoeffs,
    pub(crate) h: TriangularCoeffs,
    pub(crate) advisory: Option<Advisory>,
}

impl CoefficientSet {
    pub(crate) fn new(year: DecimalYear, nmax: Degree) -> Self {
        CoefficientSet {
            year,
            nmax,
            g: TriangularCoeffs::new(nmax),
            h: TriangularCoeffs::new(nmax),
            advisory: None,
        }
    }

    /// Decimal year the set was evaluated at.
    pub fn year(&self) -> DecimalYear {
        self.year
    }

    /// Truncation degree: 10 before 1995.0, 13 afterwards.
    pub fn nmax(&self) -> Degree {
        self.nmax
    }

    /// `g[n][m]` in nT.
    pub fn g(&self, n: Degree, m: Order) -> Option<NanoTesla> {
        self.g.get(n, m)
    }

    /// `h[n][m]` in nT.
    pub fn h(&self, n: Degree, m: Order) -> Option<NanoTesla> {
        self.h.get(n, m)
    }

    pub fn g_coeffs(&self) -> &TriangularCoeffs {
        &self.g
    }

    pub fn h_coeffs(&self) -> &TriangularCoeffs {
        &self.h
    }

    pub fn advisory(&self) -> Option<&Advisory> {
        self.advisory.as_ref()
    }

    /// Defined terms as `(n, m, g, h)`, in the order they are stored in a coefficient
    /// file. `h` is `None` for `m = 0`.
    pub fn iter(&self) -> impl Iterator<Item = (Degree, Order, NanoTesla, Option<NanoTesla>)> + '_ {
        (1..=self.nmax).flat_map(move |n| {
            (0..=n).filter_map(move |m| self.g(n, m).map(|g| (n, m, g, self.h(n, m))))
        })
    }
}

impl fmt::Display for CoefficientSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![
            Cell::new("n"),
            Cell::new("m"),
            Cell::new("g (nT)"),
            Cell::new("h (nT)"),
        ]);

        for (n, m, g, h) in self.iter() {
            table.add_row(Row::from(vec![
                Cell::new(n).set_alignment(CellAlignment::Right),
                Cell::new(m).set_alignment(CellAlignment::Right),
                Cell::new(format!("{g:.2}")).set_alignment(CellAlignment::Right),
                Cell::new(h.map(|h| format!("{h:.2}")).unwrap_or_default())
                    .set_alignment(CellAlignment::Right),
            ]));
        }

        writeln!(f, "IGRF coefficients at {:.4} (nmax = {})", self.year, self.nmax)?;
        if let Some(advisory) = &self.advisory {
            writeln!(f, "warning: {advisory}")?;
        }
        write!(f, "{table}")
    }
}
