use itertools::Itertools;
use nalgebra::{DMatrix, DVectorView};

use crate::{constants::NanoTesla, igrf_errors::IgrfError};

use super::parser::GaussRow;

/// Coefficient rows of a table gathered into a `rows × epochs` matrix.
///
/// nalgebra stores matrices column-major, so every column, i.e. every epoch model,
/// is one contiguous coefficient vector. Walking [`CoefficientMatrix::epochs`] is the
/// epoch-major transposition of the row-major file layout.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientMatrix {
    data: DMatrix<NanoTesla>,
}

impl CoefficientMatrix {
    /// Gather parsed rows into a matrix.
    ///
    /// Return
    /// ----------
    /// * [`IgrfError::MalformedTable`] if `rows` is empty or if the rows do not all
    ///   carry the same number of epoch columns.
    pub fn from_rows(rows: &[GaussRow]) -> Result<Self, IgrfError> {
        let n_epochs = rows
            .iter()
            .map(|row| row.values.len())
            .all_equal_value()
            .map_err(|mismatch| match mismatch {
                Some((a, b)) => IgrfError::MalformedTable(format!(
                    "ragged table: rows carry {a} and {b} epoch columns"
                )),
                None => IgrfError::MalformedTable("no g/h coefficient rows found".into()),
            })?;

        let flat: Vec<NanoTesla> = rows
            .iter()
            .flat_map(|row| row.values.iter().copied())
            .collect();

        Ok(CoefficientMatrix {
            data: DMatrix::from_row_slice(rows.len(), n_epochs, &flat),
        })
    }

    /// Number of `(kind, n, m)` rows.
    pub fn n_rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of tabulated epoch models, SV column included.
    pub fn n_epochs(&self) -> usize {
        self.data.ncols()
    }

    /// Coefficient vector of one epoch model.
    pub fn epoch(&self, index: usize) -> Option<DVectorView<'_, NanoTesla>> {
        (index < self.n_epochs()).then(|| self.data.column(index))
    }

    /// Epoch vectors, oldest first.
    pub fn epochs(&self) -> impl Iterator<Item = &[NanoTesla]> + '_ {
        self.data.as_slice().chunks_exact(self.n_rows())
    }
}

#[cfg(test)]
mod matrix_test {
    use super::*;
    use crate::coefficient_table::parser::GaussKind;

    fn row(kind: GaussKind, degree: usize, order: usize, values: &[f64]) -> GaussRow {
        GaussRow {
            kind,
            degree,
            order,
            values: values.to_vec(),
        }
    }

    #[test]
    fn test_epoch_major_transposition() {
        let rows = vec![
            row(GaussKind::G, 1, 0, &[1.0, 10.0, 100.0]),
            row(GaussKind::G, 1, 1, &[2.0, 20.0, 200.0]),
            row(GaussKind::H, 1, 1, &[3.0, 30.0, 300.0]),
        ];
        let matrix = CoefficientMatrix::from_rows(&rows).unwrap();
        assert_eq!(matrix.n_rows(), 3);
        assert_eq!(matrix.n_epochs(), 3);

        let epochs: Vec<&[f64]> = matrix.epochs().collect();
        assert_eq!(epochs[0], &[1.0, 2.0, 3.0]);
        assert_eq!(epochs[1], &[10.0, 20.0, 30.0]);
        assert_eq!(epochs[2], &[100.0, 200.0, 300.0]);

        assert_eq!(matrix.epoch(1).unwrap()[2], 30.0);
        assert!(matrix.epoch(3).is_none());
    }

    #[test]
    fn test_ragged_rows() {
        let rows = vec![
            row(GaussKind::G, 1, 0, &[1.0, 10.0, 100.0]),
            row(GaussKind::G, 1, 1, &[2.0, 20.0]),
        ];
        assert_eq!(
            CoefficientMatrix::from_rows(&rows),
            Err(IgrfError::MalformedTable(
                "ragged table: rows carry 3 and 2 epoch columns".into()
            ))
        );
        assert!(CoefficientMatrix::from_rows(&[]).is_err());
    }
}
