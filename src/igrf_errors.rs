use thiserror::Error;

use crate::constants::DecimalYear;

#[derive(Error, Debug)]
pub enum IgrfError {
    #[error("Malformed coefficient table: {0}")]
    MalformedTable(String),

    #[error("Date {year} is outside the valid range {min_year} <= date <= {max_year}")]
    OutOfRange {
        year: DecimalYear,
        min_year: DecimalYear,
        max_year: DecimalYear,
    },

    #[error(
        "Coefficient buffer underflow: slot {cursor} requested but the segment ends at {segment_end} (buffer length {buffer_len})"
    )]
    BufferUnderflow {
        cursor: usize,
        segment_end: usize,
        buffer_len: usize,
    },

    #[error("Coefficient file not found, searched: {0:?}")]
    CoefficientFileNotFound(Vec<String>),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid model parameter: {0}")]
    InvalidModelParameter(String),

    #[error("Invalid date string: {0}")]
    InvalidDate(String),
}

impl PartialEq for IgrfError {
    fn eq(&self, other: &Self) -> bool {
        use IgrfError::*;
        match (self, other) {
            (MalformedTable(a), MalformedTable(b)) => a == b,
            (
                OutOfRange {
                    year: y1,
                    min_year: lo1,
                    max_year: hi1,
                },
                OutOfRange {
                    year: y2,
                    min_year: lo2,
                    max_year: hi2,
                },
            ) => y1.to_bits() == y2.to_bits() && lo1 == lo2 && hi1 == hi2,
            (
                BufferUnderflow {
                    cursor: c1,
                    segment_end: e1,
                    buffer_len: l1,
                },
                BufferUnderflow {
                    cursor: c2,
                    segment_end: e2,
                    buffer_len: l2,
                },
            ) => c1 == c2 && e1 == e2 && l1 == l2,
            (CoefficientFileNotFound(a), CoefficientFileNotFound(b)) => a == b,

            // I/O errors are not comparable: equal when same variant
            (IoError(_), IoError(_)) => true,

            (InvalidModelParameter(a), InvalidModelParameter(b)) => a == b,
            (InvalidDate(a), InvalidDate(b)) => a == b,

            _ => false,
        }
    }
}
