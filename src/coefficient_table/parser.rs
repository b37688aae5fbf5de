//! Line-level parsing of IGRF coefficient files.
//!
//! A coefficient file is a whitespace-delimited text table. Only the lines whose
//! first token is exactly `g` or `h` carry data:
//!
//! ```text
//! g/h n m 1900.0 1905.0 ...  2025.0 2025-30
//! g   1 0 -31543 -31464 ... -29350.0   12.6
//! g   1 1  -2298  -2298 ...  -1410.3   10.0
//! h   1 1   5922   5909 ...   4545.5  -21.5
//! ```
//!
//! Everything else (comments, the `c/s` and `g/h` header lines, blank lines) is
//! skipped. A selected line that does not parse is a hard error.
use std::fmt;

use nom::{
    branch::alt,
    character::complete::{char, space0, space1, u32 as parse_u32},
    combinator::{all_consuming, map, value},
    multi::many1,
    number::complete::double,
    sequence::preceded,
    IResult, Parser,
};

use crate::{
    constants::{Degree, NanoTesla, Order},
    igrf_errors::IgrfError,
};

/// Component of a Gauss coefficient pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GaussKind {
    G,
    H,
}

impl fmt::Display for GaussKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GaussKind::G => write!(f, "g"),
            GaussKind::H => write!(f, "h"),
        }
    }
}

/// One data line of the coefficient file: a `(kind, n, m)` triple and its value in
/// every tabulated epoch, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussRow {
    pub kind: GaussKind,
    pub degree: Degree,
    pub order: Order,
    pub values: Vec<NanoTesla>,
}

fn parse_kind(input: &str) -> IResult<&str, GaussKind> {
    alt((value(GaussKind::G, char('g')), value(GaussKind::H, char('h')))).parse(input)
}

/// Parse a full `g`/`h` line: tag, degree, order and at least one epoch value.
pub(crate) fn parse_row(input: &str) -> IResult<&str, GaussRow> {
    map(
        all_consuming((
            preceded(space0, parse_kind),
            preceded(space1, parse_u32),
            preceded(space1, parse_u32),
            many1(preceded(space1, double)),
            space0,
        )),
        |(kind, degree, order, values, _)| GaussRow {
            kind,
            degree: degree as Degree,
            order: order as Order,
            values,
        },
    )
    .parse(input)
}

/// Whether the first whitespace-separated token of `line` is exactly `g` or `h`.
pub(crate) fn is_coefficient_line(line: &str) -> bool {
    matches!(line.split_whitespace().next(), Some("g") | Some("h"))
}

/// The `(kind, n, m)` sequence a well-formed table follows, starting at `n = 1`.
///
/// For each degree: `g n 0`, then `g n m`, `h n m` for `m = 1..=n`.
pub(crate) fn canonical_sequence() -> impl Iterator<Item = (GaussKind, Degree, Order)> {
    (1..).flat_map(|n| {
        (0..=n).flat_map(move |m| {
            let g = std::iter::once((GaussKind::G, n, m));
            let h = (m != 0).then_some((GaussKind::H, n, m));
            g.chain(h)
        })
    })
}

/// Extract every coefficient row of a table, checking values and ordering.
///
/// Arguments
/// -----------------
/// * `text`: Full content of a coefficient file.
///
/// Return
/// ----------
/// * The rows in file order, or [`IgrfError::MalformedTable`] naming the first
///   offending line (1-based) when a row does not parse, holds a non-finite value
///   or breaks the canonical `(n, m)` order.
pub(crate) fn parse_rows(text: &str) -> Result<Vec<GaussRow>, IgrfError> {
    let mut expected = canonical_sequence();
    let mut rows = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        if !is_coefficient_line(line) {
            continue;
        }

        let (_, row) = parse_row(line).map_err(|_| {
            IgrfError::MalformedTable(format!("line {}: cannot parse '{}'", line_no + 1, line))
        })?;

        if let Some(bad) = row.values.iter().find(|v| !v.is_finite()) {
            return Err(IgrfError::MalformedTable(format!(
                "line {}: non-finite coefficient {bad}",
                line_no + 1
            )));
        }

        // the sequence is infinite, next() always yields
        if let Some((kind, n, m)) = expected.next() {
            if (row.kind, row.degree, row.order) != (kind, n, m) {
                return Err(IgrfError::MalformedTable(format!(
                    "line {}: found {} {} {}, expected {kind} {n} {m}",
                    line_no + 1,
                    row.kind,
                    row.degree,
                    row.order
                )));
            }
        }

        rows.push(row);
    }

    if rows.is_empty() {
        return Err(IgrfError::MalformedTable(
            "no g/h coefficient rows found".into(),
        ));
    }

    Ok(rows)
}

#[cfg(test)]
mod parser_test {
    use super::*;

    #[test]
    fn test_parse_row() {
        let (rest, row) = parse_row("g  1  0 -31543 -31464 -29404.8     5.7").unwrap();
        assert!(rest.is_empty());
        assert_eq!(row.kind, GaussKind::G);
        assert_eq!(row.degree, 1);
        assert_eq!(row.order, 0);
        assert_eq!(row.values, vec![-31543.0, -31464.0, -29404.8, 5.7]);

        let (_, row) = parse_row("h 13 13\t0.1\t-0.2  ").unwrap();
        assert_eq!(row.kind, GaussKind::H);
        assert_eq!(row.degree, 13);
        assert_eq!(row.order, 13);
        assert_eq!(row.values, vec![0.1, -0.2]);
    }

    #[test]
    fn test_parse_row_rejects_garbage() {
        assert!(parse_row("g 1 0 12.5 abc").is_err());
        assert!(parse_row("g 1 0").is_err());
        assert!(parse_row("g one 0 1.0").is_err());
        assert!(parse_row("g/h n m 1900.0 1905.0").is_err());
    }

    #[test]
    fn test_is_coefficient_line() {
        assert!(is_coefficient_line("g 1 0 1.0"));
        assert!(is_coefficient_line("  h 1 1 1.0"));
        assert!(!is_coefficient_line("g/h n m 1900.0"));
        assert!(!is_coefficient_line("c/s main main SV"));
        assert!(!is_coefficient_line("# IGRF-14 coefficients"));
        assert!(!is_coefficient_line(""));
    }

    #[test]
    fn test_canonical_sequence() {
        let head: Vec<_> = canonical_sequence().take(8).collect();
        assert_eq!(
            head,
            vec![
                (GaussKind::G, 1, 0),
                (GaussKind::G, 1, 1),
                (GaussKind::H, 1, 1),
                (GaussKind::G, 2, 0),
                (GaussKind::G, 2, 1),
                (GaussKind::H, 2, 1),
                (GaussKind::G, 2, 2),
                (GaussKind::H, 2, 2),
            ]
        );
        assert_eq!(canonical_sequence().take_while(|(_, n, _)| *n <= 10).count(), 120);
        assert_eq!(canonical_sequence().take_while(|(_, n, _)| *n <= 13).count(), 195);
    }

    #[test]
    fn test_parse_rows_skips_headers() {
        let text = "# comment\nc/s main main\ng/h n m 1900.0 1905.0\ng 1 0 1.0 2.0\ng 1 1 3.0 4.0\nh 1 1 5.0 6.0\n";
        let rows = parse_rows(text).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].values, vec![5.0, 6.0]);
    }

    #[test]
    fn test_parse_rows_errors() {
        assert_eq!(
            parse_rows("# nothing here\n"),
            Err(IgrfError::MalformedTable(
                "no g/h coefficient rows found".into()
            ))
        );

        assert_eq!(
            parse_rows("g 1 0 1.0\nh 1 1 2.0\n"),
            Err(IgrfError::MalformedTable(
                "line 2: found h 1 1, expected g 1 1".into()
            ))
        );

        assert_eq!(
            parse_rows("g 1 0 1.0 x\n"),
            Err(IgrfError::MalformedTable(
                "line 1: cannot parse 'g 1 0 1.0 x'".into()
            ))
        );

        assert!(parse_rows("g 1 0 1.0 nan\n").is_err());
    }
}
