//! Plain-text loop-file parsing.
//!
//! The format is line oriented. Lines starting with `#` are comments; a
//! comment beginning with `#loop` (case-insensitive) terminates the current
//! loop. Every other non-empty line holds two numbers separated by commas
//! and/or whitespace. The first loop is the outer boundary, subsequent
//! loops are holes.
//!
//! # Example
//!
//! ```
//! use polybool2d::io::parse_loops;
//!
//! let text = "\
//! ## a unit square with a triangular hole
//! 0 0
//! 1, 0
//! 1, 1
//! 0 1
//! #loop
//! 0.2 0.2
//! 0.8 0.2
//! 0.5 0.8
//! ";
//! let poly = parse_loops::<f64>(text).unwrap();
//! assert_eq!(poly.outer_point_count(), 4);
//! assert_eq!(poly.holes.len(), 1);
//! ```

use crate::error::LoadError;
use crate::polygon::InputPolygon;
use crate::primitives::Point2;
use log::debug;
use num_traits::Float;
use std::path::Path;
use std::str::FromStr;

/// Parses loop-file text into a polygon.
///
/// A loop whose last point matches its first within 1e-3 per coordinate
/// drops the duplicate trailing point. Loops with no points are skipped.
/// Fails if any data line is malformed or no outer loop remains.
pub fn parse_loops<F: Float + FromStr>(text: &str) -> Result<InputPolygon<F>, LoadError> {
    let mut poly = InputPolygon::empty();
    let mut current: Vec<Point2<F>> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(comment) = line.strip_prefix('#') {
            if comment
                .get(..4)
                .is_some_and(|tag| tag.eq_ignore_ascii_case("loop"))
            {
                flush_loop(&mut poly, &mut current);
            }
            continue;
        }

        let mut tokens = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty());
        let x = parse_token(tokens.next(), line_no)?;
        let y = parse_token(tokens.next(), line_no)?;
        current.push(Point2::new(x, y));
    }
    flush_loop(&mut poly, &mut current);

    if poly.is_empty() {
        return Err(LoadError::NoOuterLoop);
    }
    Ok(poly)
}

/// Loads a polygon from a loop file on disk.
pub fn load_polygon<F: Float + FromStr>(
    path: impl AsRef<Path>,
) -> Result<InputPolygon<F>, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let poly = parse_loops(&text)?;
    debug!(
        "loaded {}: {} outer points, {} holes",
        path.display(),
        poly.outer_point_count(),
        poly.holes.len()
    );
    Ok(poly)
}

fn parse_token<F: Float + FromStr>(token: Option<&str>, line: usize) -> Result<F, LoadError> {
    let token = token.ok_or(LoadError::MissingCoordinate { line })?;
    token.parse().map_err(|_| LoadError::InvalidNumber {
        line,
        token: token.to_owned(),
    })
}

fn flush_loop<F: Float>(poly: &mut InputPolygon<F>, current: &mut Vec<Point2<F>>) {
    if current.is_empty() {
        return;
    }
    let eps = F::from(1e-3).unwrap();
    if current.len() >= 2 {
        let first = current[0];
        let last = current[current.len() - 1];
        if (first.x - last.x).abs() <= eps && (first.y - last.y).abs() <= eps {
            current.pop();
        }
    }
    let done = std::mem::take(current);
    if poly.outer.is_empty() {
        poly.outer = done;
    } else {
        poly.holes.push(done);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_loop() {
        let poly = parse_loops::<f64>("0 0\n2,0\n2 2\n0, 2\n").unwrap();
        assert_eq!(poly.outer_point_count(), 4);
        assert!(poly.holes.is_empty());
        assert_eq!(poly.outer[1], Point2::new(2.0, 0.0));
    }

    #[test]
    fn test_parse_holes_and_comments() {
        let text = "\
# outer
0 0
4 0
4 4
0 4
#LOOP first hole
1 1
2 1
2 2
1 2
#Loop second hole
3 3
3.5 3
3.5 3.5
";
        let poly = parse_loops::<f64>(text).unwrap();
        assert_eq!(poly.outer_point_count(), 4);
        assert_eq!(poly.holes.len(), 2);
        assert_eq!(poly.holes[1].len(), 3);
    }

    #[test]
    fn test_parse_drops_closing_duplicate() {
        let poly = parse_loops::<f64>("0 0\n1 0\n1 1\n0 1\n0.0005 0.0003\n").unwrap();
        assert_eq!(poly.outer_point_count(), 4);
    }

    #[test]
    fn test_parse_keeps_distinct_last_point() {
        let poly = parse_loops::<f64>("0 0\n1 0\n1 1\n0 1\n0.1 0\n").unwrap();
        assert_eq!(poly.outer_point_count(), 5);
    }

    #[test]
    fn test_parse_extra_tokens_ignored() {
        let poly = parse_loops::<f64>("1 2 3 4\n5 6\n7 8\n").unwrap();
        assert_eq!(poly.outer[0], Point2::new(1.0, 2.0));
    }

    #[test]
    fn test_parse_missing_coordinate() {
        let err = parse_loops::<f64>("0 0\n42\n").unwrap_err();
        match err {
            LoadError::MissingCoordinate { line } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_invalid_number() {
        let err = parse_loops::<f64>("0 0\n1 banana\n").unwrap_err();
        match err {
            LoadError::InvalidNumber { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "banana");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_no_outer_loop() {
        assert!(matches!(
            parse_loops::<f64>("# only comments\n"),
            Err(LoadError::NoOuterLoop)
        ));
        assert!(matches!(parse_loops::<f64>(""), Err(LoadError::NoOuterLoop)));
    }

    #[test]
    fn test_parse_empty_loop_markers_are_skipped() {
        let poly = parse_loops::<f64>("#loop\n#loop\n0 0\n1 0\n1 1\n").unwrap();
        assert_eq!(poly.outer_point_count(), 3);
        assert!(poly.holes.is_empty());
    }

    #[test]
    fn test_load_polygon_missing_file() {
        let err = load_polygon::<f64>("/nonexistent/definitely-missing.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
