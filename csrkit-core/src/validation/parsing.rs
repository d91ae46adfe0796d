//! Parsing utilities for sparse feature strings
//!
//! Upstream adapters often carry sparse rows as feature strings of the
//! form `"<column>:<value>"`, or a bare `"<column>"` meaning value 1.

use crate::CsrError;

/// Value carried by a feature string without an explicit value
pub const IMPLICIT_FEATURE_VALUE: f64 = 1.0;

/// Parse a feature string into `(column, value)`
///
/// Surrounding whitespace is ignored. The column is returned signed so the
/// builder can report negative columns as such; range checks happen there.
pub fn parse_feature(feature: &str) -> Result<(i64, f64), CsrError> {
    let feature = feature.trim();
    if feature.is_empty() {
        return Err(CsrError::MalformedFeature);
    }

    match feature.split_once(':') {
        Some((column, value)) => {
            let column = parse_column(column)?;
            let value = value
                .trim()
                .parse::<f64>()
                .map_err(|_| CsrError::MalformedFeature)?;
            Ok((column, value))
        }
        None => Ok((parse_column(feature)?, IMPLICIT_FEATURE_VALUE)),
    }
}

/// Parse a signed integer column index
fn parse_column(s: &str) -> Result<i64, CsrError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(CsrError::MalformedFeature);
    }
    s.parse::<i64>().map_err(|_| CsrError::MalformedFeature)
}
