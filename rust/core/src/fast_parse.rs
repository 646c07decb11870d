// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fast Numeric Token Parsing
//!
//! Directive tokens are already shape-checked by the classifier, so these
//! helpers only convert them. A token that still fails conversion is an
//! error: guessing a value would shift every index resolved after it.

use crate::error::{Error, Result};

/// Parse a coordinate component (`v`, `vn`, `vt` tokens) to `f32`
///
/// Uses fast-float and requires the whole token to be consumed, so
/// `1e` or `1-2` are rejected instead of being read as a prefix.
#[inline]
pub fn parse_float(token: &str) -> Result<f32> {
    fast_float::parse::<f32, _>(token).map_err(|_| Error::invalid_float(token))
}

/// Parse a signed face index token
///
/// The value keeps its OBJ meaning (1-based, negative counts from the end);
/// resolving it against a pool is left to the caller.
#[inline]
pub fn parse_index(token: &str) -> Result<i64> {
    lexical_core::parse::<i64>(token.as_bytes()).map_err(|_| Error::invalid_index(token))
}

/// Parse three float tokens into a position/normal record
#[inline]
pub fn parse_triple(tokens: &[&str; 3]) -> Result<[f32; 3]> {
    Ok([
        parse_float(tokens[0])?,
        parse_float(tokens[1])?,
        parse_float(tokens[2])?,
    ])
}

/// Parse two float tokens into a texture coordinate record
#[inline]
pub fn parse_pair(tokens: &[&str; 2]) -> Result<[f32; 2]> {
    Ok([parse_float(tokens[0])?, parse_float(tokens[1])?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_float("1.5"), Ok(1.5));
        assert_eq!(parse_float("-0.25"), Ok(-0.25));
        assert_eq!(parse_float("1e3"), Ok(1000.0));
        assert_eq!(parse_float("2.5E-1"), Ok(0.25));
        assert_eq!(parse_float("3"), Ok(3.0));
    }

    #[test]
    fn test_parse_float_rejects_partial_tokens() {
        assert!(matches!(parse_float("1-2"), Err(Error::InvalidFloat { .. })));
        assert!(matches!(parse_float("--"), Err(Error::InvalidFloat { .. })));
        assert!(matches!(parse_float("e"), Err(Error::InvalidFloat { .. })));
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("1"), Ok(1));
        assert_eq!(parse_index("-3"), Ok(-3));
        assert_eq!(parse_index("0"), Ok(0));
    }

    #[test]
    fn test_parse_index_overflow() {
        let err = parse_index("99999999999999999999999").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidIndex {
                token: "99999999999999999999999".to_string()
            }
        );
    }

    #[test]
    fn test_parse_triple() {
        assert_eq!(parse_triple(&["1", "2.5", "-3"]), Ok([1.0, 2.5, -3.0]));
        assert!(parse_triple(&["1", "x", "3"]).is_err());
    }
}
