// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Index resolution
//!
//! OBJ indices are 1-based; negative values count back from the end of the
//! pool *as it is when the face is read*, so `-1` is always the most recent
//! record. Resolved values are component offsets into a flat buffer.

use obj_lite_core::parse_index;

use crate::error::{Error, Result};
use crate::pool::Component;

/// Resolve a parsed index against a buffer of `len` scalars
///
/// `index >= 0` maps to `(index - 1) * stride`, `index < 0` to
/// `(index + len / stride) * stride`. Anything that lands outside the buffer
/// (including index `0`) is an [`Error::IndexOutOfRange`].
#[inline]
pub fn resolve_offset(index: i64, len: usize, component: Component) -> Result<usize> {
    let stride = component.stride();
    let records = (len / stride) as i64;

    let record = if index >= 0 { index - 1 } else { index + records };

    if record < 0 || record >= records {
        return Err(Error::IndexOutOfRange {
            component,
            index,
            available: records as usize,
        });
    }

    Ok(record as usize * stride)
}

/// Parse an index token and resolve it (see [`resolve_offset`])
#[inline]
pub fn resolve_index(token: &str, len: usize, component: Component) -> Result<usize> {
    resolve_offset(parse_index(token)?, len, component)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_indices() {
        assert_eq!(resolve_offset(1, 9, Component::Position).unwrap(), 0);
        assert_eq!(resolve_offset(3, 9, Component::Position).unwrap(), 6);
        assert_eq!(resolve_offset(2, 6, Component::Uv).unwrap(), 2);
    }

    #[test]
    fn test_negative_indices() {
        // 3 positions declared: -1 is the last, -3 the first
        assert_eq!(resolve_offset(-1, 9, Component::Position).unwrap(), 6);
        assert_eq!(resolve_offset(-3, 9, Component::Position).unwrap(), 0);
        assert_eq!(resolve_offset(-1, 4, Component::Uv).unwrap(), 2);
    }

    #[test]
    fn test_negative_index_tracks_pool_growth() {
        let mut len = 0;
        for n in 1..=5usize {
            len += 3;
            assert_eq!(resolve_offset(-1, len, Component::Normal).unwrap(), (n - 1) * 3);
        }
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            resolve_offset(4, 9, Component::Position),
            Err(Error::IndexOutOfRange { index: 4, available: 3, .. })
        ));
        assert!(matches!(
            resolve_offset(-4, 9, Component::Position),
            Err(Error::IndexOutOfRange { index: -4, .. })
        ));
        assert!(matches!(
            resolve_offset(1, 0, Component::Uv),
            Err(Error::IndexOutOfRange { component: Component::Uv, .. })
        ));
    }

    #[test]
    fn test_zero_is_out_of_range() {
        assert!(matches!(
            resolve_offset(0, 9, Component::Position),
            Err(Error::IndexOutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn test_resolve_index_token() {
        assert_eq!(resolve_index("-2", 9, Component::Position).unwrap(), 3);
        assert!(matches!(
            resolve_index("99999999999999999999", 9, Component::Position),
            Err(Error::CoreError(obj_lite_core::Error::InvalidIndex { .. }))
        ));
    }
}
