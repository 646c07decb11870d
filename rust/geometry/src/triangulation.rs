// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Face triangulation
//!
//! Fan triangulation from the first vertex. Only triangles and quads are
//! assembled, so the fan never has more than two triangles.

use crate::error::{Error, Result};

/// Largest face the assembler accepts
pub const MAX_FACE_VERTICES: usize = 4;

/// Fan triangles of an `n`-vertex face: (0, i, i + 1)
#[inline]
pub fn fan_triangles(n: usize) -> Result<impl Iterator<Item = [usize; 3]>> {
    if !(3..=MAX_FACE_VERTICES).contains(&n) {
        return Err(Error::UnsupportedFaceArity(n));
    }

    Ok((1..n - 1).map(|i| [0, i, i + 1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle() {
        let triangles: Vec<_> = fan_triangles(3).unwrap().collect();
        assert_eq!(triangles, vec![[0, 1, 2]]);
    }

    #[test]
    fn test_quad_shares_first_vertex() {
        let triangles: Vec<_> = fan_triangles(4).unwrap().collect();
        assert_eq!(triangles, vec![[0, 1, 2], [0, 2, 3]]);
    }

    #[test]
    fn test_unsupported_arity() {
        assert!(matches!(fan_triangles(2), Err(Error::UnsupportedFaceArity(2))));
        assert!(matches!(fan_triangles(5), Err(Error::UnsupportedFaceArity(5))));
    }
}
