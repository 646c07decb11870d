// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! OBJ-Lite Geometry
//!
//! Turns classified OBJ directives into per-object, non-indexed triangle
//! buffers: index resolution against a vertex pool, quad fan triangulation,
//! fallback face normals with nalgebra, and object/material-group tracking.
//!
//! ```rust
//! use obj_lite_geometry::parse_obj;
//!
//! let document = parse_obj("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
//! let geometry = &document.objects[0].geometry;
//! assert_eq!(geometry.positions.len(), 9);
//! assert_eq!(&geometry.normals[..3], &[0.0, 0.0, 1.0]);
//! ```

pub mod assembler;
pub mod document;
pub mod error;
pub mod index;
pub mod loader;
pub mod mesh;
pub mod object;
pub mod pool;
pub mod state;
pub mod triangulation;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use assembler::{face_normal, FaceAssembler};
pub use document::{ObjDocument, ObjObject};
pub use error::{Error, Result};
pub use index::{resolve_index, resolve_offset};
pub use loader::{parse_obj, ObjParser, ParseOptions};
pub use mesh::{Geometry, PrimitiveType};
pub use object::{Declaration, MaterialGroup, ParseObject};
pub use pool::{Component, VertexPool};
pub use state::ParseState;
pub use triangulation::{fan_triangles, MAX_FACE_VERTICES};
