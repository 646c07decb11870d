// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # OBJ-Lite Core Parser
//!
//! Line scanning and directive classification for Wavefront OBJ text,
//! built with [nom](https://docs.rs/nom).
//!
//! ## Overview
//!
//! - **Line Scanning**: `\n`-delimited scanning with [memchr](https://docs.rs/memchr),
//!   trimmed lines and 1-based line numbers
//! - **Classification**: zero-copy matching of one line against the ordered
//!   directive patterns (`v`, `vn`, `vt`, four face shapes, `o`, `g`,
//!   `usemtl`, `mtllib`, `s`)
//! - **Numeric Tokens**: float and index conversion through
//!   [fast-float](https://docs.rs/fast-float) and [lexical-core](https://docs.rs/lexical-core)
//!
//! Geometry assembly (index resolution, triangulation, grouping) lives in
//! `obj-lite-geometry`.
//!
//! ## Quick Start
//!
//! ```rust
//! use obj_lite_core::{classify, Directive, LineScanner};
//!
//! let content = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
//!
//! for (line_number, line) in LineScanner::new(content) {
//!     if let Directive::Face(face) = classify(line) {
//!         println!("face on line {} with {} references", line_number, face.vertices.len());
//!     }
//! }
//! ```

pub mod error;
pub mod fast_parse;
pub mod parser;

pub use error::{Error, Result};
pub use fast_parse::{parse_float, parse_index, parse_pair, parse_triple};
pub use parser::{classify, Directive, Face, FaceRefs, FaceShape, FaceVertexRef, LineScanner};
