// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! OBJ loader: scan, classify, apply, finish

use obj_lite_core::{classify, Directive, LineScanner};
use rustc_hash::FxHashMap;

use crate::document::ObjDocument;
use crate::error::{Error, Result};
use crate::state::ParseState;
use crate::triangulation::MAX_FACE_VERTICES;

/// Loader options; the default accepts everything a lenient OBJ reader would
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject faces with more than four references instead of dropping the
    /// extra ones
    pub strict_face_arity: bool,
    /// Keep objects that never received geometry
    pub keep_empty_objects: bool,
}

/// Parses OBJ text into an [`ObjDocument`]
///
/// Holds only options, so one parser can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct ObjParser {
    options: ParseOptions,
}

impl ObjParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse a whole OBJ text
    ///
    /// Any fatal error is returned as [`Error::AtLine`] with the 1-based line
    /// number and the trimmed line text.
    pub fn parse(&self, text: &str) -> Result<ObjDocument> {
        let mut state = ParseState::new();
        let mut ignored: FxHashMap<&str, usize> = FxHashMap::default();

        for (line_number, line) in LineScanner::new(text) {
            let directive = classify(line);

            match &directive {
                Directive::Unrecognized(keyword) => {
                    *ignored.entry(*keyword).or_insert(0) += 1;
                    continue;
                }
                Directive::Face(face) if face.trailing > 0 => {
                    let arity = face.vertices.len() + face.trailing;
                    if self.options.strict_face_arity {
                        return Err(Error::UnsupportedFaceArity(arity).at_line(line_number, line));
                    }
                    tracing::warn!(
                        line = line_number,
                        references = arity,
                        dropped = face.trailing,
                        "Face has more than {} references, extra references ignored",
                        MAX_FACE_VERTICES
                    );
                }
                _ => {}
            }

            state
                .apply(directive)
                .map_err(|err| err.at_line(line_number, line))?;
        }

        for (keyword, count) in &ignored {
            tracing::debug!(keyword = %keyword, count, "Ignored unsupported directive");
        }

        let document = state.finish_with(self.options.keep_empty_objects);

        tracing::debug!(
            objects = document.objects.len(),
            vertices = document.vertex_count(),
            material_libraries = document.material_libraries.len(),
            "OBJ parse complete"
        );

        Ok(document)
    }
}

/// Parse OBJ text with default options
pub fn parse_obj(text: &str) -> Result<ObjDocument> {
    ObjParser::new().parse(text)
}
