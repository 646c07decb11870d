// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

use crate::pool::Component;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling OBJ geometry
#[derive(Error, Debug)]
pub enum Error {
    #[error("{component} index {index} out of range ({available} declared)")]
    IndexOutOfRange {
        component: Component,
        index: i64,
        available: usize,
    },

    #[error("Face has {0} vertex references, only triangles and quads are supported")]
    UnsupportedFaceArity(usize),

    #[error("Core parser error: {0}")]
    CoreError(#[from] obj_lite_core::Error),

    #[error("line {line}: {source} (`{text}`)")]
    AtLine {
        line: usize,
        text: String,
        source: Box<Error>,
    },
}

impl Error {
    /// Attach the offending line to an error
    pub fn at_line(self, line: usize, text: &str) -> Self {
        Error::AtLine {
            line,
            text: text.to_string(),
            source: Box::new(self),
        }
    }

    /// Innermost error, without line context
    pub fn root(&self) -> &Error {
        match self {
            Error::AtLine { source, .. } => source.root(),
            other => other,
        }
    }
}
