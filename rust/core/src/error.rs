// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for lexical operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning directive tokens into numbers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid float '{token}'")]
    InvalidFloat { token: String },

    #[error("Invalid index '{token}'")]
    InvalidIndex { token: String },
}

impl Error {
    pub(crate) fn invalid_float(token: &str) -> Self {
        Self::InvalidFloat {
            token: token.to_string(),
        }
    }

    pub(crate) fn invalid_index(token: &str) -> Self {
        Self::InvalidIndex {
            token: token.to_string(),
        }
    }
}
