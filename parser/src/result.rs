//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Error types for the parser crate.
//!
//! Parsing itself never fails: malformed entities degrade to plain text. The
//! only fallible operation is validating a [`ParserConfig`](crate::ParserConfig)
//! before it is used to build a [`Parser`](crate::Parser).

use thiserror::Error;

/// Result type alias for operations that may fail with a [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised when a parser configuration cannot produce valid output.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A link target prefix was empty.
    #[error("Base URL '{name}' must not be empty")]
    EmptyBaseUrl {
        /// Name of the configuration field
        name: &'static str,
    },

    /// A length limit was zero, which would make the entity unmatchable.
    #[error("Limit '{name}' must be greater than zero")]
    ZeroLimit {
        /// Name of the configuration field
        name: &'static str,
    },

    /// The URL display length leaves no room for any text before the ellipsis.
    #[error("URL display length {length} must be longer than the ellipsis ({ellipsis} characters)")]
    DisplayLengthTooShort {
        /// The configured display length
        length: usize,
        /// Length of the ellipsis marker
        ellipsis: usize,
    },
}

impl ConfigError {
    /// Name of the configuration field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::EmptyBaseUrl { name } | ConfigError::ZeroLimit { name } => *name,
            ConfigError::DisplayLengthTooShort { .. } => "max_url_display_length",
        }
    }
}
