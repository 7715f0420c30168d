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

use crate::config::ParserConfig;
use crate::render::{ParseResult, Renderer};
use crate::result::ConfigResult;
use crate::scanner::Scanner;
use crate::span::SpannedText;
use tracing::{debug, instrument};

/// Recognizes entities in short text and renders them as HTML anchors.
///
/// A `Parser` only holds its validated configuration. Every call scans its
/// input from scratch and shares nothing with other calls, so one parser can
/// be used from many threads at once.
///
/// # Examples
///
/// ```rust
/// use twp_parser::{Parser, ParserConfig};
///
/// let parser = Parser::new(ParserConfig::people_only()).unwrap();
/// let result = parser.parse("@alice look at #this");
///
/// assert_eq!(result.users(), ["alice"]);
/// assert!(result.tags().is_empty());
/// assert_eq!(result.reply(), Some("alice"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Creates a parser after validating `config`.
    pub fn new(config: ParserConfig) -> ConfigResult<Parser> {
        config.validate()?;
        Ok(Parser { config })
    }

    /// The configuration this parser was built with.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Scans `text` into its ordered span sequence without rendering it.
    #[instrument(skip_all, fields(bytes = text.len()))]
    pub fn spans(&self, text: &str) -> SpannedText {
        Scanner::new(text, &self.config).scan()
    }

    /// Scans and renders `text`. Never fails; unrecognized input stays plain.
    #[instrument(skip_all, fields(bytes = text.len()))]
    pub fn parse(&self, text: &str) -> ParseResult {
        let spans = Scanner::new(text, &self.config).scan();
        let result = Renderer::new(text, &self.config).render(&spans);
        debug!(
            spans = spans.count(),
            urls = result.urls().len(),
            tags = result.tags().len(),
            users = result.users().len(),
            lists = result.lists().len(),
            reply = result.reply().is_some(),
            "parsed text"
        );
        result
    }
}
