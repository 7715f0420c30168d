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

//! Recognizes URLs, hashtags, mentions and `@user/list` references in short
//! social-media text and renders them as HTML anchors.
//!
//! ```rust
//! let result = twp_parser::parse("@alice read http://example.com #rust");
//!
//! assert_eq!(result.users(), ["alice"]);
//! assert_eq!(result.urls(), ["http://example.com"]);
//! assert_eq!(result.tags(), ["rust"]);
//! assert_eq!(result.reply(), Some("alice"));
//! ```
//!
//! Plain text is copied into the HTML unescaped. Callers handling untrusted
//! input must escape it before parsing.

pub mod charclass;
mod config;
pub mod consts;
mod parser;
mod render;
mod result;
mod scanner;
mod span;
pub mod utility;

pub use self::config::ParserConfig;
pub use self::parser::Parser;
pub use self::render::ParseResult;
pub use self::result::{ConfigError, ConfigResult};
pub use self::span::{Span, SpanKind, SpannedText};
pub use self::utility::{
    autolink, extract_hashtags, extract_lists, extract_mentions, extract_reply, extract_urls,
};

/// Parses `text` with the default configuration.
pub fn parse(text: &str) -> ParseResult {
    Parser::default().parse(text)
}
