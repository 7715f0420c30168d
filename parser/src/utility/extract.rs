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
use crate::render::Renderer;
use crate::scanner::Scanner;
use crate::span::{Span, SpannedText};
use std::borrow::Cow;

fn scan(text: &str) -> SpannedText {
    Scanner::new(text, &ParserConfig::default()).scan()
}

/// Wraps every entity in `text` in an anchor using the default configuration.
///
/// Returns `Cow::Borrowed(text)` when nothing was recognized, so callers
/// autolinking mostly plain text pay for the scan only.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// # use twp_parser::autolink;
///
/// assert!(matches!(autolink("just words"), Cow::Borrowed(_)));
/// assert_eq!(
///     autolink("hi @bob"),
///     "hi <a href=\"http://twitter.com/bob\">@bob</a>"
/// );
/// ```
pub fn autolink(text: &str) -> Cow<'_, str> {
    let config = ParserConfig::default();
    let spans = Scanner::new(text, &config).scan();
    if spans.entities().next().is_none() {
        return Cow::Borrowed(text);
    }
    Cow::Owned(Renderer::new(text, &config).render(&spans).into_html())
}

/// Returns every URL in `text`, as written, in input order.
pub fn extract_urls(text: &str) -> Vec<&str> {
    scan(text)
        .entities()
        .filter(|span| matches!(span, Span::Url { .. }))
        .map(|span| span.as_str(text))
        .collect()
}

/// Returns every hashtag in `text` without its marker, in input order.
pub fn extract_hashtags(text: &str) -> Vec<&str> {
    if !text.contains(['#', '\u{FF03}']) {
        return Vec::new();
    }
    scan(text)
        .entities()
        .filter_map(|span| span.tag(text))
        .collect()
}

/// Returns every mentioned username in `text`, in input order. Usernames
/// owning a list reference are not included.
pub fn extract_mentions(text: &str) -> Vec<&str> {
    if !text.contains(['@', '\u{FF20}']) {
        return Vec::new();
    }
    scan(text)
        .entities()
        .filter(|span| matches!(span, Span::Mention { .. }))
        .filter_map(|span| span.username(text))
        .collect()
}

/// Returns every `(username, list)` reference in `text`, in input order.
pub fn extract_lists(text: &str) -> Vec<(&str, &str)> {
    if !text.contains(['@', '\u{FF20}']) {
        return Vec::new();
    }
    scan(text)
        .entities()
        .filter_map(|span| Some((span.username(text)?, span.list_name(text)?)))
        .collect()
}

/// Returns the username `text` replies to, if it opens with a mention.
pub fn extract_reply(text: &str) -> Option<&str> {
    if !text.contains(['@', '\u{FF20}']) {
        return None;
    }
    scan(text).reply_target(text)
}
