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
use crate::consts::{DEFAULT_SCHEME, ELLIPSIS};
use crate::span::{Span, SpannedText};
use std::borrow::Cow;
use url::form_urlencoded::byte_serialize;

/// The outcome of parsing one text.
///
/// Holds the rendered HTML and the entities extracted from the same span
/// sequence. Every list keeps input order and keeps duplicates. List references
/// appear in [`lists`](ParseResult::lists) only, never in
/// [`users`](ParseResult::users).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseResult {
    html: String,
    urls: Vec<String>,
    tags: Vec<String>,
    users: Vec<String>,
    lists: Vec<(String, String)>,
    reply: Option<String>,
}

impl ParseResult {
    /// The input with every entity wrapped in an anchor. Plain text is copied
    /// verbatim and is not escaped.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// URLs exactly as written in the input.
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// Hashtag texts without their marker.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Mentioned usernames without their marker.
    pub fn users(&self) -> &[String] {
        &self.users
    }

    /// `(username, list)` pairs of list references.
    pub fn lists(&self) -> &[(String, String)] {
        &self.lists
    }

    /// The username this text replies to, if it opens with a mention.
    pub fn reply(&self) -> Option<&str> {
        self.reply.as_deref()
    }

    /// Total number of extracted entities.
    pub fn entity_count(&self) -> usize {
        self.urls.len() + self.tags.len() + self.users.len() + self.lists.len()
    }

    /// Consumes the result and returns the rendered HTML.
    pub fn into_html(self) -> String {
        self.html
    }
}

/// Turns a span sequence into a [`ParseResult`].
pub(crate) struct Renderer<'a> {
    text: &'a str,
    config: &'a ParserConfig,
}

impl<'a> Renderer<'a> {
    pub(crate) fn new(text: &'a str, config: &'a ParserConfig) -> Renderer<'a> {
        Renderer { text, config }
    }

    pub(crate) fn render(&self, spans: &SpannedText) -> ParseResult {
        let mut result = ParseResult {
            html: String::with_capacity(self.text.len() * 2),
            reply: spans.reply_target(self.text).map(str::to_string),
            ..ParseResult::default()
        };

        for span in spans {
            let raw = span.as_str(self.text);
            match span {
                Span::Plain { .. } => result.html.push_str(raw),
                Span::Url { .. } => {
                    self.write_url(&mut result.html, raw);
                    result.urls.push(raw.to_string());
                }
                Span::Hashtag { tag, .. } => {
                    let tag = &self.text[tag.clone()];
                    let href = format!(
                        "{}%23{}",
                        escape_attribute(&self.config.hashtag_search_url),
                        byte_serialize(tag.as_bytes()).collect::<String>()
                    );
                    write_anchor(&mut result.html, &href, raw);
                    result.tags.push(tag.to_string());
                }
                Span::Mention { username, .. } => {
                    let username = &self.text[username.clone()];
                    let href = format!(
                        "{}{}",
                        escape_attribute(&self.config.mention_base_url),
                        username
                    );
                    write_anchor(&mut result.html, &href, raw);
                    result.users.push(username.to_string());
                }
                Span::List { username, list, .. } => {
                    let username = &self.text[username.clone()];
                    let list = &self.text[list.clone()];
                    let href = format!(
                        "{}{}/{}",
                        escape_attribute(&self.config.mention_base_url),
                        username,
                        list
                    );
                    write_anchor(&mut result.html, &href, raw);
                    result.lists.push((username.to_string(), list.to_string()));
                }
            }
        }

        result
    }

    fn write_url(&self, html: &mut String, url: &str) {
        let escaped = escape_attribute(url);
        let href = if has_scheme(url) {
            escaped.clone()
        } else {
            Cow::Owned(format!("{}{}", DEFAULT_SCHEME, escaped))
        };
        write_anchor(html, &href, &self.display_url(url, &escaped));
    }

    /// Shortens long URLs to a prefix of the escaped text plus an ellipsis.
    /// The cut never lands inside an escape such as `&amp;`.
    fn display_url<'u>(&self, url: &'u str, escaped: &str) -> Cow<'u, str> {
        let limit = self.config.max_url_display_length;
        if url.chars().count() <= limit {
            return Cow::Borrowed(url);
        }
        let keep = limit.saturating_sub(ELLIPSIS.len());
        let cut = escaped
            .char_indices()
            .nth(keep)
            .map_or(escaped.len(), |(index, _)| index);
        let mut prefix = &escaped[..cut];
        if let Some(amp) = prefix.rfind('&') {
            let escape_end = escaped[amp..].find(';').map_or(escaped.len(), |i| amp + i + 1);
            if escape_end > cut {
                prefix = &escaped[..amp];
            }
        }
        Cow::Owned(format!("{}{}", prefix, ELLIPSIS))
    }
}

fn write_anchor(html: &mut String, href: &str, body: &str) {
    html.push_str("<a href=\"");
    html.push_str(href);
    html.push_str("\">");
    html.push_str(body);
    html.push_str("</a>");
}

fn has_scheme(url: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(scheme))
    })
}

/// Escapes a value for use inside a double quoted attribute.
pub(crate) fn escape_attribute(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '"']) {
        return Cow::Borrowed(value);
    }
    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
