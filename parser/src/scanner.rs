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

//! Single-pass entity scanner.
//!
//! The scanner walks the text once, front to back. At every position it tries
//! the enabled entity matchers in a fixed priority order (URL, then
//! mention/list, then hashtag) and keeps the first span that both opens and
//! closes there. Code points where nothing matches accumulate into a single
//! plain span that is flushed before the next entity.

use crate::charclass::{
    is_domain_char, is_domain_label_start, is_hashtag_char, is_hashtag_marker, is_list_char,
    is_mention_marker, is_url_path_char, is_url_trailing_punctuation, is_username_char,
    is_word_boundary_before,
};
use crate::config::ParserConfig;
use crate::span::{Span, SpanKind, SpannedText};
use tracing::trace;

/// An entity matcher. Returns the span opened at byte `pos`, whose character
/// is `c`, or `None` if no entity of its kind starts there.
type Attempt<'a> = fn(&Scanner<'a>, usize, char) -> Option<Span>;

/// Scans one text with one configuration. Holds no state between scans.
pub(crate) struct Scanner<'a> {
    text: &'a str,
    config: &'a ParserConfig,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(text: &'a str, config: &'a ParserConfig) -> Scanner<'a> {
        Scanner { text, config }
    }

    /// Enabled matchers in priority order.
    fn attempts(&self) -> Vec<Attempt<'a>> {
        let mut attempts: Vec<Attempt<'a>> = Vec::with_capacity(3);
        if self.config.urls {
            attempts.push(Scanner::match_url);
        }
        if self.config.mentions {
            attempts.push(Scanner::match_mention);
        }
        if self.config.hashtags {
            attempts.push(Scanner::match_hashtag);
        }
        attempts
    }

    /// Partitions the text into plain and entity spans.
    pub(crate) fn scan(&self) -> SpannedText {
        let attempts = self.attempts();
        let mut spans = Vec::new();
        let mut plain_start = 0;
        let mut pos = 0;

        while let Some(c) = self.char_at(pos) {
            match attempts.iter().find_map(|attempt| attempt(self, pos, c)) {
                Some(span) => {
                    if plain_start < pos {
                        spans.push(Span::Plain {
                            range: plain_start..pos,
                        });
                    }
                    pos = span.end();
                    plain_start = pos;
                    spans.push(span);
                }
                None => pos += c.len_utf8(),
            }
        }
        if plain_start < self.text.len() {
            spans.push(Span::Plain {
                range: plain_start..self.text.len(),
            });
        }

        SpannedText::from_spans(spans)
    }

    fn char_at(&self, pos: usize) -> Option<char> {
        self.text.get(pos..)?.chars().next()
    }

    fn prev_char(&self, pos: usize) -> Option<char> {
        self.text[..pos].chars().next_back()
    }

    /// Returns the position after at most `max` characters matching `pred`.
    fn skip_while(&self, pos: usize, max: usize, pred: fn(char) -> bool) -> usize {
        self.text[pos..]
            .char_indices()
            .take(max)
            .take_while(|&(_, c)| pred(c))
            .last()
            .map_or(pos, |(offset, c)| pos + offset + c.len_utf8())
    }

    fn starts_with_ignore_case(&self, pos: usize, prefix: &str) -> bool {
        self.text
            .get(pos..pos + prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    }

    fn match_url(&self, start: usize, c: char) -> Option<Span> {
        if !matches!(c, 'h' | 'H' | 'w' | 'W') {
            return None;
        }
        let host_start = if self.starts_with_ignore_case(start, "https://") {
            start + 8
        } else if self.starts_with_ignore_case(start, "http://") {
            start + 7
        } else if self.text[start..].starts_with("www.") || self.text[start..].starts_with("WWW.")
        {
            start
        } else {
            return None;
        };
        if !is_word_boundary_before(SpanKind::Url, self.prev_char(start)) {
            trace!(position = start, "url rejected: glued to preceding text");
            return None;
        }
        let Some(host_end) = self.match_domain(host_start) else {
            trace!(position = start, "url rejected: invalid domain");
            return None;
        };

        let mut end = self.match_port(host_end);
        if matches!(self.char_at(end), Some('/' | '?')) {
            end = self.match_path(end);
        }
        while end > host_end {
            match self.prev_char(end) {
                Some(last) if is_url_trailing_punctuation(last) => end -= last.len_utf8(),
                _ => break,
            }
        }

        Some(Span::Url { range: start..end })
    }

    /// Matches dot separated labels ending in an ASCII top-level label of at
    /// least two letters. Returns the end of the top-level label.
    fn match_domain(&self, pos: usize) -> Option<usize> {
        let mut cursor = pos;
        let mut last_label = pos..pos;
        let mut labels = 0;

        while self.char_at(cursor).is_some_and(is_domain_label_start) {
            let label_start = cursor;
            cursor = self.skip_while(cursor, usize::MAX, is_domain_char);
            last_label = label_start..cursor;
            labels += 1;

            let continues = self.char_at(cursor) == Some('.')
                && self.char_at(cursor + 1).is_some_and(is_domain_label_start);
            if !continues {
                break;
            }
            cursor += 1;
        }
        if labels < 2 {
            return None;
        }

        // The top-level label is the ASCII letter run that opens the final
        // label; `example.comいま` ends after `com`.
        let tld = self.text[last_label.clone()]
            .bytes()
            .take_while(|b| b.is_ascii_alphabetic())
            .count();
        if tld < 2 {
            return None;
        }
        let end = last_label.start + tld;
        match self.char_at(end) {
            Some(next) if next.is_ascii_alphanumeric() || next == '-' || next == '_' => None,
            _ => Some(end),
        }
    }

    fn match_port(&self, pos: usize) -> usize {
        if self.char_at(pos) != Some(':') {
            return pos;
        }
        let digits_end = self.skip_while(pos + 1, usize::MAX, |c| c.is_ascii_digit());
        if digits_end > pos + 1 { digits_end } else { pos }
    }

    /// Consumes a path or query. `&` only continues the URL once a `?` has
    /// been seen, so `example.com/test&@user` stops before the `&`.
    fn match_path(&self, pos: usize) -> usize {
        let mut cursor = pos;
        let mut seen_query = false;
        while let Some(c) = self.char_at(cursor) {
            match c {
                '?' => seen_query = true,
                '&' if !seen_query => break,
                c if !is_url_path_char(c) => break,
                _ => {}
            }
            cursor += c.len_utf8();
        }
        cursor
    }

    fn match_mention(&self, start: usize, c: char) -> Option<Span> {
        if !is_mention_marker(c) {
            return None;
        }
        if !is_word_boundary_before(SpanKind::Mention, self.prev_char(start)) {
            trace!(position = start, "mention rejected: glued to preceding text");
            return None;
        }
        let name_start = start + c.len_utf8();
        let name_end = self.skip_while(name_start, self.config.max_username_length, is_username_char);
        if name_end == name_start {
            return None;
        }

        if self.config.lists && self.char_at(name_end) == Some('/') {
            let list_start = name_end + 1;
            let list_end =
                self.skip_while(list_start, self.config.max_list_name_length, is_list_char);
            if list_end > list_start {
                return Some(Span::List {
                    range: start..list_end,
                    username: name_start..name_end,
                    list: list_start..list_end,
                });
            }
        }

        Some(Span::Mention {
            range: start..name_end,
            username: name_start..name_end,
        })
    }

    fn match_hashtag(&self, start: usize, c: char) -> Option<Span> {
        if !is_hashtag_marker(c) {
            return None;
        }
        if !is_word_boundary_before(SpanKind::Hashtag, self.prev_char(start)) {
            trace!(position = start, "hashtag rejected: glued to preceding text");
            return None;
        }
        let tag_start = start + c.len_utf8();
        let tag_end = self.skip_while(tag_start, usize::MAX, is_hashtag_char);
        let tag = &self.text[tag_start..tag_end];
        if tag.is_empty() || tag.chars().all(char::is_numeric) {
            trace!(position = start, "hashtag rejected: no letters");
            return None;
        }

        Some(Span::Hashtag {
            range: start..tag_end,
            tag: tag_start..tag_end,
        })
    }
}
