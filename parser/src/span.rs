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
use crate::scanner::Scanner;
use enum_kinds::EnumKind;
use std::ops::{Index, Range};

/// The ordered span sequence produced by scanning a text.
///
/// `SpannedText` is a newtype around `Vec<Span>`. The spans partition the
/// scanned input exactly: the first span starts at byte 0, each span starts
/// where the previous one ended, and the last span ends at the input length.
/// Adjacent plain text is always held in a single [`Span::Plain`].
///
/// # Examples
///
/// ```rust
/// use twp_parser::{Span, SpanKind, SpannedText};
///
/// let input = "hi @username";
/// let spans = SpannedText::parse(input);
///
/// assert_eq!(spans.count(), 2);
/// assert_eq!(spans[1].kind(), SpanKind::Mention);
/// assert_eq!(spans[1].as_str(input), "@username");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpannedText(Vec<Span>);

impl SpannedText {
    pub(crate) fn from_spans(spans: Vec<Span>) -> SpannedText {
        SpannedText(spans)
    }

    /// Scans `text` with the default [`ParserConfig`].
    pub fn parse(text: &str) -> SpannedText {
        Scanner::new(text, &ParserConfig::default()).scan()
    }

    /// Returns the total byte length from the first to the last span.
    pub fn len(&self) -> usize {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => last.end() - first.start(),
            _ => 0,
        }
    }

    /// Returns true when there are no spans, which only happens for empty input.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of spans.
    pub fn count(&self) -> usize {
        self.0.len()
    }

    /// Returns an iterator over the spans in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Span> {
        self.0.iter()
    }

    /// Returns an iterator over the non-plain spans in input order.
    pub fn entities(&self) -> impl Iterator<Item = &Span> {
        self.0.iter().filter(|span| span.is_entity())
    }

    /// Returns the username this text replies to.
    ///
    /// The text is a reply when its first entity is a mention or list and
    /// only whitespace, ideographic space included, comes before it.
    pub fn reply_target<'a>(&self, text: &'a str) -> Option<&'a str> {
        let first = self.entities().next()?;
        let username = first.username(text)?;
        text[..first.start()]
            .chars()
            .all(char::is_whitespace)
            .then_some(username)
    }

    /// Checks that the spans partition `text` exactly, with no gaps, overlaps
    /// or adjacent plain spans, and that every captured sub-range lies inside
    /// its span on a character boundary.
    pub fn is_partition_of(&self, text: &str) -> bool {
        let mut cursor = 0;
        let mut previous_plain = false;
        for span in self.iter() {
            if span.start() != cursor || span.end() <= span.start() {
                return false;
            }
            if !text.is_char_boundary(span.start()) || !text.is_char_boundary(span.end()) {
                return false;
            }
            let is_plain = span.kind() == SpanKind::Plain;
            if is_plain && previous_plain {
                return false;
            }
            for capture in span.captures() {
                if capture.start < span.start()
                    || capture.end > span.end()
                    || !text.is_char_boundary(capture.start)
                    || !text.is_char_boundary(capture.end)
                {
                    return false;
                }
            }
            previous_plain = is_plain;
            cursor = span.end();
        }
        cursor == text.len()
    }

    /// Consumes the collection and returns the underlying spans.
    pub fn into_inner(self) -> Vec<Span> {
        self.0
    }
}

impl Index<usize> for SpannedText {
    type Output = Span;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a SpannedText {
    type Item = &'a Span;
    type IntoIter = std::slice::Iter<'a, Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A contiguous byte range of the scanned text tagged with what was found there.
///
/// Spans hold ranges only; use [`Span::as_str`] or the capture accessors with
/// the scanned text to get at the content. Entity variants carry the ranges
/// of their captured parts in addition to the full range, which always starts
/// with the marker character (`@`, `＠`, `#`, `＃`) for mentions, lists and
/// hashtags.
///
/// The fieldless [`SpanKind`] mirror of this enum is derived with `enum-kinds`.
#[derive(Clone, Debug, PartialEq, Eq, EnumKind)]
#[enum_kind(SpanKind, derive(Hash))]
pub enum Span {
    /// Text that is not part of any entity.
    Plain {
        /// Byte range in the source text
        range: Range<usize>,
    },
    /// A URL with or without a scheme.
    Url {
        /// Byte range in the source text
        range: Range<usize>,
    },
    /// A hashtag such as `#rust`.
    Hashtag {
        /// Byte range in the source text, marker included
        range: Range<usize>,
        /// Byte range of the tag text without the marker
        tag: Range<usize>,
    },
    /// A user mention such as `@username`.
    Mention {
        /// Byte range in the source text, marker included
        range: Range<usize>,
        /// Byte range of the username without the marker
        username: Range<usize>,
    },
    /// A list reference such as `@username/list`.
    List {
        /// Byte range in the source text, marker included
        range: Range<usize>,
        /// Byte range of the owning username
        username: Range<usize>,
        /// Byte range of the list slug
        list: Range<usize>,
    },
}

impl Span {
    /// Returns the full byte range of this span.
    pub fn range(&self) -> Range<usize> {
        match self {
            Span::Plain { range }
            | Span::Url { range }
            | Span::Hashtag { range, .. }
            | Span::Mention { range, .. }
            | Span::List { range, .. } => range.clone(),
        }
    }

    /// Returns the starting byte position of this span.
    pub fn start(&self) -> usize {
        self.range().start
    }

    /// Returns the ending byte position (exclusive) of this span.
    pub fn end(&self) -> usize {
        self.range().end
    }

    /// Returns the byte length of this span.
    pub fn len(&self) -> usize {
        self.range().len()
    }

    /// Returns true if the span covers no bytes. Scanned spans are never empty.
    pub fn is_empty(&self) -> bool {
        self.range().is_empty()
    }

    /// Returns the fieldless kind of this span.
    pub fn kind(&self) -> SpanKind {
        SpanKind::from(self)
    }

    /// Returns true for every variant except [`Span::Plain`].
    pub fn is_entity(&self) -> bool {
        !matches!(self, Span::Plain { .. })
    }

    /// Returns the full text of this span.
    ///
    /// # Panics
    ///
    /// Panics if `text` is not the text this span was produced from.
    pub fn as_str<'a>(&self, text: &'a str) -> &'a str {
        &text[self.range()]
    }

    /// Returns the username of a mention or list.
    pub fn username<'a>(&self, text: &'a str) -> Option<&'a str> {
        match self {
            Span::Mention { username, .. } | Span::List { username, .. } => {
                Some(&text[username.clone()])
            }
            _ => None,
        }
    }

    /// Returns the slug of a list.
    pub fn list_name<'a>(&self, text: &'a str) -> Option<&'a str> {
        match self {
            Span::List { list, .. } => Some(&text[list.clone()]),
            _ => None,
        }
    }

    /// Returns the tag text of a hashtag, without its marker.
    pub fn tag<'a>(&self, text: &'a str) -> Option<&'a str> {
        match self {
            Span::Hashtag { tag, .. } => Some(&text[tag.clone()]),
            _ => None,
        }
    }

    /// Returns the marker character (`@`, `＠`, `#` or `＃`) that opened the span.
    pub fn marker<'a>(&self, text: &'a str) -> Option<&'a str> {
        match self {
            Span::Hashtag { range, tag } => Some(&text[range.start..tag.start]),
            Span::Mention { range, username } | Span::List { range, username, .. } => {
                Some(&text[range.start..username.start])
            }
            _ => None,
        }
    }

    fn captures(&self) -> Vec<Range<usize>> {
        match self {
            Span::Plain { .. } | Span::Url { .. } => Vec::new(),
            Span::Hashtag { tag, .. } => vec![tag.clone()],
            Span::Mention { username, .. } => vec![username.clone()],
            Span::List { username, list, .. } => vec![username.clone(), list.clone()],
        }
    }
}
