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

//! Character classification for entity recognition.
//!
//! Every predicate here is a pure, total function over a single code point.
//! Membership that cannot be expressed with the standard library character
//! properties is kept in static, sorted range tables so the policy for each
//! script block is explicit and testable on its own.

use crate::span::SpanKind;

/// Inclusive code point range.
type CharRange = (char, char);

/// Punctuation blocks that terminate domains and URL paths.
///
/// Covers the Latin-1 quotation and inversion marks, General Punctuation,
/// CJK Symbols and Punctuation, CJK Compatibility Forms and the fullwidth
/// forms of ASCII punctuation.
static PUNCTUATION: &[CharRange] = &[
    ('\u{00A1}', '\u{00A1}'),
    ('\u{00AB}', '\u{00AB}'),
    ('\u{00BB}', '\u{00BB}'),
    ('\u{00BF}', '\u{00BF}'),
    ('\u{2000}', '\u{206F}'),
    ('\u{3000}', '\u{303F}'),
    ('\u{FE30}', '\u{FE4F}'),
    ('\u{FF01}', '\u{FF0F}'),
    ('\u{FF1A}', '\u{FF20}'),
    ('\u{FF3B}', '\u{FF40}'),
    ('\u{FF5B}', '\u{FF65}'),
];

/// Syllabic CJK scripts which never continue a hashtag.
///
/// `#hashtagの` tags `hashtag` and leaves `の` as text. Ideographs are not
/// listed and remain valid hashtag characters.
static CJK_SYLLABIC: &[CharRange] = &[
    ('\u{1100}', '\u{11FF}'), // Hangul Jamo
    ('\u{3040}', '\u{309F}'), // Hiragana
    ('\u{30A0}', '\u{30FF}'), // Katakana
    ('\u{3130}', '\u{318F}'), // Hangul Compatibility Jamo
    ('\u{31F0}', '\u{31FF}'), // Katakana Phonetic Extensions
    ('\u{AC00}', '\u{D7AF}'), // Hangul Syllables
    ('\u{FF66}', '\u{FF9F}'), // Halfwidth Katakana
    ('\u{FFA0}', '\u{FFDF}'), // Halfwidth Hangul
];

/// Combining mark blocks accepted inside hashtags.
static COMBINING_MARKS: &[CharRange] = &[
    ('\u{0300}', '\u{036F}'),
    ('\u{1AB0}', '\u{1AFF}'),
    ('\u{1DC0}', '\u{1DFF}'),
    ('\u{20D0}', '\u{20FF}'),
    ('\u{FE20}', '\u{FE2F}'),
];

/// ASCII punctuation permitted inside a URL path or query.
const URL_PATH_PUNCTUATION: &str = "/.?=&%~+#@:,;'_-!*()[]{}$";

/// Characters stripped from the end of a URL match.
const URL_TRAILING_PUNCTUATION: &str = "?:}'.!,)]=;";

fn in_table(table: &[CharRange], c: char) -> bool {
    table
        .binary_search_by(|&(lo, hi)| {
            if hi < c {
                std::cmp::Ordering::Less
            } else if lo > c {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Returns true for whitespace and for listed punctuation blocks.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || in_table(PUNCTUATION, c)
}

/// Returns true if `c` may appear inside a domain label.
pub fn is_domain_char(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphanumeric() || c == '-'
    } else {
        !is_separator(c)
    }
}

/// Returns true if `c` may open a domain label. Labels never start with `-`.
pub fn is_domain_label_start(c: char) -> bool {
    c != '-' && is_domain_char(c)
}

/// Returns true if `c` may appear in a URL path or query.
///
/// `&` is listed here but the scanner only accepts it once a `?` has been seen.
pub fn is_url_path_char(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphanumeric() || URL_PATH_PUNCTUATION.contains(c)
    } else {
        !is_separator(c)
    }
}

/// Returns true for sentence punctuation that never ends a URL.
pub fn is_url_trailing_punctuation(c: char) -> bool {
    URL_TRAILING_PUNCTUATION.contains(c)
}

/// Returns true if `c` may appear in a hashtag.
pub fn is_hashtag_char(c: char) -> bool {
    (c.is_alphanumeric() || c == '_' || in_table(COMBINING_MARKS, c))
        && !in_table(CJK_SYLLABIC, c)
}

/// Returns true if `c` may appear in a username.
pub fn is_username_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns true if `c` may appear in a list slug.
pub fn is_list_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Returns true if `c` opens a mention (`@` or fullwidth `＠`).
pub fn is_mention_marker(c: char) -> bool {
    c == '@' || c == '\u{FF20}'
}

/// Returns true if `c` opens a hashtag (`#` or fullwidth `＃`).
pub fn is_hashtag_marker(c: char) -> bool {
    c == '#' || c == '\u{FF03}'
}

/// Decides whether an entity of `kind` may start directly after `prev`.
///
/// `prev` is `None` at the start of the text. URLs and mentions only treat
/// ASCII word characters as glued on, so Japanese text may directly precede
/// them; hashtags reject any Unicode alphanumeric. Mentions and URLs are also
/// rejected after `/`, `=` and `!`, and hashtags after `&` so that character
/// references such as `&#nbsp;` are left alone.
pub fn is_word_boundary_before(kind: SpanKind, prev: Option<char>) -> bool {
    let Some(prev) = prev else {
        return true;
    };
    match kind {
        SpanKind::Url | SpanKind::Mention | SpanKind::List => {
            !(prev.is_ascii_alphanumeric() || matches!(prev, '_' | '/' | '=' | '!'))
        }
        SpanKind::Hashtag => !(prev.is_alphanumeric() || matches!(prev, '_' | '&')),
        SpanKind::Plain => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted_disjoint(table: &[CharRange]) {
        for &(lo, hi) in table {
            assert!(lo <= hi, "inverted range {:?}..={:?}", lo, hi);
        }
        for pair in table.windows(2) {
            assert!(pair[0].1 < pair[1].0, "overlap at {:?}", pair);
        }
    }

    #[test]
    fn test_tables_are_sorted_and_disjoint() {
        assert_sorted_disjoint(PUNCTUATION);
        assert_sorted_disjoint(CJK_SYLLABIC);
        assert_sorted_disjoint(COMBINING_MARKS);
    }

    #[test]
    fn test_in_table_edges() {
        assert!(in_table(CJK_SYLLABIC, '\u{3040}'));
        assert!(in_table(CJK_SYLLABIC, '\u{30FF}'));
        assert!(!in_table(CJK_SYLLABIC, '\u{3100}'));
        assert!(!in_table(CJK_SYLLABIC, 'a'));
        assert!(!in_table(&[], 'a'));
    }

    #[test]
    fn test_domain_chars() {
        assert!(is_domain_char('a'));
        assert!(is_domain_char('Z'));
        assert!(is_domain_char('7'));
        assert!(is_domain_char('-'));
        assert!(is_domain_char('✪'));
        assert!(!is_domain_char('_'));
        assert!(!is_domain_char('!'));
        assert!(!is_domain_char('.'));
        assert!(!is_domain_char(' '));
        assert!(!is_domain_char('\u{3000}'));
        assert!(!is_domain_char('。'));
        assert!(!is_domain_char('！'));
    }

    #[test]
    fn test_domain_label_start() {
        assert!(is_domain_label_start('w'));
        assert!(is_domain_label_start('1'));
        assert!(!is_domain_label_start('-'));
        assert!(!is_domain_label_start('.'));
    }

    #[test]
    fn test_url_path_chars() {
        for c in "/.?=&%~+#@:,;'_-".chars() {
            assert!(is_url_path_char(c), "{:?} should be a path char", c);
        }
        assert!(is_url_path_char('a'));
        assert!(is_url_path_char('ü'));
        assert!(!is_url_path_char(' '));
        assert!(!is_url_path_char('<'));
        assert!(!is_url_path_char('"'));
        assert!(!is_url_path_char('\u{3000}'));
    }

    #[test]
    fn test_url_trailing_punctuation() {
        for c in "?:}'.!,)]=;".chars() {
            assert!(is_url_trailing_punctuation(c));
        }
        assert!(!is_url_trailing_punctuation('/'));
        assert!(!is_url_trailing_punctuation('a'));
        assert!(!is_url_trailing_punctuation('&'));
    }

    #[test]
    fn test_hashtag_chars() {
        assert!(is_hashtag_char('a'));
        assert!(is_hashtag_char('0'));
        assert!(is_hashtag_char('_'));
        assert!(is_hashtag_char('ü'));
        assert!(is_hashtag_char('ä'));
        assert!(is_hashtag_char('\u{0301}'));
        assert!(is_hashtag_char('漢'));
        assert!(!is_hashtag_char('の'));
        assert!(!is_hashtag_char('カ'));
        assert!(!is_hashtag_char('한'));
        assert!(!is_hashtag_char('-'));
        assert!(!is_hashtag_char('!'));
        assert!(!is_hashtag_char('\u{3000}'));
    }

    #[test]
    fn test_username_and_list_chars() {
        assert!(is_username_char('a'));
        assert!(is_username_char('_'));
        assert!(is_username_char('9'));
        assert!(!is_username_char('-'));
        assert!(!is_username_char('ü'));
        assert!(is_list_char('-'));
        assert!(is_list_char('x'));
        assert!(!is_list_char('/'));
        assert!(!is_list_char(' '));
    }

    #[test]
    fn test_markers() {
        assert!(is_mention_marker('@'));
        assert!(is_mention_marker('＠'));
        assert!(!is_mention_marker('a'));
        assert!(is_hashtag_marker('#'));
        assert!(is_hashtag_marker('＃'));
        assert!(!is_hashtag_marker('@'));
    }

    #[test]
    fn test_mention_boundary() {
        assert!(is_word_boundary_before(SpanKind::Mention, None));
        assert!(is_word_boundary_before(SpanKind::Mention, Some(' ')));
        assert!(is_word_boundary_before(SpanKind::Mention, Some('.')));
        assert!(is_word_boundary_before(SpanKind::Mention, Some('&')));
        assert!(is_word_boundary_before(SpanKind::Mention, Some('あ')));
        assert!(is_word_boundary_before(SpanKind::Mention, Some('\u{3000}')));
        assert!(!is_word_boundary_before(SpanKind::Mention, Some('t')));
        assert!(!is_word_boundary_before(SpanKind::Mention, Some('5')));
        assert!(!is_word_boundary_before(SpanKind::Mention, Some('/')));
        assert!(!is_word_boundary_before(SpanKind::Mention, Some('=')));
        assert!(!is_word_boundary_before(SpanKind::Mention, Some('!')));
    }

    #[test]
    fn test_url_boundary() {
        assert!(is_word_boundary_before(SpanKind::Url, Some(':')));
        assert!(is_word_boundary_before(SpanKind::Url, Some('(')));
        assert!(is_word_boundary_before(SpanKind::Url, Some('る')));
        assert!(!is_word_boundary_before(SpanKind::Url, Some('=')));
        assert!(!is_word_boundary_before(SpanKind::Url, Some('/')));
        assert!(!is_word_boundary_before(SpanKind::Url, Some('!')));
        assert!(!is_word_boundary_before(SpanKind::Url, Some('x')));
    }

    #[test]
    fn test_hashtag_boundary() {
        assert!(is_word_boundary_before(SpanKind::Hashtag, None));
        assert!(is_word_boundary_before(SpanKind::Hashtag, Some('.')));
        assert!(is_word_boundary_before(SpanKind::Hashtag, Some('\u{3000}')));
        assert!(!is_word_boundary_before(SpanKind::Hashtag, Some('&')));
        assert!(!is_word_boundary_before(SpanKind::Hashtag, Some('t')));
        assert!(!is_word_boundary_before(SpanKind::Hashtag, Some('ü')));
        assert!(!is_word_boundary_before(SpanKind::Hashtag, Some('_')));
    }
}
