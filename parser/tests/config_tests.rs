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

//! Tests for parser configuration and its effect on rendering

use twp_parser::{ConfigError, Parser, ParserConfig, SpanKind};

const SAMPLE: &str = "@alice/friends @bob http://example.com/path #rust";

fn kinds(parser: &Parser, text: &str) -> Vec<SpanKind> {
    parser.spans(text).iter().map(|span| span.kind()).collect()
}

#[test]
fn test_new_accepts_presets() {
    for config in [
        ParserConfig::all(),
        ParserConfig::none(),
        ParserConfig::urls_only(),
        ParserConfig::people_only(),
    ] {
        let parser = Parser::new(config.clone()).expect("preset should validate");
        assert_eq!(parser.config(), &config);
    }
}

#[test]
fn test_new_rejects_invalid_config() {
    let config = ParserConfig {
        max_username_length: 0,
        ..ParserConfig::default()
    };
    assert_eq!(
        Parser::new(config),
        Err(ConfigError::ZeroLimit {
            name: "max_username_length"
        })
    );

    let config = ParserConfig {
        max_url_display_length: 3,
        ..ParserConfig::default()
    };
    let error = Parser::new(config).expect_err("display length equal to the ellipsis");
    assert_eq!(
        error.to_string(),
        "URL display length 3 must be longer than the ellipsis (3 characters)"
    );
}

#[test]
fn test_none_leaves_text_untouched() {
    let parser = Parser::new(ParserConfig::none()).expect("valid config");
    let result = parser.parse(SAMPLE);
    assert_eq!(result.html(), SAMPLE);
    assert_eq!(result.entity_count(), 0);
    assert_eq!(result.reply(), None);
    assert_eq!(kinds(&parser, SAMPLE), vec![SpanKind::Plain]);
}

#[test]
fn test_urls_only() {
    let parser = Parser::new(ParserConfig::urls_only()).expect("valid config");
    let result = parser.parse(SAMPLE);
    assert_eq!(result.urls(), ["http://example.com/path"]);
    assert!(result.users().is_empty());
    assert!(result.lists().is_empty());
    assert!(result.tags().is_empty());
    assert_eq!(result.reply(), None);
    assert_eq!(
        result.html(),
        "@alice/friends @bob <a href=\"http://example.com/path\">http://example.com/path</a> #rust"
    );
}

#[test]
fn test_people_only() {
    let parser = Parser::new(ParserConfig::people_only()).expect("valid config");
    let result = parser.parse(SAMPLE);
    assert!(result.urls().is_empty());
    assert!(result.tags().is_empty());
    assert_eq!(result.users(), ["bob"]);
    assert_eq!(
        result.lists(),
        [("alice".to_string(), "friends".to_string())]
    );
    assert_eq!(result.reply(), Some("alice"));
}

#[test]
fn test_lists_disabled_falls_back_to_mention() {
    let config = ParserConfig {
        lists: false,
        ..ParserConfig::default()
    };
    let parser = Parser::new(config).expect("valid config");
    let result = parser.parse("@alice/friends");
    assert_eq!(result.users(), ["alice"]);
    assert!(result.lists().is_empty());
    assert_eq!(
        result.html(),
        "<a href=\"http://twitter.com/alice\">@alice</a>/friends"
    );
}

#[test]
fn test_custom_base_urls() {
    let config = ParserConfig::default()
        .with_mention_base_url("https://social.example/")
        .with_hashtag_search_url("https://social.example/search?src=tag&q=");
    let parser = Parser::new(config).expect("valid config");

    let result = parser.parse("@alice #rust");
    assert_eq!(
        result.html(),
        "<a href=\"https://social.example/alice\">@alice</a> \
         <a href=\"https://social.example/search?src=tag&amp;q=%23rust\">#rust</a>"
    );

    let result = parser.parse("@alice/friends");
    assert_eq!(
        result.html(),
        "<a href=\"https://social.example/alice/friends\">@alice/friends</a>"
    );
}

#[test]
fn test_custom_limits() {
    let config = ParserConfig {
        max_username_length: 5,
        max_list_name_length: 3,
        max_url_display_length: 12,
        ..ParserConfig::default()
    };
    let parser = Parser::new(config).expect("valid config");

    let result = parser.parse("@abcdefgh");
    assert_eq!(result.users(), ["abcde"]);
    assert_eq!(
        result.html(),
        "<a href=\"http://twitter.com/abcde\">@abcde</a>fgh"
    );

    let result = parser.parse("@alice/friends");
    assert_eq!(
        result.lists(),
        [("alice".to_string(), "fri".to_string())]
    );

    let result = parser.parse("http://example.com/path");
    assert_eq!(
        result.html(),
        "<a href=\"http://example.com/path\">http://ex...</a>"
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_config_serde_fields() {
    fn assert_serde<T: serde::Serialize + for<'de> serde::Deserialize<'de>>() {}
    assert_serde::<ParserConfig>();
    assert_serde::<twp_parser::ParseResult>();
}
