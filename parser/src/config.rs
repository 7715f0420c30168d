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

use crate::consts::{
    DEFAULT_HASHTAG_SEARCH_URL, DEFAULT_MENTION_BASE_URL, ELLIPSIS, MAX_LIST_NAME_LENGTH,
    MAX_URL_DISPLAY_LENGTH, MAX_USERNAME_LENGTH,
};
use crate::result::{ConfigError, ConfigResult};

/// Parser configuration.
///
/// The entity toggles select which categories the scanner attempts; disabled
/// categories are left as plain text. Disabling `lists` while `mentions` stays
/// enabled makes `@user/list` a mention of `user` followed by plain `/list`.
/// Lists are only recognized while `mentions` is enabled too.
///
/// The defaults reproduce the classic twitter.com link targets and limits.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParserConfig {
    /// Recognize URLs
    pub urls: bool,
    /// Recognize `@username` mentions
    pub mentions: bool,
    /// Recognize `@username/list` references
    pub lists: bool,
    /// Recognize `#hashtag` tags
    pub hashtags: bool,
    /// Link target prefix for mentions and lists, followed by `username[/list]`
    pub mention_base_url: String,
    /// Link target prefix for hashtags, followed by the encoded `#tag`
    pub hashtag_search_url: String,
    /// Maximum username characters captured for a mention
    pub max_username_length: usize,
    /// Maximum slug characters captured for a list
    pub max_list_name_length: usize,
    /// Maximum rendered URL anchor body length, ellipsis included
    pub max_url_display_length: usize,
}

impl ParserConfig {
    /// Recognize every entity category
    pub fn all() -> ParserConfig {
        ParserConfig {
            urls: true,
            mentions: true,
            lists: true,
            hashtags: true,
            mention_base_url: DEFAULT_MENTION_BASE_URL.to_string(),
            hashtag_search_url: DEFAULT_HASHTAG_SEARCH_URL.to_string(),
            max_username_length: MAX_USERNAME_LENGTH,
            max_list_name_length: MAX_LIST_NAME_LENGTH,
            max_url_display_length: MAX_URL_DISPLAY_LENGTH,
        }
    }
    /// Recognize nothing; every text renders unchanged
    pub fn none() -> ParserConfig {
        ParserConfig {
            urls: false,
            mentions: false,
            lists: false,
            hashtags: false,
            ..ParserConfig::all()
        }
    }
    /// Recognize URLs only
    pub fn urls_only() -> ParserConfig {
        ParserConfig {
            urls: true,
            ..ParserConfig::none()
        }
    }
    /// Recognize mentions and lists only
    pub fn people_only() -> ParserConfig {
        ParserConfig {
            mentions: true,
            lists: true,
            ..ParserConfig::none()
        }
    }

    /// Replaces the link target prefix for mentions and lists.
    pub fn with_mention_base_url(mut self, url: impl Into<String>) -> ParserConfig {
        self.mention_base_url = url.into();
        self
    }

    /// Replaces the link target prefix for hashtags.
    pub fn with_hashtag_search_url(mut self, url: impl Into<String>) -> ParserConfig {
        self.hashtag_search_url = url.into();
        self
    }

    /// Checks that the configuration can produce well-formed output.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptyBaseUrl`] if a link target prefix is empty
    /// - [`ConfigError::ZeroLimit`] if a length limit is zero
    /// - [`ConfigError::DisplayLengthTooShort`] if the URL display length does
    ///   not exceed the ellipsis
    pub fn validate(&self) -> ConfigResult<()> {
        if self.mention_base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl {
                name: "mention_base_url",
            });
        }
        if self.hashtag_search_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl {
                name: "hashtag_search_url",
            });
        }
        if self.max_username_length == 0 {
            return Err(ConfigError::ZeroLimit {
                name: "max_username_length",
            });
        }
        if self.max_list_name_length == 0 {
            return Err(ConfigError::ZeroLimit {
                name: "max_list_name_length",
            });
        }
        if self.max_url_display_length <= ELLIPSIS.len() {
            return Err(ConfigError::DisplayLengthTooShort {
                length: self.max_url_display_length,
                ellipsis: ELLIPSIS.len(),
            });
        }
        Ok(())
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::all()
    }
}
