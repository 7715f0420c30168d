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

/// Maximum number of characters captured for a mention username.
///
/// Characters past this limit are not an error; they remain plain text directly
/// after the closed anchor (`@username9012345678901` links the first twenty).
pub const MAX_USERNAME_LENGTH: usize = 20;

/// Maximum number of characters captured for the list slug of `@user/list`.
///
/// Like usernames, slugs longer than this are truncated and the remainder is
/// left as plain text.
pub const MAX_LIST_NAME_LENGTH: usize = 80;

/// Maximum rendered length of a URL anchor body, ellipsis included.
///
/// URLs with more characters than this are displayed as a prefix of
/// `MAX_URL_DISPLAY_LENGTH - ELLIPSIS.len()` characters followed by [`ELLIPSIS`].
pub const MAX_URL_DISPLAY_LENGTH: usize = 30;

/// Marker appended to truncated URL display text.
pub const ELLIPSIS: &str = "...";

/// Scheme prepended to the href of URLs matched without one (`www.example.com`).
pub const DEFAULT_SCHEME: &str = "http://";

/// Default link target prefix for mentions and lists.
pub const DEFAULT_MENTION_BASE_URL: &str = "http://twitter.com/";

/// Default link target prefix for hashtags. The encoded `#` and tag are appended.
pub const DEFAULT_HASHTAG_SEARCH_URL: &str = "http://search.twitter.com/search?q=";
