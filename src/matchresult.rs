// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

/// The outcome of one match attempt.
///
/// On success `content` is exactly the `length` characters of the input
/// starting at the attempted position. On failure `length` is 0 and
/// `content` is empty, see `MatchResult::no_match`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct MatchResult {
    pub matched: bool,
    pub length: usize, // the number of chars consumed
    pub content: String,
}

impl MatchResult {
    /// A successful result that consumed `content`.
    pub fn success(content: &[char]) -> Self {
        MatchResult {
            matched: true,
            length: content.len(),
            content: String::from_iter(content),
        }
    }

    /// A successful result for the chars `input[start..end]`.
    ///
    /// A span starting past the end of the input is necessarily empty.
    pub fn from_span(input: &[char], start: usize, end: usize) -> Self {
        match input.get(start..end) {
            Some(content) => MatchResult::success(content),
            None => MatchResult::empty(),
        }
    }

    /// A successful result that consumed nothing.
    pub fn empty() -> Self {
        MatchResult {
            matched: true,
            length: 0,
            content: String::new(),
        }
    }

    /// The canonical failure.
    pub fn no_match() -> Self {
        MatchResult {
            matched: false,
            length: 0,
            content: String::new(),
        }
    }

    pub fn is_match(&self) -> bool {
        self.matched
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MatchResult({}, {}, {})",
            self.length, self.content, self.matched
        )
    }
}
