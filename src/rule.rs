// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::{Debug, Display};

use crate::matchresult::MatchResult;

pub type BoxedRule = Box<dyn Rule>;

/// A matching rule.
///
/// Rules hold no per-call state: the same rule can be matched any number
/// of times, against any input, from any number of threads.
///
/// `Display` renders the rule in PEG notation, e.g. `('a'..'h'+ / "xyz")`.
pub trait Rule: Debug + Display + Send + Sync {
    /// Match the rule against `input` starting at char index `position`.
    ///
    /// A `position` past the end of the input is allowed, rules that
    /// need to read a char simply fail there.
    fn match_at(&self, input: &[char], position: usize) -> MatchResult;

    /// Match the rule from the beginning of `text`.
    fn match_text(&self, text: &str) -> MatchResult {
        let chars: Vec<char> = text.chars().collect();
        let result = self.match_at(&chars, 0);
        log::trace!("{} on \"{}\": {}", self, text, result);
        result
    }
}
