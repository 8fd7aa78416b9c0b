// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

use crate::{error::PegError, matchresult::MatchResult, rule::Rule};

#[derive(Debug)]
pub struct CharRangeRule {
    pub start: char,
    pub end_included: char,
}

#[derive(Debug)]
pub struct CharRule {
    pub character: char,
}

#[derive(Debug)]
pub struct StringRule {
    pub chars: Vec<char>,
}

impl CharRangeRule {
    pub fn new(start: char, end_included: char) -> Result<Self, PegError> {
        if start > end_included {
            return Err(PegError::InvalidCharRange {
                low: start,
                high: end_included,
            });
        }

        Ok(CharRangeRule {
            start,
            end_included,
        })
    }
}

impl CharRule {
    pub fn new(character: char) -> Self {
        CharRule { character }
    }
}

impl StringRule {
    pub fn new(s: &str) -> Self {
        StringRule {
            chars: s.chars().collect(),
        }
    }
}

impl Rule for CharRangeRule {
    fn match_at(&self, input: &[char], position: usize) -> MatchResult {
        match input.get(position) {
            Some(c) if (self.start..=self.end_included).contains(c) => {
                MatchResult::success(&input[position..=position])
            }
            _ => MatchResult::no_match(),
        }
    }
}

impl Rule for CharRule {
    fn match_at(&self, input: &[char], position: usize) -> MatchResult {
        match input.get(position) {
            Some(c) if *c == self.character => MatchResult::success(&input[position..=position]),
            _ => MatchResult::no_match(),
        }
    }
}

impl Rule for StringRule {
    fn match_at(&self, input: &[char], position: usize) -> MatchResult {
        // all or nothing, a prefix at the end of the input does not count
        match input.get(position..) {
            Some(rest) if rest.starts_with(&self.chars) => {
                MatchResult::success(&rest[..self.chars.len()])
            }
            _ => MatchResult::no_match(),
        }
    }
}

fn write_char(f: &mut std::fmt::Formatter<'_>, c: char) -> std::fmt::Result {
    match c {
        '\t' => f.write_str("'\\t'"),
        '\r' => f.write_str("'\\r'"),
        '\n' => f.write_str("'\\n'"),
        '\'' => f.write_str("'\\''"),
        _ => write!(f, "'{}'", c),
    }
}

impl Display for CharRangeRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_char(f, self.start)?;
        f.write_str("..")?;
        write_char(f, self.end_included)
    }
}

impl Display for CharRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_char(f, self.character)
    }
}

impl Display for StringRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = String::from_iter(&self.chars);
        write!(f, "{:?}", s)
    }
}
