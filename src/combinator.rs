// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

use crate::{
    error::PegError,
    matchresult::MatchResult,
    rule::{BoxedRule, Rule},
};

#[derive(Debug)]
pub struct SequenceRule {
    pub rules: Vec<BoxedRule>,
}

/// Sequence of exactly two rules.
///
/// Note that this is NOT a lookahead, `b` must match right after `a`
/// and both contents are consumed.
#[derive(Debug)]
pub struct AndRule {
    pub left: BoxedRule,
    pub right: BoxedRule,
}

/// Ordered choice, the first alternative that matches wins.
#[derive(Debug)]
pub struct OrRule {
    pub alternatives: Vec<BoxedRule>,
}

/// Negative lookahead, never consumes input.
#[derive(Debug)]
pub struct NotRule {
    pub rule: BoxedRule,
}

#[derive(Debug)]
pub struct RepetitionRule {
    pub rule: BoxedRule,
    pub repetition_type: RepetitionType,
}

#[derive(Debug)]
pub struct OptionalRule {
    pub rule: BoxedRule,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RepetitionType {
    ZeroOrMore,
    OneOrMore,
}

impl SequenceRule {
    pub fn new(rules: Vec<BoxedRule>) -> Self {
        SequenceRule { rules }
    }
}

impl AndRule {
    pub fn new(left: BoxedRule, right: BoxedRule) -> Self {
        AndRule { left, right }
    }
}

impl OrRule {
    pub fn new(alternatives: Vec<BoxedRule>) -> Result<Self, PegError> {
        if alternatives.is_empty() {
            return Err(PegError::EmptyChoice);
        }

        Ok(OrRule { alternatives })
    }
}

impl NotRule {
    pub fn new(rule: BoxedRule) -> Self {
        NotRule { rule }
    }
}

impl RepetitionRule {
    pub fn new(rule: BoxedRule, repetition_type: RepetitionType) -> Self {
        RepetitionRule {
            rule,
            repetition_type,
        }
    }

    fn min_times(&self) -> usize {
        match self.repetition_type {
            RepetitionType::ZeroOrMore => 0,
            RepetitionType::OneOrMore => 1,
        }
    }
}

impl OptionalRule {
    pub fn new(rule: BoxedRule) -> Self {
        OptionalRule { rule }
    }
}

impl Rule for SequenceRule {
    fn match_at(&self, input: &[char], position: usize) -> MatchResult {
        let mut current_position = position;

        for rule in &self.rules {
            let result = rule.match_at(input, current_position);
            if !result.matched {
                return MatchResult::no_match();
            }
            current_position += result.length;
        }

        MatchResult::from_span(input, position, current_position)
    }
}

impl Rule for AndRule {
    fn match_at(&self, input: &[char], position: usize) -> MatchResult {
        let left_result = self.left.match_at(input, position);
        if !left_result.matched {
            return MatchResult::no_match();
        }

        let right_result = self.right.match_at(input, position + left_result.length);
        if !right_result.matched {
            return MatchResult::no_match();
        }

        MatchResult {
            matched: true,
            length: left_result.length + right_result.length,
            content: left_result.content + &right_result.content,
        }
    }
}

impl Rule for OrRule {
    fn match_at(&self, input: &[char], position: usize) -> MatchResult {
        self.alternatives
            .iter()
            .map(|rule| rule.match_at(input, position))
            .find(|result| result.matched)
            .unwrap_or_else(MatchResult::no_match)
    }
}

impl Rule for NotRule {
    fn match_at(&self, input: &[char], position: usize) -> MatchResult {
        if self.rule.match_at(input, position).matched {
            MatchResult::no_match()
        } else {
            MatchResult::empty()
        }
    }
}

impl Rule for RepetitionRule {
    fn match_at(&self, input: &[char], position: usize) -> MatchResult {
        let mut current_position = position;
        let mut times: usize = 0;

        // greedy, and the consumed chars are never given back
        loop {
            let result = self.rule.match_at(input, current_position);
            if !result.matched {
                break;
            }

            times += 1;
            current_position += result.length;

            // a rule that matches without consuming would match forever
            if result.length == 0 {
                break;
            }
        }

        if times < self.min_times() {
            MatchResult::no_match()
        } else {
            MatchResult::from_span(input, position, current_position)
        }
    }
}

impl Rule for OptionalRule {
    fn match_at(&self, input: &[char], position: usize) -> MatchResult {
        let result = self.rule.match_at(input, position);
        if result.matched {
            result
        } else {
            MatchResult::empty()
        }
    }
}

impl Display for SequenceRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s: Vec<String> = self.rules.iter().map(|r| r.to_string()).collect();
        write!(f, "({})", s.join(" "))
    }
}

impl Display for AndRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {})", self.left, self.right)
    }
}

impl Display for OrRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s: Vec<String> = self.alternatives.iter().map(|r| r.to_string()).collect();
        write!(f, "({})", s.join(" / "))
    }
}

impl Display for NotRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "!{}", self.rule)
    }
}

impl Display for RepetitionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rule, self.repetition_type)
    }
}

impl Display for RepetitionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepetitionType::ZeroOrMore => f.write_str("*"),
            RepetitionType::OneOrMore => f.write_str("+"),
        }
    }
}

impl Display for OptionalRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}?", self.rule)
    }
}
