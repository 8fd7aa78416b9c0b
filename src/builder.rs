// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

//! Factory functions for building rules.
//!
//! Rules are assembled bottom-up, e.g.
//!
//! ```
//! use peg_rules::builder::{character, character_range, one_or_more, or, sequence};
//! use peg_rules::Rule;
//!
//! let identifier = sequence(vec![
//!     or(vec![character_range('a', 'z')?, character('_')])?,
//!     one_or_more(character_range('0', '9')?),
//! ]);
//!
//! assert_eq!(identifier.match_text("a42").as_str(), "a42");
//! # Ok::<(), peg_rules::PegError>(())
//! ```

use crate::{
    combinator::{
        AndRule, NotRule, OptionalRule, OrRule, RepetitionRule, RepetitionType, SequenceRule,
    },
    error::PegError,
    primitive::{CharRangeRule, CharRule, StringRule},
    rule::BoxedRule,
};

/// Matches one char within `low..=high`.
pub fn character_range(low: char, high: char) -> Result<BoxedRule, PegError> {
    Ok(Box::new(CharRangeRule::new(low, high)?))
}

pub fn character(c: char) -> BoxedRule {
    Box::new(CharRule::new(c))
}

pub fn string(s: &str) -> BoxedRule {
    Box::new(StringRule::new(s))
}

pub fn sequence(rules: Vec<BoxedRule>) -> BoxedRule {
    Box::new(SequenceRule::new(rules))
}

/// Ordered choice between `alternatives`, which must not be empty.
pub fn or(alternatives: Vec<BoxedRule>) -> Result<BoxedRule, PegError> {
    Ok(Box::new(OrRule::new(alternatives)?))
}

/// `a` followed by `b`, same as `sequence(vec![a, b])`.
pub fn and(a: BoxedRule, b: BoxedRule) -> BoxedRule {
    Box::new(AndRule::new(a, b))
}

pub fn not(rule: BoxedRule) -> BoxedRule {
    Box::new(NotRule::new(rule))
}

pub fn zero_or_more(rule: BoxedRule) -> BoxedRule {
    Box::new(RepetitionRule::new(rule, RepetitionType::ZeroOrMore))
}

pub fn one_or_more(rule: BoxedRule) -> BoxedRule {
    Box::new(RepetitionRule::new(rule, RepetitionType::OneOrMore))
}

pub fn optional(rule: BoxedRule) -> BoxedRule {
    Box::new(OptionalRule::new(rule))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        error::PegError,
        matchresult::MatchResult,
        rule::{BoxedRule, Rule},
    };

    use super::{
        and, character, character_range, not, one_or_more, optional, or, sequence, string,
        zero_or_more,
    };

    fn build_number() -> Result<BoxedRule, PegError> {
        // '-'? ('0' / '1'..'9' '0'..'9'*) ('.' '0'..'9'+)?
        let digit = || character_range('0', '9');

        let integer = or(vec![
            character('0'),
            and(character_range('1', '9')?, zero_or_more(digit()?)),
        ])?;

        let fraction = and(character('.'), one_or_more(digit()?));

        Ok(sequence(vec![
            optional(character('-')),
            integer,
            optional(fraction),
        ]))
    }

    #[test]
    fn test_builder_number() {
        let number = build_number().unwrap();

        assert_eq!(number.match_text("0").as_str(), "0");
        assert_eq!(number.match_text("-12.50").as_str(), "-12.50");
        assert_eq!(number.match_text("3.").as_str(), "3");
        assert_eq!(number.match_text("007").as_str(), "0");
        assert_eq!(number.match_text("-x"), MatchResult::no_match());
        assert_eq!(number.match_text(".5"), MatchResult::no_match());
    }

    #[test]
    fn test_builder_quoted_string() {
        // '"' (!'"' '\0'..MAX)* '"'
        let any_char = || character_range('\0', char::MAX);

        let quoted = sequence(vec![
            character('"'),
            zero_or_more(sequence(vec![not(character('"')), any_char().unwrap()])),
            character('"'),
        ]);

        assert_eq!(quoted.match_text(r#""abc" tail"#).as_str(), r#""abc""#);
        assert_eq!(quoted.match_text(r#""""#).as_str(), r#""""#);
        assert_eq!(quoted.match_text(r#""abc"#), MatchResult::no_match());
    }

    #[test]
    fn test_builder_keywords() {
        let keyword = or(vec![string("if"), string("in"), string("int")]).unwrap();

        assert_eq!(keyword.match_text("int").as_str(), "in");

        // a keyword must not be followed by a letter
        let keyword = sequence(vec![
            or(vec![string("int"), string("in"), string("if")]).unwrap(),
            not(character_range('a', 'z').unwrap()),
        ]);

        assert_eq!(keyword.match_text("in x").as_str(), "in");
        assert_eq!(keyword.match_text("int").as_str(), "int");
        assert_eq!(keyword.match_text("inside"), MatchResult::no_match());
    }

    #[test]
    fn test_builder_errors() {
        assert_eq!(
            character_range('9', '0').unwrap_err(),
            PegError::InvalidCharRange {
                low: '9',
                high: '0'
            }
        );

        assert_eq!(or(vec![]).unwrap_err(), PegError::EmptyChoice);

        // errors propagate through nested construction
        let build = || -> Result<BoxedRule, PegError> {
            Ok(one_or_more(or(vec![
                character('a'),
                character_range('z', 'b')?,
            ])?))
        };
        assert_eq!(
            build().unwrap_err(),
            PegError::InvalidCharRange {
                low: 'z',
                high: 'b'
            }
        );
    }
}
