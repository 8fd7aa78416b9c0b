// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::ops::Range;

use crate::rule::Rule;

/// A match found by scanning a text.
#[derive(Debug, PartialEq, Clone)]
pub struct Match {
    pub start: usize, // the char index (value included)
    pub end: usize,   // the char index (value excluded)
    pub value: String,
}

impl Match {
    pub fn new(start: usize, end: usize, value: &str) -> Self {
        Match {
            start,
            end,
            value: value.to_owned(),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn range(&self) -> Range<usize> {
        Range {
            start: self.start,
            end: self.end,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

/// Iterator over the successive, non-overlapping matches of a rule.
pub struct Matches<'a> {
    rule: &'a dyn Rule,
    chars: Vec<char>,
    last_position: usize,
}

impl<'a> Matches<'a> {
    fn new(rule: &'a dyn Rule, text: &str) -> Self {
        Matches {
            rule,
            chars: text.chars().collect(),
            last_position: 0,
        }
    }
}

impl Iterator for Matches<'_> {
    type Item = Match;

    fn next(&mut self) -> Option<Self::Item> {
        // an empty match is possible at the end of the text
        while self.last_position <= self.chars.len() {
            let start = self.last_position;
            let result = self.rule.match_at(&self.chars, start);

            if !result.matched {
                self.last_position += 1;
                continue;
            }

            let end = start + result.length;

            // step over empty matches, otherwise the scan would stall
            self.last_position = if result.length == 0 { end + 1 } else { end };

            return Some(Match {
                start,
                end,
                value: result.content,
            });
        }

        None
    }
}

pub fn find_iter<'a>(rule: &'a dyn Rule, text: &str) -> Matches<'a> {
    Matches::new(rule, text)
}

/// The first match of `rule` in `text`.
pub fn find(rule: &dyn Rule, text: &str) -> Option<Match> {
    find_iter(rule, text).next()
}

/// Whether `rule` matches the whole `text`.
pub fn is_full_match(rule: &dyn Rule, text: &str) -> bool {
    let result = rule.match_text(text);
    result.matched && result.length == text.chars().count()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::builder::{
        character, character_range, not, one_or_more, optional, or, sequence, string,
        zero_or_more,
    };

    use super::{find, find_iter, is_full_match, Match};

    #[test]
    fn test_search_find_iter() {
        let rule = character('a');
        let mut matches = find_iter(rule.as_ref(), "babbaa");

        assert_eq!(matches.next(), Some(Match::new(1, 2, "a")));
        assert_eq!(matches.next(), Some(Match::new(4, 5, "a")));
        assert_eq!(matches.next(), Some(Match::new(5, 6, "a")));
        assert_eq!(matches.next(), None);
    }

    #[test]
    fn test_search_find_iter_hex_color() {
        // '#' ('0'..'9' / 'a'..'f')+
        let rule = sequence(vec![
            character('#'),
            one_or_more(
                or(vec![
                    character_range('0', '9').unwrap(),
                    character_range('a', 'f').unwrap(),
                ])
                .unwrap(),
            ),
        ]);

        let text = "The color is #ffbb33 and the background is #bbdd99.";
        let values: Vec<String> = find_iter(rule.as_ref(), text)
            .map(|m| m.value)
            .collect();

        assert_eq!(values, vec!["#ffbb33", "#bbdd99"]);
    }

    #[test]
    fn test_search_find_iter_with_utf8() {
        let rule = string("文");
        let mut matches = find_iter(rule.as_ref(), "abc中文字符文字🌏人文");

        assert_eq!(matches.next(), Some(Match::new(4, 5, "文")));
        assert_eq!(matches.next(), Some(Match::new(7, 8, "文")));
        assert_eq!(matches.next(), Some(Match::new(11, 12, "文")));
        assert_eq!(matches.next(), None);
    }

    #[test]
    fn test_search_find_iter_empty_matches() {
        let rule = zero_or_more(character('a'));
        let mut matches = find_iter(rule.as_ref(), "baa");

        assert_eq!(matches.next(), Some(Match::new(0, 0, "")));
        assert_eq!(matches.next(), Some(Match::new(1, 3, "aa")));
        assert_eq!(matches.next(), Some(Match::new(3, 3, "")));
        assert_eq!(matches.next(), None);
    }

    #[test]
    fn test_search_find() {
        let rule = sequence(vec![character('a'), optional(character('b')), character('c')]);

        let m = find(rule.as_ref(), "ababccbacabc").unwrap();
        assert_eq!(m.as_str(), "abc");
        assert_eq!(m.range(), 2..5);
        assert_eq!(m.len(), 3);

        assert_eq!(find(rule.as_ref(), "xyz"), None);
    }

    #[test]
    fn test_search_is_full_match() {
        let digits = one_or_more(character_range('0', '9').unwrap());

        assert!(is_full_match(digits.as_ref(), "2024"));
        assert!(!is_full_match(digits.as_ref(), "2024a"));
        assert!(!is_full_match(digits.as_ref(), ""));

        let nothing = not(character('x'));
        assert!(is_full_match(nothing.as_ref(), ""));
        assert!(!is_full_match(nothing.as_ref(), "a"));
    }
}
