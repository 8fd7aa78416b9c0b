// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::{
    collections::HashMap,
    fmt::Display,
    sync::{Arc, OnceLock, Weak},
};

use crate::{
    error::PegError,
    matchresult::MatchResult,
    rule::{BoxedRule, Rule},
};

type RuleSlot = OnceLock<BoxedRule>;

/// A set of named rules.
///
/// Rules built by the factory functions form a tree, so a rule can not
/// contain itself. A `Grammar` hands out references by name which are
/// resolved when matching, this allows recursive rules such as nested
/// parentheses:
///
/// ```
/// use peg_rules::{builder::{character, optional, sequence}, Grammar};
///
/// let mut grammar = Grammar::new();
/// let nested = sequence(vec![
///     character('('),
///     optional(grammar.reference("nested")),
///     character(')'),
/// ]);
/// grammar.define("nested", nested)?;
///
/// let result = grammar.match_text("nested", "((()))")?;
/// assert_eq!(result.as_str(), "((()))");
/// # Ok::<(), peg_rules::PegError>(())
/// ```
///
/// Left recursive rules (e.g. `expr <- expr '+' term`) never terminate
/// and are not supported.
#[derive(Debug, Default)]
pub struct Grammar {
    slots: HashMap<String, Arc<RuleSlot>>,
}

/// A rule that delegates to a named rule of a `Grammar`.
///
/// It only keeps a weak handle to the named rule, the rule is owned by
/// the grammar. A reference that is never defined, or whose grammar has
/// been dropped, does not match anything.
#[derive(Debug)]
pub struct ReferenceRule {
    pub name: String,
    slot: Weak<RuleSlot>,
}

impl Grammar {
    pub fn new() -> Self {
        Grammar {
            slots: HashMap::new(),
        }
    }

    /// Get a rule referring to the rule named `name`,
    /// the named rule can be defined later.
    pub fn reference(&mut self, name: &str) -> BoxedRule {
        let slot = self.slots.entry(name.to_owned()).or_default();

        Box::new(ReferenceRule {
            name: name.to_owned(),
            slot: Arc::downgrade(slot),
        })
    }

    pub fn define(&mut self, name: &str, rule: BoxedRule) -> Result<(), PegError> {
        log::debug!("define rule {} <- {}", name, rule);

        let slot = self.slots.entry(name.to_owned()).or_default();
        slot.set(rule).map_err(|_| PegError::DuplicateRule(name.to_owned()))
    }

    /// Check that every referenced rule has been defined.
    pub fn check(&self) -> Result<(), PegError> {
        let mut undefined_names: Vec<&String> = self
            .slots
            .iter()
            .filter(|(_, slot)| slot.get().is_none())
            .map(|(name, _)| name)
            .collect();

        undefined_names.sort();

        match undefined_names.first() {
            Some(name) => Err(PegError::UndefinedRule((*name).to_owned())),
            None => Ok(()),
        }
    }

    pub fn rule(&self, name: &str) -> Option<&dyn Rule> {
        let rule = self.slots.get(name)?.get()?;
        Some(&**rule)
    }

    pub fn match_text(&self, name: &str, text: &str) -> Result<MatchResult, PegError> {
        let rule = self
            .rule(name)
            .ok_or_else(|| PegError::UndefinedRule(name.to_owned()))?;
        Ok(rule.match_text(text))
    }

    /// The names of the defined rules, in alphabetical order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .slots
            .iter()
            .filter(|(_, slot)| slot.get().is_some())
            .map(|(name, _)| name.as_str())
            .collect();

        names.sort();
        names
    }
}

impl Rule for ReferenceRule {
    fn match_at(&self, input: &[char], position: usize) -> MatchResult {
        let Some(slot) = self.slot.upgrade() else {
            log::trace!("rule {} belongs to a dropped grammar", self.name);
            return MatchResult::no_match();
        };

        match slot.get() {
            Some(rule) => rule.match_at(input, position),
            None => {
                log::trace!("rule {} is not defined", self.name);
                MatchResult::no_match()
            }
        }
    }
}

impl Display for ReferenceRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines: Vec<String> = self
            .names()
            .iter()
            .filter_map(|name| self.rule(name).map(|rule| format!("{} <- {}", name, rule)))
            .collect();

        f.write_str(&lines.join("\n"))
    }
}
