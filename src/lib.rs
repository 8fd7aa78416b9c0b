// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

mod combinator;
mod error;
mod matchresult;
mod primitive;
mod rule;

pub mod builder;
pub mod grammar;
pub mod search;

pub use combinator::{
    AndRule, NotRule, OptionalRule, OrRule, RepetitionRule, RepetitionType, SequenceRule,
};
pub use error::PegError;
pub use grammar::{Grammar, ReferenceRule};
pub use matchresult::MatchResult;
pub use primitive::{CharRangeRule, CharRule, StringRule};
pub use rule::{BoxedRule, Rule};
