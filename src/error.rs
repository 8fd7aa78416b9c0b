// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use thiserror::Error;

/// Errors raised while building rules.
///
/// A rule failing to match is never an error, it is reported by
/// a `MatchResult` whose `matched` is `false`.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum PegError {
    #[error("Invalid character range '{low}'..'{high}', the low bound is greater than the high bound.")]
    InvalidCharRange { low: char, high: char },

    #[error("Ordered choice requires at least one alternative.")]
    EmptyChoice,

    #[error("Rule \"{0}\" is already defined.")]
    DuplicateRule(String),

    #[error("Rule \"{0}\" is referenced but not defined.")]
    UndefinedRule(String),
}
