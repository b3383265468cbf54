// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Interactive reconciliation protocol.
//!
//! When a ".zshrc" already exists at the install target, the installer
//! suspends on exactly one question and lets the user pick one of three
//! ways forward. This module models that exchange: the [`Decision`] domain
//! type, the [`Prompter`] seam through which the question is asked, and the
//! terminal-backed implementation the binary uses.
//!
//! # Reply Format
//!
//! The user answers with a single character out of "a", "b", or "c". The
//! match is case-insensitive, and surrounding whitespace is ignored.
//! Anything else is an unrecognized choice, which ends the run. There is no
//! retry loop, so the user has to re-invoke the installer to try again.

use std::str::FromStr;

use inquire::Text;

/// User's answer to the existing-file reconciliation prompt.
///
/// Exists only for the duration of one prompt. Never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Keep whatever the user salvaged by hand, then copy the new file over
    /// the old one.
    Overwrite,

    /// Delete the existing file first, then copy the new file into place.
    DeleteThenInstall,

    /// Leave the existing file exactly as it was found.
    Cancel,
}

impl FromStr for Decision {
    type Err = Error;

    fn from_str(reply: &str) -> Result<Self> {
        match reply.trim().to_lowercase().as_str() {
            "a" => Ok(Self::Overwrite),
            "b" => Ok(Self::DeleteThenInstall),
            "c" => Ok(Self::Cancel),
            _ => Err(Error::InvalidChoice {
                reply: reply.into(),
            }),
        }
    }
}

/// Layer of indirection for asking the user questions.
///
/// The installer blocks on a single request/response exchange over a text
/// channel. Routing it through this trait lets tests swap the terminal out
/// for a scripted reply.
pub trait Prompter {
    /// Ask one question, and block until one line of reply arrives.
    ///
    /// Returns the reply verbatim. Interpreting it is the caller's problem.
    ///
    /// # Errors
    ///
    /// - Return [`Error::Ask`] if the reply cannot be obtained.
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Prompter backed by the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    /// Construct new terminal prompter.
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        Ok(Text::new(question).prompt()?)
    }
}

/// All possible error types for the reconciliation prompt.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reply does not match any offered choice.
    #[error("unrecognized choice {reply:?}, expected one of \"a\", \"b\", or \"c\"")]
    InvalidChoice { reply: String },

    /// Prompt channel failed before a reply arrived.
    #[error(transparent)]
    Ask(#[from] inquire::InquireError),
}

/// Friendly result alias :3
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use simple_test_case::test_case;

    #[test_case("a", Decision::Overwrite; "lowercase overwrite")]
    #[test_case("A", Decision::Overwrite; "uppercase overwrite")]
    #[test_case("b", Decision::DeleteThenInstall; "lowercase delete")]
    #[test_case("B", Decision::DeleteThenInstall; "uppercase delete")]
    #[test_case("c", Decision::Cancel; "lowercase cancel")]
    #[test_case("C", Decision::Cancel; "uppercase cancel")]
    #[test_case("  b\n", Decision::DeleteThenInstall; "surrounding whitespace")]
    #[test]
    fn decision_parses_offered_choices(reply: &str, expect: Decision) {
        assert_eq!(reply.parse::<Decision>().unwrap(), expect);
    }

    #[test_case(""; "empty reply")]
    #[test_case("d"; "unknown letter")]
    #[test_case("ab"; "more than one letter")]
    #[test_case("yes"; "word reply")]
    #[test]
    fn decision_rejects_everything_else(reply: &str) {
        let result = reply.parse::<Decision>();
        assert!(matches!(result, Err(Error::InvalidChoice { .. })));
    }

    #[test]
    fn invalid_choice_preserves_raw_reply() {
        let result = "q\n".parse::<Decision>();
        match result {
            Err(Error::InvalidChoice { reply }) => assert_eq!(reply, "q\n"),
            _ => panic!("expected unrecognized choice"),
        }
    }
}
