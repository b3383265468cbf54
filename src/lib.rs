// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Zenfull shell-configuration installer.
//!
//! Places the bundled ".zshrc" into the user's home directory. A run with
//! no prior ".zshrc" copies the bundled file straight into place. A run
//! that finds one already there hands the user a three-way decision: keep
//! their salvaged data and overwrite, delete the old file and replace it,
//! or cancel without touching anything.
//!
//! The library splits along three seams. [`path`] resolves where everything
//! lives, [`prompt`] models the one interactive exchange, and [`install`]
//! drives the copy and delete operations off the user's decision.

pub mod install;
pub mod path;
pub mod prompt;

pub use install::{Installer, Outcome};
pub use prompt::{Decision, Prompter, TerminalPrompter};
