// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Path resolution utilities.
//!
//! Determine relevent path information for external files that need to be
//! interacted with, or managed in some way. For the installer that means
//! three things: the user's home directory, the ".zshrc" inside it that we
//! install into, and the two places a source ".zshrc" can come from.

use std::{
    env,
    io::{Error as IoError, ErrorKind},
    path::PathBuf,
};

/// Name of the shell configuration file this installer manages.
pub const ZSHRC_NAME: &str = ".zshrc";

/// Environment variables that may hold the home directory, in preference
/// order.
const HOME_VARS: [&str; 2] = ["HOME", "USERPROFILE"];

/// Determine absolute path to user's home directory.
///
/// Walks [`HOME_VARS`] in order, and takes the first variable that holds a
/// non-empty value. An empty value counts as absent. Does not check if the
/// path returned actually exists.
///
/// # Errors
///
/// - Return [`NoWayHome`] if home directory path cannot be determined.
pub fn home_dir() -> Result<PathBuf> {
    HOME_VARS
        .iter()
        .filter_map(|var| env::var_os(var))
        .find(|value| !value.is_empty())
        .map(PathBuf::from)
        .ok_or(NoWayHome)
}

/// Determine absolute path to the ".zshrc" being installed into.
///
/// This is the target of every run: [`home_dir`] joined with
/// [`ZSHRC_NAME`]. Does not check if the path returned actually exists.
///
/// # Errors
///
/// - Return [`NoWayHome`] if home directory path cannot be determined.
pub fn zshrc_path() -> Result<PathBuf> {
    home_dir().map(|home| home.join(ZSHRC_NAME))
}

/// Determine absolute path to the ".zshrc" shipped alongside the installer
/// binary.
///
/// Source for fresh installs. Does not check if the path returned actually
/// exists.
///
/// # Errors
///
/// - Return [`std::io::Error`] if the path to the installer binary itself
///   cannot be determined.
pub fn bundled_zshrc() -> std::io::Result<PathBuf> {
    let binary = env::current_exe()?;
    let dir = binary.parent().ok_or_else(|| {
        IoError::new(
            ErrorKind::NotFound,
            "installer binary has no parent directory",
        )
    })?;

    Ok(dir.join(ZSHRC_NAME))
}

/// Determine absolute path to the ".zshrc" in the current working
/// directory.
///
/// Source for reconciling an existing target. Does not check if the path
/// returned actually exists.
///
/// # Errors
///
/// - Return [`std::io::Error`] if the current working directory cannot be
///   determined.
pub fn working_zshrc() -> std::io::Result<PathBuf> {
    env::current_dir().map(|cwd| cwd.join(ZSHRC_NAME))
}

/// No way to determine user's home directory.
///
/// None of the variables in [`HOME_VARS`] held a usable value.
#[derive(Clone, Debug, thiserror::Error)]
#[error("cannot determine absolute path to user's home directory")]
pub struct NoWayHome;

/// Friendly result alias :3
pub type Result<T, E = NoWayHome> = std::result::Result<T, E>;
