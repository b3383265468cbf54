// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Installer flow.
//!
//! One run of the installer produces a final state where the target
//! ".zshrc" holds the source file's contents, unless the user explicitly
//! cancels. A missing target is the easy case: copy the source into place
//! and report success. An existing target engages the user in a three-way
//! [`Decision`]: copy over it, delete it and then copy, or walk away
//! without touching anything.
//!
//! # Source Files
//!
//! The two branches read from different sources. A fresh install copies the
//! ".zshrc" bundled alongside the installer binary, while both
//! reconciliation branches copy the ".zshrc" found in the current working
//! directory. The [`Installer`] takes both paths up front, and the caller
//! decides where each one points.
//!
//! # Failure Semantics
//!
//! Every filesystem fault ends the run immediately. Nothing is retried, and
//! no partial state is rolled back: if the delete branch removes the target
//! and the copy after it fails, the target stays absent.

use crate::{
    path::ZSHRC_NAME,
    prompt::{Decision, Prompter},
};

use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{info, instrument, warn};

/// Installer for the Zenfull shell configuration.
///
/// Copies a source ".zshrc" to a target path, reconciling with any file
/// already sitting at the target through one interactive prompt.
pub struct Installer<P>
where
    P: Prompter,
{
    fresh_source: PathBuf,
    reconcile_source: PathBuf,
    target: PathBuf,
    prompter: P,
}

impl<P> Installer<P>
where
    P: Prompter,
{
    /// Construct new installer.
    ///
    /// The `fresh_source` feeds installs onto a clean target, while the
    /// `reconcile_source` feeds both branches that replace an existing
    /// target.
    pub fn new(
        fresh_source: impl Into<PathBuf>,
        reconcile_source: impl Into<PathBuf>,
        target: impl Into<PathBuf>,
        prompter: P,
    ) -> Self {
        Self {
            fresh_source: fresh_source.into(),
            reconcile_source: reconcile_source.into(),
            target: target.into(),
            prompter,
        }
    }

    /// Check if a file already exists at the install target.
    ///
    /// Side-effect free.
    pub fn target_exists(&self) -> bool {
        self.target.exists()
    }

    /// Install the shell configuration.
    ///
    /// Copies the source ".zshrc" straight into place when the target does
    /// not exist yet. Otherwise asks the user to pick a [`Decision`], and
    /// acts on it.
    ///
    /// # Errors
    ///
    /// - Return [`Error::CopyFile`] if the source cannot be copied to the
    ///   target.
    /// - Return [`Error::RemoveFile`] if the existing target cannot be
    ///   deleted.
    /// - Return [`Error::Prompt`] if the reply cannot be obtained, or does
    ///   not match any offered choice.
    #[instrument(skip(self), level = "debug")]
    pub fn install(&mut self) -> Result<Outcome> {
        info!("installing Zenfull shell configuration");

        if self.target_exists() {
            return self.reconcile_existing();
        }

        info!("no existing {ZSHRC_NAME} file found");
        info!("copying new {ZSHRC_NAME} to {}", self.target.display());
        self.copy_into_place(&self.fresh_source)?;
        info!("installation complete");

        Ok(Outcome::Installed)
    }

    /// Reconcile with a ".zshrc" already sitting at the target.
    ///
    /// Presents the three options, blocks for one reply, and acts on the
    /// parsed [`Decision`]. An unrecognized reply is terminal for the run.
    fn reconcile_existing(&mut self) -> Result<Outcome> {
        warn!(
            "a {ZSHRC_NAME} file already exists at {}",
            self.target.display()
        );
        info!("if you don't want to lose any data, move your variables and declarations to the new file first");
        info!("  a) I've moved the data to the new file");
        info!("  b) Delete the existing file and add the new one");
        info!("  c) Cancel");

        let reply = self.prompter.ask("Enter your choice (a/b/c)")?;
        match reply.parse::<Decision>()? {
            Decision::Overwrite => {
                info!("copying new {ZSHRC_NAME} to {}", self.target.display());
                self.copy_into_place(&self.reconcile_source)?;
                info!("done, your {ZSHRC_NAME} has been updated");
                Ok(Outcome::Installed)
            }
            Decision::DeleteThenInstall => {
                warn!("deleting existing {ZSHRC_NAME}");
                fs::remove_file(&self.target).map_err(|err| Error::RemoveFile {
                    source: err,
                    path: self.target.clone(),
                })?;
                info!("creating new {ZSHRC_NAME}");
                self.copy_into_place(&self.reconcile_source)?;
                info!("done, new {ZSHRC_NAME} has been created");
                Ok(Outcome::Installed)
            }
            Decision::Cancel => {
                info!("installation cancelled, no changes made");
                Ok(Outcome::Cancelled)
            }
        }
    }

    /// Copy a source file over the install target.
    ///
    /// Plain copy semantics. Whatever the target held before is gone.
    fn copy_into_place(&self, source: &Path) -> Result<()> {
        fs::copy(source, &self.target).map_err(|err| Error::CopyFile {
            source: err,
            from: source.to_path_buf(),
            to: self.target.clone(),
        })?;

        Ok(())
    }
}

/// Final state of one installer run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Target now holds the source file's contents.
    Installed,

    /// User backed out. Target left exactly as it was found.
    Cancelled,
}

/// All possible error types for an installer run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Source file cannot be copied over the target.
    #[error("failed to copy {} to {}", from.display(), to.display())]
    CopyFile {
        #[source]
        source: std::io::Error,
        from: PathBuf,
        to: PathBuf,
    },

    /// Existing target file cannot be deleted.
    #[error("failed to delete {}", path.display())]
    RemoveFile {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// Reconciliation prompt failed, or got an unrecognized reply.
    #[error(transparent)]
    Prompt(#[from] crate::prompt::Error),
}

/// Friendly result alias :3
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt;

    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use sealed_test::prelude::*;
    use std::fs::{read_to_string, write};

    /// Prompter that replays a canned reply instead of touching a terminal.
    struct ScriptedPrompter {
        reply: &'static str,
    }

    impl Prompter for ScriptedPrompter {
        fn ask(&mut self, _question: &str) -> prompt::Result<String> {
            Ok(self.reply.into())
        }
    }

    const BUNDLED: &str = indoc! {r#"
        # zenfull
        export ZENFULL_BUNDLED=1
    "#};

    const WORKING: &str = indoc! {r#"
        # zenfull
        export ZENFULL_WORKING=1
    "#};

    const EXISTING: &str = indoc! {r#"
        export PATH="$HOME/bin:$PATH"
        alias gs='git status'
    "#};

    fn installer(reply: &'static str) -> Installer<ScriptedPrompter> {
        Installer::new(
            "bundled.zshrc",
            "working.zshrc",
            "home.zshrc",
            ScriptedPrompter { reply },
        )
    }

    #[sealed_test]
    fn fresh_install_copies_bundled_source() -> anyhow::Result<()> {
        write("bundled.zshrc", BUNDLED)?;
        write("working.zshrc", WORKING)?;

        let outcome = installer("").install()?;

        assert_eq!(outcome, Outcome::Installed);
        assert_eq!(read_to_string("home.zshrc")?, BUNDLED);

        Ok(())
    }

    #[sealed_test]
    fn overwrite_reply_copies_working_source() -> anyhow::Result<()> {
        write("bundled.zshrc", BUNDLED)?;
        write("working.zshrc", WORKING)?;
        write("home.zshrc", EXISTING)?;

        let outcome = installer("a").install()?;

        assert_eq!(outcome, Outcome::Installed);
        assert_eq!(read_to_string("home.zshrc")?, WORKING);

        Ok(())
    }

    #[sealed_test]
    fn delete_reply_replaces_target_with_working_source() -> anyhow::Result<()> {
        write("bundled.zshrc", BUNDLED)?;
        write("working.zshrc", WORKING)?;
        write("home.zshrc", EXISTING)?;

        let outcome = installer("b").install()?;

        assert_eq!(outcome, Outcome::Installed);
        assert_eq!(read_to_string("home.zshrc")?, WORKING);

        Ok(())
    }

    #[sealed_test]
    fn delete_reply_is_idempotent_across_runs() -> anyhow::Result<()> {
        write("working.zshrc", WORKING)?;
        write("home.zshrc", EXISTING)?;

        let mut once = installer("b");
        once.install()?;
        let after_once = read_to_string("home.zshrc")?;

        let mut twice = installer("b");
        twice.install()?;
        let after_twice = read_to_string("home.zshrc")?;

        assert_eq!(after_once, after_twice);

        Ok(())
    }

    #[sealed_test]
    fn cancel_reply_leaves_target_untouched() -> anyhow::Result<()> {
        write("working.zshrc", WORKING)?;
        write("home.zshrc", EXISTING)?;

        let outcome = installer("c").install()?;

        assert_eq!(outcome, Outcome::Cancelled);
        assert_eq!(read_to_string("home.zshrc")?, EXISTING);

        Ok(())
    }

    #[sealed_test]
    fn unrecognized_reply_fails_without_touching_target() -> anyhow::Result<()> {
        write("working.zshrc", WORKING)?;
        write("home.zshrc", EXISTING)?;

        let result = installer("q").install();

        assert!(matches!(
            result,
            Err(Error::Prompt(prompt::Error::InvalidChoice { .. }))
        ));
        assert_eq!(read_to_string("home.zshrc")?, EXISTING);

        Ok(())
    }

    #[sealed_test]
    fn fresh_install_fails_when_source_is_missing() {
        let result = installer("").install();

        assert!(matches!(result, Err(Error::CopyFile { .. })));
        assert!(!Path::new("home.zshrc").exists());
    }

    #[sealed_test]
    fn delete_branch_leaves_target_absent_when_copy_fails() -> anyhow::Result<()> {
        write("home.zshrc", EXISTING)?;

        let result = installer("b").install();

        assert!(matches!(result, Err(Error::CopyFile { .. })));
        assert!(!Path::new("home.zshrc").exists());

        Ok(())
    }
}
