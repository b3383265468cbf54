// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use zenfull_install::{
    install::{Installer, Outcome},
    path,
    prompt::TerminalPrompter,
};

use anyhow::Result;
use clap::Parser;
use std::process::exit;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the Zenfull shell configuration into your home directory.
///
/// Takes no arguments. The run is fully determined by the environment and
/// by what already sits at "$HOME/.zshrc".
#[derive(Debug, Clone, Parser)]
#[command(about, override_usage = "zenfull-install", version)]
struct Cli {}

impl Cli {
    fn run(self) -> Result<Outcome> {
        let mut installer = Installer::new(
            path::bundled_zshrc()?,
            path::working_zshrc()?,
            path::zshrc_path()?,
            TerminalPrompter::new(),
        );

        Ok(installer.install()?)
    }
}

fn main() {
    let layer = fmt::layer().compact().with_target(false).without_time();
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();
    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .init();

    if let Err(error) = run() {
        error!("{error:?}");
        exit(1);
    }

    exit(0)
}

fn run() -> Result<Outcome> {
    Cli::parse().run()
}
