//! commit-docs: markdown documentation for every commit on a branch
//!
//! Writes one page per new commit of the configured branch into the output
//! directory, then rebuilds `index.md`. Exits non-zero only when the
//! repository or branch cannot be resolved.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use commit_docs::config::Config;
use commit_docs::generator::Generator;
use commit_docs::logging;
use commit_docs_git::GitCli;
use tracing::error;

fn main() -> ExitCode {
    let config = Config::parse();

    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    if let Err(e) = logging::init(&config) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: Config) -> anyhow::Result<()> {
    let source = GitCli::new(&config.repo, &config.branch, &config.remote);
    let stats = Generator::new(source, config)
        .run()
        .context("documentation generation failed")?;

    if stats.failures > 0 {
        tracing::warn!(
            failures = stats.failures,
            "Some commits could not be documented"
        );
    }
    Ok(())
}
