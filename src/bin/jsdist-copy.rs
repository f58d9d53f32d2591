use anyhow::Result;
use jsdist::dist::{init_tracing, run_build, BuildConfig, ConsoleReporter};
use std::process::ExitCode;

/// Plain-copy build: same artifacts as `jsdist`, without minification
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    init_tracing();

    let root = std::env::current_dir()?;
    let config = BuildConfig::for_project(&root).without_minify();
    Ok(run_build(&config, &ConsoleReporter::new()).await)
}
