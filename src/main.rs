//! Command-line entry point for `testselect`.
//!
//! Usage: `testselect [options] <dir> ...`
//!
//! Options (each repeatable, each taking one value):
//! - `-s <className>`: select a specific fully-qualified test class
//! - `-m <packageName>`: select a specific package
//! - `-q <suffix>`: include only classes whose name ends with suffix
//! - `-w <prefix>`: include only packages starting with prefix
//!
//! Remaining arguments are classpath root directories. Exit code is 1 if
//! any test fails, 0 otherwise (including when nothing was selected).

use anyhow::Context;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use testselect::{
    report_summary, ConsoleLauncher, DiscoveryRequest, SelectionCriteria, TestPlatform,
    EXIT_SUCCESS,
};

/// Overrides launcher jar discovery with an explicit path
const LAUNCHER_ENV: &str = "TESTSELECT_LAUNCHER";
/// Overrides the `java` executable used to run the launcher
const JAVA_ENV: &str = "TESTSELECT_JAVA";

fn main() {
    match try_main() {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("testselect: {err:#}");
            process::exit(2);
        }
    }
}

fn try_main() -> anyhow::Result<i32> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    // Nothing selected: take no further action, succeed. The launcher jar
    // is only located once there is actual work.
    let criteria = match SelectionCriteria::parse_args(&args) {
        Some(criteria) => criteria,
        None => return Ok(EXIT_SUCCESS),
    };

    let mut launcher = match std::env::var_os(LAUNCHER_ENV) {
        Some(jar) => ConsoleLauncher::new(PathBuf::from(jar)),
        None => ConsoleLauncher::discover(Path::new(".")).with_context(|| {
            format!("no console launcher jar found; set {}", LAUNCHER_ENV)
        })?,
    };
    if let Ok(java) = std::env::var(JAVA_ENV) {
        launcher = launcher.java(java);
    }

    let request = DiscoveryRequest::from_criteria(&criteria);
    let summary = launcher.execute(&request).context("test run failed")?;
    let code = report_summary(&summary, &mut io::stdout(), &mut io::stderr())?;
    Ok(code)
}
