//! # testselect
//!
//! A command-line coordinator that selects test classes from classpath-like
//! directory roots and delegates their discovery and execution to the JUnit
//! Platform, reporting pass/fail through the process exit status.
//!
//! The crate itself never discovers or runs a test. It parses a small option
//! surface into [`SelectionCriteria`], turns those into a
//! [`DiscoveryRequest`] (selectors plus inclusion filters, with explicit
//! class selection taking precedence over root scanning), hands the request
//! to a [`TestPlatform`], and maps the returned [`ExecutionSummary`] onto
//! stdout/stderr and an exit code.

pub mod criteria;
pub mod error;
pub mod platform;
pub mod report;
pub mod request;

pub use criteria::SelectionCriteria;
pub use error::{Error, Result};
pub use platform::{
    ConsoleLauncher, ExecutionSummary, Failure, ScriptedPlatform, TestPlatform,
};
pub use report::{report_summary, EXIT_SUCCESS, EXIT_TEST_FAILURE};
pub use request::{DiscoveryRequest, Selection, EXCLUDED_ENGINES};

use std::io::Write;

/// Run the whole pipeline against an argument list, returning the process
/// exit code.
///
/// This is the composed entry point for embedders and tests: option parsing,
/// request building, one synchronous platform call, then reporting. Nothing
/// is written and the platform is never consulted when the arguments select
/// nothing to run.
///
/// # Errors
/// Propagates platform faults and reporting IO errors unchanged; failing
/// tests are not an error, they are an exit code.
pub fn run<P, O, E>(
    args: impl IntoIterator<Item = impl AsRef<str>>,
    platform: &P,
    out: &mut O,
    err: &mut E,
) -> Result<i32>
where
    P: TestPlatform + ?Sized,
    O: Write,
    E: Write,
{
    let criteria = match SelectionCriteria::parse_args(args) {
        Some(criteria) => criteria,
        None => return Ok(EXIT_SUCCESS),
    };
    let request = DiscoveryRequest::from_criteria(&criteria);
    let summary = platform.execute(&request)?;
    report_summary(&summary, out, err)
}
