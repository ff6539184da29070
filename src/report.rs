//! Summary reporting and exit-code mapping

use crate::error::Result;
use crate::platform::ExecutionSummary;
use std::io::Write;

/// Exit code for a clean run (including running zero tests)
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code when at least one test failed
pub const EXIT_TEST_FAILURE: i32 = 1;

/// Print the summary and map it to the process exit code.
///
/// When no tests were found, nothing is written and the run counts as
/// success. Otherwise the summary goes to `out`; failure details go to
/// `err` and flip the exit code to [`EXIT_TEST_FAILURE`].
///
/// This mapping is the tool's user-visible contract: CI decides pass/fail
/// from the exit code alone.
pub fn report_summary<O, E>(summary: &ExecutionSummary, out: &mut O, err: &mut E) -> Result<i32>
where
    O: Write,
    E: Write,
{
    if summary.tests_found == 0 {
        return Ok(EXIT_SUCCESS);
    }

    writeln!(
        out,
        "Test run finished: {} tests found, {} skipped, {} succeeded, {} failed",
        summary.tests_found, summary.tests_skipped, summary.tests_succeeded, summary.tests_failed
    )?;

    if summary.total_failures() > 0 {
        writeln!(err, "Failures ({}):", summary.total_failures())?;
        for failure in &summary.failures {
            writeln!(err, "  {}", failure.test_id)?;
            writeln!(err, "    => {}", failure.cause)?;
        }
        return Ok(EXIT_TEST_FAILURE);
    }

    Ok(EXIT_SUCCESS)
}
