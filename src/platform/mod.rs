//! Test platform boundary
//!
//! Discovery and execution are delegated to an external test platform.
//! Everything behind [`TestPlatform`] is a black box to the rest of the
//! crate: one request goes in, one summary comes out.

pub mod launcher;
pub mod scripted;

// Re-export public types
pub use launcher::ConsoleLauncher;
pub use scripted::ScriptedPlatform;

use crate::error::Result;
use crate::request::DiscoveryRequest;

/// One failing test: its identifier and the cause reported by the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Platform identifier of the failing test
    pub test_id: String,
    /// Failure cause (exception message or assertion text)
    pub cause: String,
}

/// Aggregate result of one discovery-and-execution run.
///
/// Produced once by the platform, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecutionSummary {
    /// Tests the platform discovered
    pub tests_found: u64,
    /// Tests skipped without running
    pub tests_skipped: u64,
    /// Tests that ran and passed
    pub tests_succeeded: u64,
    /// Tests that ran and failed
    pub tests_failed: u64,
    /// Container-level failures (failed class initializers and the like)
    pub containers_failed: u64,
    /// Per-failure details, in platform order
    pub failures: Vec<Failure>,
}

impl ExecutionSummary {
    /// Total failure count across tests and containers
    pub fn total_failures(&self) -> u64 {
        self.tests_failed + self.containers_failed
    }
}

/// Capability interface of the external test-execution platform.
pub trait TestPlatform {
    /// Discover and execute the tests described by `request`, as a single
    /// synchronous unit of work.
    ///
    /// There is no retry or timeout at this seam; an unrecoverable platform
    /// fault comes back as `Err` and propagates unchanged.
    fn execute(&self, request: &DiscoveryRequest) -> Result<ExecutionSummary>;
}
