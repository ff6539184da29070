//! In-process fake platform for tests and embedders

use crate::error::{Error, Result};
use crate::platform::{ExecutionSummary, TestPlatform};
use crate::request::DiscoveryRequest;
use std::cell::RefCell;

enum Behavior {
    /// Reply with this summary for every request
    Reply(ExecutionSummary),
    /// Simulate discovery over these fully-qualified class names, applying
    /// the request's filters; every admitted class runs as one passing test
    Discover(Vec<String>),
    /// Fail every request with a platform fault
    Fail(String),
}

/// A [`TestPlatform`] that follows a script instead of running anything,
/// recording each request it is handed.
pub struct ScriptedPlatform {
    behavior: Behavior,
    seen: RefCell<Vec<DiscoveryRequest>>,
}

impl ScriptedPlatform {
    /// Reply with a canned summary
    pub fn replying(summary: ExecutionSummary) -> Self {
        Self::with_behavior(Behavior::Reply(summary))
    }

    /// Simulate discovery over the given candidate class names
    pub fn discovering<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_behavior(Behavior::Discover(
            candidates.into_iter().map(Into::into).collect(),
        ))
    }

    /// Fail every request with a platform fault carrying this message
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::Fail(message.into()))
    }

    fn with_behavior(behavior: Behavior) -> Self {
        ScriptedPlatform {
            behavior,
            seen: RefCell::new(Vec::new()),
        }
    }

    /// Requests received so far, in order
    pub fn requests(&self) -> Vec<DiscoveryRequest> {
        self.seen.borrow().clone()
    }
}

/// Package portion of a fully-qualified class name
fn package_of(class_name: &str) -> &str {
    match class_name.rfind('.') {
        Some(dot) => &class_name[..dot],
        None => "",
    }
}

impl TestPlatform for ScriptedPlatform {
    fn execute(&self, request: &DiscoveryRequest) -> Result<ExecutionSummary> {
        self.seen.borrow_mut().push(request.clone());
        match &self.behavior {
            Behavior::Reply(summary) => Ok(summary.clone()),
            Behavior::Discover(candidates) => {
                let mut summary = ExecutionSummary::default();
                for class_name in candidates {
                    if request.class_name_included(class_name)
                        && request.package_included(package_of(class_name))
                    {
                        summary.tests_found += 1;
                        summary.tests_succeeded += 1;
                    }
                }
                Ok(summary)
            }
            Behavior::Fail(message) => Err(Error::platform("scripted", message.clone())),
        }
    }
}
