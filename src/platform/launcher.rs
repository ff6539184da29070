//! JUnit Platform Console Launcher binding
//!
//! Maps a [`DiscoveryRequest`] onto the command line of the console
//! standalone launcher (`java -jar junit-platform-console-standalone-*.jar`)
//! and parses its textual summary back into an [`ExecutionSummary`].

use crate::error::{Error, Result};
use crate::platform::{ExecutionSummary, Failure, TestPlatform};
use crate::request::{DiscoveryRequest, Selection, EXCLUDED_ENGINES};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::process::Command;
use walkdir::WalkDir;

/// File-name shape of the standalone launcher jar
const LAUNCHER_JAR_PREFIX: &str = "junit-platform-console-standalone";

/// Production platform binding backed by the console launcher jar
pub struct ConsoleLauncher {
    java: String,
    launcher_jar: PathBuf,
}

impl ConsoleLauncher {
    /// Create a launcher binding for an explicit jar path
    pub fn new(launcher_jar: impl Into<PathBuf>) -> Self {
        ConsoleLauncher {
            java: "java".to_string(),
            launcher_jar: launcher_jar.into(),
        }
    }

    /// Use a specific `java` executable instead of the one on PATH
    pub fn java(mut self, java: impl Into<String>) -> Self {
        self.java = java.into();
        self
    }

    /// Locate a console-standalone jar beneath `root` and bind to it
    pub fn discover(root: &Path) -> Result<Self> {
        for entry in WalkDir::new(root) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if name.starts_with(LAUNCHER_JAR_PREFIX) && name.ends_with(".jar") {
                    return Ok(Self::new(entry.path()));
                }
            }
        }
        Err(Error::LauncherNotFound {
            search_root: root.display().to_string(),
        })
    }

    /// Translate a request into console launcher arguments
    fn request_args(&self, request: &DiscoveryRequest) -> Vec<String> {
        let mut args = vec![
            "-jar".to_string(),
            self.launcher_jar.display().to_string(),
            "execute".to_string(),
            "--disable-banner".to_string(),
            "--disable-ansi-colors".to_string(),
        ];

        // Classpath provisioning is separate from selection: the JVM needs
        // the validated roots to load classes from no matter how they were
        // selected. Only the root-scan variant also uses them as a scan
        // source.
        for root in &request.classpath_roots {
            args.push(format!("--classpath={}", root.display()));
        }
        match &request.selection {
            Selection::Classes(class_names) => {
                for class_name in class_names {
                    args.push(format!("--select-class={}", class_name));
                }
            }
            Selection::ClasspathRoots(_) => {
                args.push("--scan-classpath".to_string());
            }
        }

        for package_name in &request.package_names {
            args.push(format!("--select-package={}", package_name));
        }
        for pattern in &request.class_name_patterns {
            args.push(format!("--include-classname={}", pattern));
        }
        for prefix in &request.package_prefixes {
            args.push(format!("--include-package={}", prefix));
        }
        for engine in EXCLUDED_ENGINES {
            args.push(format!("--exclude-engine={}", engine));
        }

        args
    }
}

impl TestPlatform for ConsoleLauncher {
    fn execute(&self, request: &DiscoveryRequest) -> Result<ExecutionSummary> {
        let args = self.request_args(request);
        let output = Command::new(&self.java).args(&args).output()?;

        // Exit code 1 is the launcher's "tests failed" code; anything else
        // non-zero is a real launcher fault.
        let code = output.status.code().unwrap_or(-1);
        if code != 0 && code != 1 {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::platform(
                format!("{} {}", self.java, args.join(" ")),
                format!("exit code {}: {}", code, stderr.trim()),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_summary(&stdout)
    }
}

/// Parse the launcher's textual run summary.
///
/// The launcher prints a bracketed counter table plus, when anything failed,
/// a `Failures (n):` section listing each test identifier and its cause.
fn parse_summary(output: &str) -> Result<ExecutionSummary> {
    // e.g. "[         5 tests found           ]"
    let counter =
        Regex::new(r"^\[\s*(\d+)\s+(containers|tests)\s+(found|skipped|started|aborted|successful|failed)\s*\]")?;
    let failure_id = Regex::new(r"^  (\S.*)$")?;
    let failure_cause = Regex::new(r"^\s+=> (.*)$")?;

    let mut summary = ExecutionSummary::default();
    let mut saw_counters = false;
    let mut in_failures = false;

    for line in output.lines() {
        if line.starts_with("Failures (") {
            in_failures = true;
            continue;
        }
        if let Some(caps) = counter.captures(line) {
            in_failures = false;
            saw_counters = true;
            let count: u64 = caps[1].parse().unwrap_or(0);
            match (&caps[2], &caps[3]) {
                ("tests", "found") => summary.tests_found = count,
                ("tests", "skipped") => summary.tests_skipped = count,
                ("tests", "successful") => summary.tests_succeeded = count,
                ("tests", "failed") => summary.tests_failed = count,
                ("containers", "failed") => summary.containers_failed = count,
                _ => {}
            }
            continue;
        }
        if in_failures {
            if let Some(caps) = failure_cause.captures(line) {
                if let Some(last) = summary.failures.last_mut() {
                    last.cause = caps[1].to_string();
                }
            } else if let Some(caps) = failure_id.captures(line) {
                summary.failures.push(Failure {
                    test_id: caps[1].to_string(),
                    cause: String::new(),
                });
            } else if line.starts_with(' ') || line.trim().is_empty() {
                // source details and blank separators; stay in the section
            } else {
                in_failures = false;
            }
        }
    }

    if !saw_counters {
        return Err(Error::summary_parse(format!(
            "no summary counters in launcher output ({} bytes)",
            output.len()
        )));
    }
    Ok(summary)
}
