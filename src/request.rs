//! Building platform discovery requests from selection criteria

use crate::criteria::SelectionCriteria;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Engines excluded from every request. ScalaTest runs through its own
/// runner, and standard JUnit Jupiter `@Test` classes are not what this
/// tool exists to run.
pub const EXCLUDED_ENGINES: [&str; 2] = ["scalatest", "junit-jupiter"];

/// Where the platform should look for tests.
///
/// Explicit class selection and classpath-root scanning are mutually
/// exclusive, so the choice is a tagged enum rather than two optionally
/// empty lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Select exactly these fully-qualified class names
    Classes(Vec<String>),
    /// Scan these classpath root directories
    ClasspathRoots(BTreeSet<PathBuf>),
}

/// A discovery-and-execution request for the test platform.
///
/// Selectors say where to look; filters narrow what was found. Filters are
/// conjunctive: a discovered class must pass every active filter.
#[derive(Debug, Clone)]
pub struct DiscoveryRequest {
    /// Class selectors or a classpath-root selector, never both
    pub selection: Selection,
    /// Validated root directories. The platform always needs these to load
    /// classes from, even when explicit class selection means they are not
    /// used as a scan source.
    pub classpath_roots: BTreeSet<PathBuf>,
    /// Additive package selectors, composing with either selection variant
    pub package_names: Vec<String>,
    /// Inclusion patterns over fully-qualified class names; empty means
    /// no name-based filtering
    pub class_name_patterns: Vec<String>,
    /// Literal package-name prefixes; empty means no package filtering
    pub package_prefixes: Vec<String>,
    /// Anchored, compiled forms of `class_name_patterns`
    matchers: Vec<Regex>,
}

impl PartialEq for DiscoveryRequest {
    fn eq(&self, other: &Self) -> bool {
        self.selection == other.selection
            && self.classpath_roots == other.classpath_roots
            && self.package_names == other.package_names
            && self.class_name_patterns == other.class_name_patterns
            && self.package_prefixes == other.package_prefixes
    }
}

impl Eq for DiscoveryRequest {}

impl DiscoveryRequest {
    /// Build a request from parsed selection criteria.
    ///
    /// Explicit class names override root scanning entirely: when any `-s`
    /// class was given, the roots are not used for selection (they still
    /// travel along as `classpath_roots`). Suffixes are escaped before
    /// becoming patterns so that they match literally even when they
    /// contain regex metacharacters.
    pub fn from_criteria(criteria: &SelectionCriteria) -> Self {
        let selection = if criteria.class_names.is_empty() {
            Selection::ClasspathRoots(criteria.roots.clone())
        } else {
            Selection::Classes(criteria.class_names.clone())
        };

        let mut class_name_patterns = Vec::new();
        let mut matchers = Vec::new();
        for suffix in &criteria.suffixes {
            let literal = regex::escape(suffix);
            // Escaped literals always compile; the guard keeps the pattern
            // list and the compiled matchers in step.
            if let Ok(re) = Regex::new(&format!("^(?:.*{})$", literal)) {
                class_name_patterns.push(format!(".*{}", literal));
                matchers.push(re);
            }
        }

        DiscoveryRequest {
            selection,
            classpath_roots: criteria.roots.clone(),
            package_names: criteria.package_names.clone(),
            class_name_patterns,
            package_prefixes: criteria.prefixes.clone(),
            matchers,
        }
    }

    /// Whether a fully-qualified class name passes the class-name filter.
    ///
    /// An empty pattern list admits everything; otherwise the whole name
    /// must match at least one pattern.
    pub fn class_name_included(&self, class_name: &str) -> bool {
        self.matchers.is_empty() || self.matchers.iter().any(|re| re.is_match(class_name))
    }

    /// Whether a package name passes the package-prefix filter.
    pub fn package_included(&self, package_name: &str) -> bool {
        self.package_prefixes.is_empty()
            || self
                .package_prefixes
                .iter()
                .any(|prefix| package_name.starts_with(prefix.as_str()))
    }
}
