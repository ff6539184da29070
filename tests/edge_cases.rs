//! Edge case tests for argument handling and filter composition

use tempfile::TempDir;
use testselect::{run, ExecutionSummary, ScriptedPlatform, Selection, EXIT_SUCCESS};

fn run_with(args: &[&str], platform: &ScriptedPlatform) -> i32 {
    let mut out = Vec::new();
    let mut err = Vec::new();
    run(args.iter().copied(), platform, &mut out, &mut err).unwrap()
}

#[test]
fn test_trailing_flag_is_harmless() {
    // A flag with no following value must neither error nor contribute
    let temp = TempDir::new().unwrap();
    let root = temp.path().to_string_lossy().to_string();
    let platform = ScriptedPlatform::replying(ExecutionSummary::default());

    let code = run_with(&[&root, "-q"], &platform);
    assert_eq!(code, EXIT_SUCCESS);
    let requests = platform.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].class_name_patterns.is_empty());
}

#[test]
fn test_only_flags_no_roots_is_a_no_op() {
    let platform = ScriptedPlatform::replying(ExecutionSummary::default());
    let code = run_with(&["-s", "com.example.FooTest", "-q", "Test"], &platform);
    assert_eq!(code, EXIT_SUCCESS);
    assert!(platform.requests().is_empty());
}

#[test]
fn test_duplicate_roots_collapse_in_selection() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().to_string_lossy().to_string();
    let platform = ScriptedPlatform::replying(ExecutionSummary::default());

    run_with(&[&root, &root], &platform);
    let requests = platform.requests();
    match &requests[0].selection {
        Selection::ClasspathRoots(roots) => assert_eq!(roots.len(), 1),
        other => panic!("expected a classpath-root selection, got {:?}", other),
    }
}

#[test]
fn test_literal_dot_suffix_end_to_end() {
    // "-q .FooTest" must not treat the dot as "any character"
    let temp = TempDir::new().unwrap();
    let root = temp.path().to_string_lossy().to_string();
    let platform =
        ScriptedPlatform::discovering(["com.example.FooTest", "com.exampleXFooTest"]);

    let mut out = Vec::new();
    let mut err = Vec::new();
    let args = [&root[..], "-q", ".FooTest"];
    run(args.iter().copied(), &platform, &mut out, &mut err).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("1 tests found"), "dot matched literally: {out}");
}

#[test]
fn test_suffix_and_prefix_filters_are_conjunctive() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().to_string_lossy().to_string();
    // Three candidates; only one satisfies both the suffix and the prefix
    let platform = ScriptedPlatform::discovering([
        "org.sireum.AFooTest",
        "org.sireum.Helper",
        "com.example.BFooTest",
    ]);

    let mut out = Vec::new();
    let mut err = Vec::new();
    let args = [&root[..], "-q", "Test", "-w", "org.sireum"];
    run(args.iter().copied(), &platform, &mut out, &mut err).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("1 tests found"), "filters must compose: {out}");
}

#[test]
fn test_package_selector_recorded_alongside_root_scan() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().to_string_lossy().to_string();
    let platform = ScriptedPlatform::replying(ExecutionSummary::default());

    run_with(&["-m", "org.sireum.logika", &root], &platform);
    let requests = platform.requests();
    assert_eq!(requests[0].package_names, vec!["org.sireum.logika"]);
    assert!(matches!(
        requests[0].selection,
        Selection::ClasspathRoots(_)
    ));
}
