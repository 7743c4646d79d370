//! Architecture tests for file size limits.
//!
//! - Files >400 LOC get a warning on stderr.
//! - Files >600 LOC are presumed mis-scoped and fail the test.

use std::fs;
use std::io::Write;

use architecture_tests::{count_loc, find_rust_files, find_workspace_root};

const WARNING_THRESHOLD: usize = 400;
const FAILURE_THRESHOLD: usize = 600;

/// Files excluded from size checks, as (path_suffix, justification).
const EXCLUDED_FILES: &[(&str, &str)] = &[];

#[test]
fn file_size_limits() {
    let workspace_root = find_workspace_root();
    let crates_dir = workspace_root.join("crates");
    assert!(
        crates_dir.exists(),
        "crates/ directory not found at {:?}",
        crates_dir
    );

    let rust_files = find_rust_files(&crates_dir);
    assert!(!rust_files.is_empty(), "no Rust files found under crates/");

    let mut failures = Vec::new();
    for file_path in &rust_files {
        let content = fs::read_to_string(file_path).expect("Failed to read file");
        let loc = count_loc(&content);
        let relative = file_path.strip_prefix(&workspace_root).unwrap_or(file_path);
        let relative = relative.to_string_lossy().to_string();

        let is_excluded = EXCLUDED_FILES
            .iter()
            .any(|(suffix, _)| relative.ends_with(suffix));

        if loc > FAILURE_THRESHOLD && !is_excluded {
            failures.push((relative, loc));
        } else if loc > WARNING_THRESHOLD {
            eprintln!("[architecture] {}: {} LOC exceeds {}", relative, loc, WARNING_THRESHOLD);
        }
    }

    assert!(
        failures.is_empty(),
        "Files exceeding {} LOC (split them or add to EXCLUDED_FILES with a justification):\n{}",
        FAILURE_THRESHOLD,
        failures
            .iter()
            .map(|(path, loc)| format!("  - {}: {} lines", path, loc))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

#[test]
fn test_count_loc_skips_comments_and_blanks() {
    let source = r#"//! Module documentation

/// Function documentation
fn main() {
    let x = 5; // inline comment

    /* block
       comment */
    println!("{x}");
}
"#;
    // fn main() {, let x = 5;, println!, }
    assert_eq!(count_loc(source), 4);
}

#[test]
fn test_find_rust_files_skips_target() {
    let temp_dir = tempfile::tempdir().unwrap();
    let src = temp_dir.path().join("src");
    let target = temp_dir.path().join("target");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&target).unwrap();

    let mut kept = fs::File::create(src.join("lib.rs")).unwrap();
    writeln!(kept, "pub fn f() {{}}").unwrap();
    fs::write(target.join("build.rs"), "fn main() {}").unwrap();
    fs::write(src.join("notes.txt"), "not rust").unwrap();

    let files = find_rust_files(temp_dir.path());
    assert_eq!(files, vec![src.join("lib.rs")]);
}

#[test]
fn test_excluded_files_list_is_consistent() {
    for (pattern, justification) in EXCLUDED_FILES {
        assert!(!pattern.is_empty(), "Excluded file pattern must not be empty");
        assert!(
            !justification.is_empty(),
            "Justification for '{}' must not be empty",
            pattern
        );
    }
}
