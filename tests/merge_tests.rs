use spindle::errors::SpindleError;
use spindle::merge_files;
use spindle::utils::format_header;
use std::fs;
use std::path::Path;
use tempfile::tempdir;
use tracing_test::traced_test;

fn pattern(path: &Path) -> String {
    path.display().to_string()
}

#[test]
fn test_merge_two_files_in_order() {
    let dir = tempdir().unwrap();
    let file1 = dir.path().join("file1.txt");
    let file2 = dir.path().join("file2.txt");
    let output = dir.path().join("merged_output.txt");
    fs::write(&file1, "Content of file1.\n").unwrap();
    fs::write(&file2, "Content of file2.\n").unwrap();

    let report = merge_files(&[pattern(&file1), pattern(&file2)], &output).unwrap();

    let expected = format!(
        "{}Content of file1.\n\n{}Content of file2.\n\n",
        format_header(&file1),
        format_header(&file2)
    );
    assert_eq!(fs::read_to_string(&output).unwrap(), expected);
    assert_eq!(report.content, expected);
}

#[test]
#[traced_test]
fn test_unmatched_pattern_warns_and_continues() {
    let dir = tempdir().unwrap();
    let file1 = dir.path().join("file1.txt");
    let output = dir.path().join("merged_output.txt");
    fs::write(&file1, "one").unwrap();

    let missing = dir.path().join("nonexistent_file.txt");
    let report = merge_files(&[pattern(&missing), pattern(&file1)], &output).unwrap();

    assert!(logs_contain("No files matched"));
    assert_eq!(report.warnings, 1);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        format!("{}one\n", format_header(&file1))
    );
}

#[test]
#[traced_test]
fn test_directories_are_skipped_silently() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    let file = dir.path().join("solo.txt");
    fs::write(&file, "only me").unwrap();
    let output = dir.path().join("out").join("merged.txt");
    fs::create_dir(dir.path().join("out")).unwrap();

    let glob = format!("{}/*", dir.path().display());
    let report = merge_files(&[glob], &output).unwrap();

    // `out`, `solo.txt` and `sub` all match; only the file is merged.
    assert_eq!(report.merged_files.len(), 1);
    assert_eq!(report.warnings, 0);
    assert!(!logs_contain("Not a valid file"));
    assert_eq!(report.content, format!("{}only me\n", format_header(&file)));
}

#[test]
fn test_same_file_twice_is_merged_twice() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("dup.txt");
    let output = dir.path().join("merged.txt");
    fs::write(&file, "again").unwrap();

    let report = merge_files(&[pattern(&file), pattern(&file)], &output).unwrap();

    let block = format!("{}again\n", format_header(&file));
    assert_eq!(report.content, format!("{block}{block}"));
    assert_eq!(report.merged_files.len(), 2);
}

#[test]
#[traced_test]
fn test_unreadable_file_leaves_no_orphan_header() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    let c = dir.path().join("c.txt");
    fs::write(&a, "first").unwrap();
    fs::write(&b, [0xff, 0xfe, 0xfd]).unwrap();
    fs::write(&c, "third").unwrap();
    let output = dir.path().join("merged.md");

    let glob = format!("{}/*.txt", dir.path().display());
    let report = merge_files(&[glob], &output).unwrap();

    assert!(logs_contain("Error reading"));
    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        format!("{}first\n{}third\n", format_header(&a), format_header(&c))
    );
    assert!(!written.contains("b.txt"));
    assert_eq!(report.warnings, 1);
}

#[test]
fn test_recursive_pattern_merges_nested_files() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src/nested")).unwrap();
    fs::write(dir.path().join("src/lib.rs"), "// lib").unwrap();
    fs::write(dir.path().join("src/nested/mod.rs"), "// mod").unwrap();
    let output = dir.path().join("merged.txt");

    let glob = format!("{}/src/**/*.rs", dir.path().display());
    let report = merge_files(&[glob], &output).unwrap();

    assert_eq!(report.merged_files.len(), 2);
    assert!(report.content.contains("// lib\n"));
    assert!(report.content.contains("// mod\n"));
}

#[test]
fn test_unwritable_output_is_fatal() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("a.txt");
    fs::write(&file, "x").unwrap();
    let output = dir.path().join("missing_dir").join("merged.txt");

    let err = merge_files(&[pattern(&file)], &output).unwrap_err();
    assert!(matches!(err, SpindleError::OutputWriteError(..)));
    assert_eq!(err.exit_code(), 2);
}

#[cfg(unix)]
#[test]
#[traced_test]
fn test_broken_symlink_is_reported() {
    let dir = tempdir().unwrap();
    let link = dir.path().join("dangling.txt");
    std::os::unix::fs::symlink(dir.path().join("gone.txt"), &link).unwrap();
    let output = dir.path().join("merged.md");

    let glob = format!("{}/*.txt", dir.path().display());
    let report = merge_files(&[glob], &output).unwrap();

    assert!(logs_contain("Not a valid file"));
    assert!(report.content.is_empty());
    assert_eq!(report.warnings, 1);
}

#[test]
fn test_home_relative_pattern_is_expanded_and_merged() {
    let home = std::path::PathBuf::from(shellexpand::tilde("~").into_owned());
    let dir = tempfile::tempdir_in(&home).unwrap();
    let file = dir.path().join("notes.txt");
    fs::write(&file, "from home").unwrap();
    let output = dir.path().join("merged.md");

    let relative = dir.path().strip_prefix(&home).unwrap();
    let glob = format!("~/{}/*.txt", relative.display());
    let report = merge_files(&[glob], &output).unwrap();

    assert_eq!(report.merged_files.len(), 1);
    assert_eq!(report.merged_files[0].path, file);
    assert_eq!(report.content, format!("{}from home\n", format_header(&file)));
    assert_eq!(report.warnings, 0);
}

#[cfg(unix)]
#[test]
#[traced_test]
fn test_unreadable_directory_counts_as_warning() {
    use std::os::unix::fs::PermissionsExt;

    if nix::unistd::geteuid().is_root() {
        return;
    }
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("open")).unwrap();
    fs::create_dir(dir.path().join("locked")).unwrap();
    fs::write(dir.path().join("open/a.txt"), "visible").unwrap();
    fs::write(dir.path().join("locked/b.txt"), "hidden").unwrap();
    fs::set_permissions(dir.path().join("locked"), fs::Permissions::from_mode(0o000)).unwrap();
    let output = dir.path().join("merged.md");

    let glob = format!("{}/*/*.txt", dir.path().display());
    let result = merge_files(&[glob], &output);
    fs::set_permissions(dir.path().join("locked"), fs::Permissions::from_mode(0o755)).unwrap();

    let report = result.unwrap();
    assert!(logs_contain("Error processing pattern"));
    assert_eq!(report.merged_files.len(), 1);
    assert_eq!(report.warnings, 1);
}
