//! End-to-end runs of the titlefix binary.

use super::test_utils::*;
use std::fs;

#[test]
fn test_cli_fixes_default_docs_root() {
    let tree = DocsTree::new();
    let post = tree.file("post.md", BROKEN_DOUBLE);

    let output = run_titlefix(tree.workdir(), &[]);

    assert!(
        output.status.success(),
        "titlefix should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    // Default root is relative, so the report shows the relative path.
    assert_eq!(
        stdout_of(&output),
        format!(
            "Fixed quotes in: {}\n",
            std::path::Path::new("docs").join("post.md").display()
        )
    );
    assert_eq!(fs::read_to_string(&post).unwrap(), FIXED_DOUBLE);
}

#[test]
fn test_cli_error_isolation() {
    let tree = DocsTree::new();
    let bad = tree.file("a.md", [0xffu8, 0xfe, 0x00, 0x80]);
    let good = tree.file("b.md", BROKEN_SINGLE);
    let root = tree.docs.to_string_lossy().into_owned();

    let output = run_titlefix(tree.workdir(), &[root.as_str()]);

    assert!(output.status.success(), "per-file errors must not fail the run");
    let stdout = stdout_of(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "unexpected output: {stdout}");
    assert!(lines[0].starts_with(&format!("Error processing {}: ", bad.display())));
    assert_eq!(lines[1], format!("Fixed quotes in: {}", good.display()));
    assert_eq!(fs::read_to_string(&good).unwrap(), FIXED_SINGLE);
}

#[test]
fn test_cli_unchanged_file_is_silent() {
    let tree = DocsTree::new();
    let clean = tree.file("clean.md", CLEAN);
    let before = fs::metadata(&clean).unwrap().modified().unwrap();

    let output = run_titlefix(tree.workdir(), &[]);

    assert!(output.status.success());
    assert!(stdout_of(&output).is_empty());
    let after = fs::metadata(&clean).unwrap().modified().unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_cli_dry_run_leaves_files() {
    let tree = DocsTree::new();
    let post = tree.file("post.mdx", BROKEN_DOUBLE);

    let output = run_titlefix(tree.workdir(), &["--dry-run"]);

    assert!(output.status.success());
    assert!(stdout_of(&output).starts_with("Would fix quotes in: "));
    assert_eq!(fs::read_to_string(&post).unwrap(), BROKEN_DOUBLE);
}

#[test]
fn test_cli_missing_root_fails() {
    let tree = DocsTree::new();

    let output = run_titlefix(tree.workdir(), &["no-such-dir"]);

    assert!(!output.status.success());
    assert!(stdout_of(&output).is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Root directory not found"), "stderr={stderr}");
}

#[test]
fn test_cli_reads_config_file_from_workdir() {
    let tree = DocsTree::new();
    let page = tree.file("page.markdown", BROKEN_DOUBLE);
    let skipped = tree.file("page.md", BROKEN_DOUBLE);
    fs::write(
        tree.workdir().join("titlefix.toml"),
        "extensions = [\"markdown\"]\n",
    )
    .unwrap();

    let output = run_titlefix(tree.workdir(), &[]);

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&page).unwrap(), FIXED_DOUBLE);
    assert_eq!(fs::read_to_string(&skipped).unwrap(), BROKEN_DOUBLE);
}

#[test]
fn test_cli_ext_flag_overrides_config() {
    let tree = DocsTree::new();
    let page = tree.file("page.md", BROKEN_DOUBLE);
    fs::write(
        tree.workdir().join("titlefix.toml"),
        "extensions = [\"markdown\"]\n",
    )
    .unwrap();

    let output = run_titlefix(tree.workdir(), &["--ext", "md"]);

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&page).unwrap(), FIXED_DOUBLE);
}

#[test]
fn test_cli_logs_to_file_not_stdout() {
    let tree = DocsTree::new();
    tree.file("post.md", BROKEN_DOUBLE);
    let log_file = tree.workdir().join("logs").join("titlefix.log");
    let log_arg = log_file.to_string_lossy().into_owned();

    let output = run_titlefix(
        tree.workdir(),
        &[
            "--log-level",
            "info",
            "--log-output",
            "file",
            "--log-file",
            log_arg.as_str(),
        ],
    );

    assert!(output.status.success());
    assert_eq!(stdout_of(&output).lines().count(), 1);
    let logs = fs::read_to_string(&log_file).unwrap();
    assert!(logs.contains("Run complete"), "logs={logs}");
}

#[test]
fn test_cli_env_extensions_override_config_file() {
    let tree = DocsTree::new();
    let md = tree.file("page.md", BROKEN_DOUBLE);
    let mdx = tree.file("page.mdx", BROKEN_SINGLE);
    let markdown = tree.file("page.markdown", BROKEN_DOUBLE);
    fs::write(
        tree.workdir().join("titlefix.toml"),
        "extensions = [\"markdown\"]\n",
    )
    .unwrap();

    let output = run_titlefix_with_env(
        tree.workdir(),
        &[],
        &[("TITLEFIX_EXTENSIONS", "md,mdx")],
    );

    assert!(output.status.success());
    assert_eq!(stdout_of(&output).lines().count(), 2);
    assert_eq!(fs::read_to_string(&md).unwrap(), FIXED_DOUBLE);
    assert_eq!(fs::read_to_string(&mdx).unwrap(), FIXED_SINGLE);
    assert_eq!(fs::read_to_string(&markdown).unwrap(), BROKEN_DOUBLE);
}

#[test]
fn test_cli_ext_flag_overrides_env() {
    let tree = DocsTree::new();
    let md = tree.file("page.md", BROKEN_DOUBLE);
    let markdown = tree.file("page.markdown", BROKEN_DOUBLE);

    let output = run_titlefix_with_env(
        tree.workdir(),
        &["--ext", "md"],
        &[("TITLEFIX_EXTENSIONS", "markdown,mdx")],
    );

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&md).unwrap(), FIXED_DOUBLE);
    assert_eq!(fs::read_to_string(&markdown).unwrap(), BROKEN_DOUBLE);
}

#[test]
fn test_cli_env_dry_run() {
    let tree = DocsTree::new();
    let post = tree.file("post.md", BROKEN_DOUBLE);

    let output = run_titlefix_with_env(tree.workdir(), &[], &[("TITLEFIX_DRY_RUN", "true")]);

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        format!(
            "Would fix quotes in: {}\n",
            std::path::Path::new("docs").join("post.md").display()
        )
    );
    assert_eq!(fs::read_to_string(&post).unwrap(), BROKEN_DOUBLE);
}

#[test]
fn test_cli_env_root_overrides_config_file_but_not_argument() {
    let tree = DocsTree::new();
    let in_docs = tree.file("post.md", BROKEN_DOUBLE);
    let handbook = tree.workdir().join("handbook");
    fs::create_dir_all(&handbook).unwrap();
    let in_handbook = handbook.join("guide.md");
    fs::write(&in_handbook, BROKEN_DOUBLE).unwrap();
    fs::write(tree.workdir().join("titlefix.toml"), "root = \"docs\"\n").unwrap();

    let output = run_titlefix_with_env(tree.workdir(), &[], &[("TITLEFIX_ROOT", "handbook")]);
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&in_handbook).unwrap(), FIXED_DOUBLE);
    assert_eq!(fs::read_to_string(&in_docs).unwrap(), BROKEN_DOUBLE);

    let output =
        run_titlefix_with_env(tree.workdir(), &["docs"], &[("TITLEFIX_ROOT", "handbook")]);
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&in_docs).unwrap(), FIXED_DOUBLE);
}

#[test]
fn test_cli_env_nested_logging_keys() {
    let tree = DocsTree::new();
    tree.file("post.md", BROKEN_DOUBLE);
    let log_file = tree.workdir().join("env.log");
    let log_path = log_file.to_string_lossy().into_owned();

    let output = run_titlefix_with_env(
        tree.workdir(),
        &[],
        &[
            ("TITLEFIX_LOGGING__LEVEL", "info"),
            ("TITLEFIX_LOGGING__OUTPUT", "file"),
            ("TITLEFIX_LOGGING__FILE", log_path.as_str()),
        ],
    );

    assert!(output.status.success());
    let logs = fs::read_to_string(&log_file).unwrap();
    assert!(logs.contains("Run complete"), "logs={logs}");
}
