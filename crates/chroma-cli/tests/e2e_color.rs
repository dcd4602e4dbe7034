//! E2E tests for the `chroma` binary.
//!
//! Each test runs `chroma` as a subprocess in an isolated temp directory,
//! with text output forced so assertions see stable, unframed lines.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Test Harness
// ---------------------------------------------------------------------------

/// Build a Command targeting the chroma binary, rooted in `dir`.
fn chroma_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("chroma"));
    cmd.current_dir(dir);
    cmd.env("CHROMA_LOG", "error");
    cmd.env_remove("CHROMA_FORMAT");
    cmd
}

fn write_problem(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).expect("write problem file");
}

const TRIANGLE: &str = r#"
edges = [["a", "b"], ["b", "c"], ["c", "a"]]
palette = ["red", "green", "blue"]
"#;

// ---------------------------------------------------------------------------
// color
// ---------------------------------------------------------------------------

#[test]
fn color_triangle_text() {
    let dir = TempDir::new().expect("temp dir");
    write_problem(dir.path(), "triangle.toml", TRIANGLE);

    chroma_cmd(dir.path())
        .args(["color", "triangle.toml", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "algorithm=greedy palette=3 required=3 verified=yes\n",
        ))
        .stdout(predicate::str::contains("a red"));
}

#[test]
fn color_triangle_with_too_few_colors_fails_with_code() {
    let dir = TempDir::new().expect("temp dir");
    write_problem(dir.path(), "triangle.toml", r#"edges = [["a", "b"], ["b", "c"], ["c", "a"]]"#);

    chroma_cmd(dir.path())
        .args(["color", "triangle.toml", "--colors", "2", "--algorithm", "backtracking"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error[E2001]"))
        .stderr(predicate::str::contains("hint:"));
}

#[test]
fn precolored_nodes_keep_their_colors() {
    let dir = TempDir::new().expect("temp dir");
    write_problem(
        dir.path(),
        "pre.toml",
        r#"
edges = [["a", "b"], ["b", "c"], ["c", "a"]]
palette = ["red", "green", "blue"]

[precolored]
b = "blue"
"#,
    );

    chroma_cmd(dir.path())
        .args(["color", "pre.toml", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("algorithm=backtracking"))
        .stdout(predicate::str::contains("b blue\n"));
}

#[test]
fn self_loop_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    write_problem(dir.path(), "loop.toml", r#"edges = [["a", "a"]]"#);

    chroma_cmd(dir.path())
        .args(["color", "loop.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error[E1002]"));
}

#[test]
fn malformed_problem_is_a_parse_error() {
    let dir = TempDir::new().expect("temp dir");
    write_problem(dir.path(), "bad.toml", "edges = [[");

    chroma_cmd(dir.path())
        .args(["color", "bad.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E3001]"));
}

#[test]
fn config_file_sets_defaults() {
    let dir = TempDir::new().expect("temp dir");
    write_problem(dir.path(), "triangle.toml", r#"edges = [["a", "b"], ["b", "c"], ["c", "a"]]"#);
    std::fs::write(
        dir.path().join("chroma.toml"),
        "[coloring]\nalgorithm = \"backtracking\"\npalette_size = 4\n\n[output]\nformat = \"text\"\n",
    )
    .expect("write config");

    chroma_cmd(dir.path())
        .args(["color", "triangle.toml"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "algorithm=backtracking palette=4 required=3",
        ));
}

#[test]
fn broken_config_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    write_problem(dir.path(), "triangle.toml", TRIANGLE);
    std::fs::write(dir.path().join("custom.toml"), "[coloring\n").expect("write config");

    chroma_cmd(dir.path())
        .args(["--config", "custom.toml", "color", "triangle.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E3002]"));
}

#[test]
fn missing_config_is_a_read_error() {
    let dir = TempDir::new().expect("temp dir");
    write_problem(dir.path(), "triangle.toml", TRIANGLE);

    chroma_cmd(dir.path())
        .args(["--config", "absent.toml", "color", "triangle.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E3003]"))
        .stderr(predicate::str::contains("Fix syntax").not());
}

#[test]
fn no_verify_skips_the_check() {
    let dir = TempDir::new().expect("temp dir");
    write_problem(dir.path(), "triangle.toml", TRIANGLE);

    chroma_cmd(dir.path())
        .args(["color", "triangle.toml", "--no-verify", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "algorithm=greedy palette=3 required=3 verified=skipped\n",
        ));
}

#[test]
fn env_format_applies_without_flag() {
    let dir = TempDir::new().expect("temp dir");
    write_problem(dir.path(), "triangle.toml", TRIANGLE);

    chroma_cmd(dir.path())
        .env("CHROMA_FORMAT", "pretty")
        .args(["color", "triangle.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Color classes"));
}

// ---------------------------------------------------------------------------
// stats / generate / sudoku
// ---------------------------------------------------------------------------

#[test]
fn stats_reports_greedy_bound() {
    let dir = TempDir::new().expect("temp dir");
    write_problem(dir.path(), "triangle.toml", TRIANGLE);

    chroma_cmd(dir.path())
        .args(["stats", "triangle.toml", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("greedy_bound=3\n"))
        .stdout(predicate::str::contains("colorable=yes\n"));
}

#[test]
fn generate_bipartite_needs_two_colors() {
    let dir = TempDir::new().expect("temp dir");

    chroma_cmd(dir.path())
        .args(["generate", "bipartite", "--nodes", "100", "--colors", "11", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("algorithm=greedy palette=11 required=2"));
}

#[test]
fn generate_complete_with_small_palette_fails() {
    let dir = TempDir::new().expect("temp dir");

    chroma_cmd(dir.path())
        .args(["generate", "complete", "--nodes", "10", "--colors", "9"])
        .assert()
        .code(2);
}

#[test]
fn sudoku_keeps_givens() {
    let dir = TempDir::new().expect("temp dir");
    let mut puzzle = vec!['.'; 81];
    puzzle[0] = '1';
    puzzle[9 + 2] = '5';
    puzzle[5 * 9 + 5] = '8';
    let puzzle: String = puzzle.into_iter().collect();

    let output = chroma_cmd(dir.path())
        .args(["sudoku", &puzzle, "--format", "text"])
        .output()
        .expect("sudoku should not crash");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let rows: Vec<&str> = stdout.lines().collect();
    assert_eq!(rows.len(), 9);
    assert!(rows[0].starts_with('1'));
    assert_eq!(rows[1].as_bytes()[2], b'5');
    assert_eq!(rows[5].as_bytes()[5], b'8');
    for row in rows {
        let mut digits: Vec<char> = row.chars().collect();
        digits.sort_unstable();
        assert_eq!(digits.into_iter().collect::<String>(), "123456789");
    }
}

#[test]
fn contradictory_sudoku_has_no_solution() {
    let dir = TempDir::new().expect("temp dir");
    let puzzle = format!("11{}", ".".repeat(79));

    chroma_cmd(dir.path())
        .args(["sudoku", &puzzle])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no solution"));
}
