//! Command-line interface tests.

use std::io::Write as _;

mod prelude;
use prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("mdtelegram").expect("binary exists")
}

#[rstest]
fn converts_stdin_to_stdout() {
    cmd()
        .write_stdin("**bold** and _italic_")
        .assert()
        .success()
        .stdout("*bold* and _italic_\n");
}

#[rstest]
fn renders_headings_and_paragraphs() {
    cmd()
        .write_stdin("# Hello\n\n**world**")
        .assert()
        .success()
        .stdout("*Hello*\n\n*world*\n");
}

#[rstest]
fn json_flag_emits_the_envelope() {
    cmd()
        .arg("--json")
        .write_stdin("hello")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_parts\": 1"))
        .stdout(predicate::str::contains("\"message_id\""))
        .stdout(predicate::str::contains("\"content\": \"hello\""));
}

#[rstest]
fn reads_a_file_argument() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "# Title\n\nbody").expect("write temp file");
    cmd()
        .arg(file.path())
        .assert()
        .success()
        .stdout("*Title*\n\nbody\n");
}

#[rstest]
fn empty_stdin_fails() {
    cmd().write_stdin("   \n").assert().failure();
}

#[rstest]
#[case("none", "a (b) 4.\n")]
#[case("basic", "a \\(b\\) 4\\.\n")]
#[case("strict", "a \\(b\\) 4\\.\n")]
fn safety_flag_selects_the_escaping_level(#[case] level: &str, #[case] expected: &'static str) {
    cmd()
        .args(["--safety", level])
        .write_stdin("a (b) 4.")
        .assert()
        .success()
        .stdout(expected);
}

#[rstest]
fn max_length_flag_splits_the_output() {
    let input = format!("{}\n\n{}", "x".repeat(40), "y".repeat(40));
    cmd()
        .args(["--json", "--max-length", "64"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_parts\": 2"));
}

#[rstest]
fn no_align_flag_disables_table_padding() {
    cmd()
        .arg("--no-align")
        .write_stdin("| A | B |\n|---|---|\n| 1 | 2 |")
        .assert()
        .success()
        .stdout("\\• A \\| B\n\\• 1 \\| 2\n");
}
