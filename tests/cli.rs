use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use tagchunk::testing::samples;
use tempfile::NamedTempFile;

fn tagged_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("write line");
    }
    file
}

#[test]
fn match_prints_each_span() {
    let input = tagged_file(&[samples::KITTY]);
    let mut cmd = cargo_bin_cmd!("tagchunk");
    cmd.arg("match").arg("PRON").arg(input.path());

    cmd.assert()
        .success()
        .stdout("Here/PRON\nmy/PRON\n");
}

#[test]
fn match_reads_stdin() {
    let mut cmd = cargo_bin_cmd!("tagchunk");
    cmd.arg("match").arg("ADJ+ NOUN").write_stdin(samples::KITTY);

    cmd.assert()
        .success()
        .stdout("new/ADJ cool/ADJ cat/NOUN\n");
}

#[test]
fn match_as_json() {
    let input = tagged_file(&[samples::FRACTION]);
    let mut cmd = cargo_bin_cmd!("tagchunk");
    cmd.args(["match", r"1\/2/NUM"])
        .arg(input.path())
        .args(["--format", "json"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let json: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(json[0][0]["text"], r"1\/2/NUM");
    assert_eq!(json[0][0]["tokens"][0]["word"], "1/2");
}

#[test]
fn constituents_bracket_labeled_chunks() {
    let input = tagged_file(&[samples::KITTY, "dogs/NOUN bark/VERB"]);
    let mut cmd = cargo_bin_cmd!("tagchunk");
    cmd.arg("constituents").arg(input.path());

    cmd.assert().success().stdout(
        "[NP Here/PRON] [VP 's/VERB] [NP my/PRON new/ADJ cool/ADJ cat/NOUN café/NOUN] !/PUNC :-D/:)\n\
         [NP dogs/NOUN] [VP bark/VERB]\n",
    );
}

#[test]
fn constituents_as_yaml() {
    let mut cmd = cargo_bin_cmd!("tagchunk");
    cmd.args(["--format", "yaml", "constituents"])
        .write_stdin("dogs/NOUN bark/VERB\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("label: NP").and(predicate::str::contains("label: VP")));
}

#[test]
fn config_file_adds_rules_and_hides_labels() {
    let mut config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp config");
    writeln!(
        config,
        r#"
[output]
show_labels = false

[[grammar.rules]]
label = "EMO"
pattern = ":\\)"
priority = 1
"#
    )
    .expect("write config");

    let mut cmd = cargo_bin_cmd!("tagchunk");
    cmd.arg("constituents")
        .arg("--config")
        .arg(config.path())
        .write_stdin(samples::KITTY);

    cmd.assert()
        .success()
        .stdout(predicate::str::ends_with("!/PUNC [:-D/:)]\n"));
}

#[test]
fn syntax_error_exits_with_message() {
    let mut cmd = cargo_bin_cmd!("tagchunk");
    cmd.arg("match").arg("AD[J").write_stdin(samples::KITTY);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error:").and(predicate::str::contains("opened at 2")));
}

#[test]
fn missing_input_file_fails() {
    let mut cmd = cargo_bin_cmd!("tagchunk");
    cmd.arg("constituents").arg("/nonexistent/input.txt");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: cannot read /nonexistent/input.txt"));
}

#[test]
fn subcommand_is_required() {
    let mut cmd = cargo_bin_cmd!("tagchunk");
    cmd.assert().failure();
}

#[test]
fn broken_configured_rule_fails_before_reading_input() {
    let mut config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp config");
    writeln!(config, "[[grammar.rules]]\nlabel = \"BROKEN\"\npattern = \"AD[J\"").expect("write config");

    let mut cmd = cargo_bin_cmd!("tagchunk");
    cmd.arg("match")
        .arg("PRON")
        .arg("--config")
        .arg(config.path())
        .write_stdin(samples::KITTY);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: configured grammar rule BROKEN"));
}
