use std::io::Write;

use circuitry::{
    config::Config,
    error::{Error, RuntimeError},
    get_result,
    interpreter::evaluator::core::{Context, Flow},
};
use tempfile::NamedTempFile;

fn table_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temporary file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write truth table");
    file
}

fn find(contents: &str, config: &Config) -> (String, String) {
    let file = table_file(contents);
    let script = format!("FIND \"{}\"\n", file.path().display());
    let transcript = get_result(&script, config).unwrap();
    (transcript.stdout, transcript.stderr)
}

fn quiet() -> Config {
    Config { show_table: false,
             ..Config::default() }
}

#[test]
fn synthesizes_true_rows_only() {
    let (stdout, stderr) = find("1 0 1\n0 1 0\n", &quiet());
    assert!(stderr.is_empty(), "{stderr}");
    assert_eq!(stdout, "\"(a & !b)\"\n");
}

#[test]
fn joins_terms_in_row_order() {
    let xor = "0 0 0\n0 1 1\n1 0 1\n1 1 0\n";
    let (stdout, _) = find(xor, &quiet());
    assert_eq!(stdout, "\"(!a & b) | (a & !b)\"\n");
}

#[test]
fn echoes_the_table_by_default() {
    let (stdout, _) = find("0  1   1\n\n1 1 0\n", &Config::default());
    assert_eq!(stdout, "0 1 1\n1 1 0\n\"(!a & b)\"\n");
}

#[test]
fn table_without_true_rows_is_empty() {
    let (stdout, stderr) = find("0 0 0\n1 1 0\n", &quiet());
    assert!(stderr.is_empty());
    assert_eq!(stdout, "\"\"\n");

    let (stdout, _) = find("", &quiet());
    assert_eq!(stdout, "\"\"\n");
}

#[test]
fn synthesized_expression_reproduces_the_table() {
    let majority = "0 0 0 0\n0 0 1 0\n0 1 0 0\n0 1 1 1\n1 0 0 0\n1 0 1 1\n1 1 0 1\n1 1 1 1\n";
    let file = table_file(majority);

    let mut context = Context::new(quiet());
    let Flow::Continue(found) =
        context.execute_line(&format!("FIND \"{}\"", file.path().display()), 1)
               .unwrap()
    else {
        panic!("FIND ended the session");
    };

    context.execute_line(&format!("DEFINE maj(a, b, c) {}", found.trim_end()), 2)
           .unwrap();
    let all = context.run_all("maj", 3).unwrap();
    let results: Vec<&str> = all.lines()
                                .skip(1)
                                .map(|row| row.rsplit(' ').next().unwrap())
                                .collect();
    let expected: Vec<&str> = majority.lines()
                                      .map(|row| row.rsplit(' ').next().unwrap())
                                      .collect();
    assert_eq!(results, expected);
}

#[test]
fn missing_file_abandons_only_the_command() {
    let script = "FIND \"definitely/not/here.txt\"\nDEFINE id(a) \"a\"\nRUN id(1)\n";
    let transcript = get_result(script, &Config::default()).unwrap();
    assert_eq!(transcript.stdout, "1\n");
    assert!(transcript.stderr
                      .contains("Error on line 1: Failed to read truth table 'definitely/not/here.txt'"));
}

#[test]
fn too_many_columns_are_unsupported() {
    let wide = format!("{}1\n", "1 ".repeat(27));
    let file = table_file(&wide);
    let mut context = Context::new(quiet());
    let error = context.execute_line(&format!("FIND \"{}\"", file.path().display()), 4)
                       .unwrap_err();
    assert_eq!(error,
               Error::Runtime(RuntimeError::UnsupportedColumnCount { found:   27,
                                                                     maximum: 26,
                                                                     line:    4, }));
}

#[test]
fn malformed_tables_are_rejected() {
    let (_, stderr) = find("0 1 x\n", &quiet());
    assert!(stderr.contains("'x' is not an integer"), "{stderr}");

    let (_, stderr) = find("0 1 1\n1\n", &quiet());
    assert!(stderr.contains("row 2 has 1 column(s)"), "{stderr}");
}

#[test]
fn undecodable_table_is_malformed() {
    let mut file = NamedTempFile::new().expect("Failed to create temporary file");
    file.write_all(b"0 1 1\n\xff\xfe 1\n")
        .expect("Failed to write truth table");

    let mut context = Context::new(quiet());
    let error = context.execute_line(&format!("FIND \"{}\"", file.path().display()), 5)
                       .unwrap_err();
    assert!(matches!(error,
                     Error::Runtime(RuntimeError::MalformedTruthTable { line: 5, .. })),
            "{error}");
}

#[test]
fn ragged_rows_use_their_own_width() {
    let (stdout, stderr) = find("0 1 1\n1 1 0 1\n", &quiet());
    assert!(stderr.is_empty());
    assert_eq!(stdout, "\"(!a & b) | (a & b & !c)\"\n");
}

#[test]
fn bare_paths_are_accepted() {
    let file = table_file("1 1\n");
    let script = format!("FIND {}\n", file.path().display());
    let transcript = get_result(&script, &quiet()).unwrap();
    assert_eq!(transcript.stdout, "\"(a)\"\n");
}
