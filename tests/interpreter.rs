use circuitry::{
    config::Config,
    error::{Error, ParseError, RuntimeError},
    get_result,
    interpreter::evaluator::core::{Context, Flow},
    run,
};

fn assert_output(src: &str, expected: &str) {
    let transcript = get_result(src, &Config::default()).unwrap();
    assert!(transcript.stderr.is_empty(),
            "Script reported errors:\n{}",
            transcript.stderr);
    assert_eq!(transcript.stdout, expected);
}

fn assert_error(src: &str, message: &str) {
    let transcript = get_result(src, &Config::default()).unwrap();
    assert!(transcript.stderr.contains(message),
            "Expected an error containing {message:?}, found:\n{}",
            transcript.stderr);
}

fn execute(context: &mut Context, line: usize, source: &str) -> Result<Flow, Error> {
    context.execute_line(source, line)
}

#[test]
fn run_evaluates_defined_circuit() {
    assert_output("DEFINE foo(a,b) \"a & b\"\nRUN foo(1,1)\nRUN foo(1,0)\n", "1\n0\n");
    assert_output("DEFINE or3(a, b, c) \"a | b | c\"\nRUN or3(0, 0, 0)\nRUN or3(0, 0, 1)\n",
                  "0\n1\n");
}

#[test]
fn run_respects_precedence_and_parentheses() {
    assert_output("DEFINE f(a, b, c) \"a | b & c\"\nRUN f(1, 0, 0)\n", "1\n");
    assert_output("DEFINE g(a, b, c) \"(a | b) & c\"\nRUN g(1, 0, 0)\n", "0\n");
    assert_output("DEFINE h(a, b) \"!a & b\"\nRUN h(0, 1)\nRUN h(1, 1)\n", "1\n0\n");
    assert_output("DEFINE k(a, b) \"!(a & b)\"\nRUN k(1, 1)\nRUN k(0, 1)\n", "0\n1\n");
    assert_output("DEFINE n(a) \"!!a\"\nRUN n(1)\n", "1\n");
}

#[test]
fn argument_lists_accept_any_separator() {
    assert_output("DEFINE x(a b) \"a&b\"\nRUN x(11)\nRUN x(1 0)\n", "1\n0\n");
    assert_output("DEFINE   spaced ( a , b )   \"a | b\"\nRUN spaced(0,1)\n", "1\n");
}

#[test]
fn all_enumerates_in_truth_table_order() {
    assert_output("DEFINE inv(a) \"!a\"\nALL inv\n",
                  "Execute inv \"!a\"\n0 | res: 1\n1 | res: 0\n");
    assert_output("DEFINE imp(a, b) \"!a | b\"\nALL imp\n",
                  "Execute imp \"!a | b\"\n0 | 0 | res: 1\n0 | 1 | res: 1\n1 | 0 | res: 0\n1 | 1 | res: 1\n");
}

#[test]
fn all_reports_errors_of_empty_expression() {
    let mut context = Context::new(Config::default());
    context.storage
           .insert(circuitry::circuit::Circuit::new("none", vec![], "\"\"", 1).unwrap(), 1)
           .unwrap();
    let error = context.run_all("none", 2).unwrap_err();
    assert_eq!(error,
               RuntimeError::MalformedExpression { remaining: 0,
                                                   line:      2, });
}

#[test]
fn undeclared_symbol_rejects_definition() {
    let mut context = Context::new(Config::default());

    let error = execute(&mut context, 1, "DEFINE bad(a) \"a & c\"").unwrap_err();
    assert_eq!(error,
               Error::Runtime(RuntimeError::InvalidOperand { symbol:  'c',
                                                             circuit: "bad".to_string(),
                                                             line:    1, }));
    assert!(!context.storage.contains("bad"));
    assert!(matches!(execute(&mut context, 2, "RUN bad(1)"),
                     Err(Error::Runtime(RuntimeError::CircuitNotFound { .. }))));
    assert_eq!(execute(&mut context, 3, "PRINT").unwrap(),
               Flow::Continue(String::new()));
}

#[test]
fn literal_digits_in_definition_must_be_parameters() {
    assert_error("DEFINE one(a) \"a | 1\"\n", "Found token '1'");
}

#[test]
fn redefinition_keeps_original() {
    let src = "DEFINE f(a, b) \"a & b\"\nDEFINE f(a, b) \"a | b\"\nRUN f(1, 0)\nPRINT\n";
    let transcript = get_result(src, &Config::default()).unwrap();
    assert_eq!(transcript.stdout, "0\nf(a, b) \"a & b\"\n");
    assert!(transcript.stderr
                      .contains("Error on line 2: Integrated circuit with name 'f' already exists"));
}

#[test]
fn print_lists_circuits_by_name() {
    assert_output("DEFINE zed(a) \"!a\"\nDEFINE and2(a, b) \"a & b\"\nPRINT\n",
                  "and2(a, b) \"a & b\"\nzed(a) \"!a\"\n");
}

#[test]
fn unknown_circuit_is_reported() {
    assert_error("RUN ghost(1)\n", "Error on line 1: Circuit with name 'ghost' does not exist.");
    assert_error("\nALL ghost\n", "Error on line 2: Circuit with name 'ghost' does not exist.");
}

#[test]
fn unmatched_parenthesis_fails_the_command_only() {
    let src = "DEFINE p(a, b) \"(a & b\"\nRUN p(1, 1)\nDEFINE q(a) \"a)\"\nRUN q(1)\nDEFINE ok(a) \"a\"\nRUN ok(1)\n";
    let transcript = get_result(src, &Config::default()).unwrap();
    assert_eq!(transcript.stdout, "1\n");
    assert!(transcript.stderr
                      .contains("Error on line 2: Mismatch in parentheses found."));
    assert!(transcript.stderr
                      .contains("Error on line 4: Mismatch in parentheses found."));
}

#[test]
fn structural_defects_are_reported() {
    assert_error("DEFINE dangling(a, b) \"a &\"\nRUN dangling(1, 1)\n",
                 "Operator '&' is missing an operand");
    assert_error("DEFINE juxt(a, b) \"a b\"\nRUN juxt(1, 1)\n", "2 values left");
    assert_error("DEFINE empty(a) \"\"\nRUN empty(1)\n", "0 values left");
}

#[test]
fn argument_errors() {
    let mut context = Context::new(Config::default());
    execute(&mut context, 1, "DEFINE and2(a, b) \"a & b\"").unwrap();

    assert_eq!(execute(&mut context, 2, "RUN and2(1)").unwrap_err(),
               Error::Runtime(RuntimeError::ArgumentCountMismatch { expected: 2,
                                                                    found:    1,
                                                                    line:     2, }));
    assert_eq!(execute(&mut context, 3, "RUN and2(1, 2)").unwrap_err(),
               Error::Parse(ParseError::InvalidArgument { found: '2',
                                                          line:  3, }));
}

#[test]
fn syntax_errors() {
    let mut context = Context::new(Config::default());

    assert!(matches!(execute(&mut context, 1, "DEFINE f(a, b) a & b"),
                     Err(Error::Parse(ParseError::ExpectedQuotedString { command: "DEFINE",
                                                                         .. }))));
    assert!(matches!(execute(&mut context, 2, "DEFINE f a, b) \"a\""),
                     Err(Error::Parse(ParseError::ExpectedOpeningParen { .. }))));
    assert!(matches!(execute(&mut context, 3, "RUN f(1, 0"),
                     Err(Error::Parse(ParseError::ExpectedClosingParen { .. }))));
    assert!(matches!(execute(&mut context, 4, "ALL"),
                     Err(Error::Parse(ParseError::UnexpectedEndOfInput { .. }))));
    assert!(matches!(execute(&mut context, 5, "PRINT everything"),
                     Err(Error::Parse(ParseError::UnexpectedTrailingTokens { .. }))));
    assert!(matches!(execute(&mut context, 6, "DEFINE f(a) \"a"),
                     Err(Error::Parse(ParseError::UnexpectedToken { .. }))));
    assert!(context.storage.is_empty());
}

#[test]
fn unrecognized_lines_are_ignored() {
    assert_output("hello world\n\n   \nrun lower(1)\nDEFINED x(a) \"a\"\nPRINT\n", "");
}

#[test]
fn exit_stops_the_session() {
    assert_output("DEFINE id(a) \"a\"\nRUN id(1)\nEXIT\nRUN id(0)\n", "1\n");
}

#[test]
fn undecodable_lines_do_not_end_the_session() {
    let input = b"DEFINE id(a) \"a\"\njunk \xff\xfe line\nRUN id(\xff)\r\nRUN id(1)\n";
    let mut out = Vec::new();
    let mut err = Vec::new();

    run(&input[..], &mut out, &mut err, &Config::default()).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "1\n");
    let stderr = String::from_utf8(err).unwrap();
    assert_eq!(stderr.lines().count(), 1, "{stderr}");
    assert!(stderr.starts_with("Error on line 3:"), "{stderr}");
}

#[test]
fn repeated_parameter_takes_its_last_value() {
    assert_output("DEFINE f(a, a) \"a\"\nRUN f(0, 1)\nRUN f(1, 0)\n", "1\n0\n");
}

#[test]
fn storage_counts_definitions() {
    let config = Config { capacity: 2,
                          ..Config::default() };
    let mut context = Context::new(config);
    assert_eq!(context.storage.capacity(), 2);

    execute(&mut context, 1, "DEFINE a1(a) \"a\"").unwrap();
    execute(&mut context, 2, "DEFINE a1(a) \"!a\"").unwrap_err();
    execute(&mut context, 3, "DEFINE a2(a) \"!a\"").unwrap();
    assert_eq!(context.storage.len(), 2);

    assert_eq!(execute(&mut context, 4, "DEFINE a3(a) \"a\"").unwrap_err(),
               Error::Runtime(RuntimeError::StorageFull { capacity: 2,
                                                          line:     4, }));
    assert_eq!(context.storage.len(), 2);
}

#[test]
fn storage_capacity_is_enforced() {
    let config = Config { capacity: 1,
                          ..Config::default() };
    let transcript = get_result("DEFINE a1(a) \"a\"\nDEFINE a2(a) \"!a\"\nRUN a1(1)\n", &config).unwrap();
    assert_eq!(transcript.stdout, "1\n");
    assert!(transcript.stderr.contains("Circuit storage is full (1 circuits)"));
}

#[test]
fn prompt_is_printed_when_enabled() {
    let config = Config { prompt: true,
                          ..Config::default() };
    let transcript = get_result("DEFINE id(a) \"a\"\nRUN id(0)\nEXIT\n", &config).unwrap();
    assert_eq!(transcript.stdout,
               "Console simulator of Digital Integrated Circuits\nEnter command: Enter command: 0\nEnter command: ");
}
