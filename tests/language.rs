use std::{error::Error, fs};

use rill::{
    interpreter::{
        evaluator::core::Context,
        lexer::{Token, tokenize},
        parser::statement::parse_program,
    },
    run_with_context,
};
use walkdir::WalkDir;

fn run_capture(src: &str) -> Result<String, Box<dyn Error>> {
    let mut context = Context::with_output(Vec::new());
    run_with_context(src, &mut context)?;

    Ok(String::from_utf8(context.into_output())?)
}

fn assert_output(src: &str, expected: &str) {
    match run_capture(src) {
        Ok(output) => assert_eq!(output, expected, "Unexpected output for:\n{src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_failure(src: &str) {
    if run_capture(src).is_ok() {
        panic!("Script succeeded but was expected to fail:\n{src}")
    }
}

#[test]
fn script_files_produce_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "rill")
                                     })
    {
        count += 1;

        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = fs::read_to_string(path.with_extension("out")).unwrap_or_else(|e| {
                           panic!("Failed to read expected output for {path:?}: {e}")
                       });

        match run_capture(&source) {
            Ok(output) => assert_eq!(output, expected, "Unexpected output for {path:?}"),
            Err(e) => panic!("Script {path:?} failed: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[test]
fn arithmetic_and_precedence() {
    assert_output("print 1 + 2 * 3", "7");
    assert_output("print (1 + 2) * 3", "9");
    assert_output("print 10 / 4", "2.5");
    assert_output("print 2 * -3", "-6");
    assert_output("print 8 - 5 - 1", "2");
}

#[test]
fn division_follows_ieee_semantics() {
    assert_output("print 1 / 0", "inf");
    assert_output("print -1 / 0", "-inf");
    assert_output("print 0 / 0", "NaN");
}

#[test]
fn assignments_round_trip_through_the_environment() {
    assert_output("huy = 2 print huy", "2");
    assert_output("x = 1 x = x + 1 print x", "2");
    assert_output("a = 1 b = a + 1 print a + b", "3");
}

#[test]
fn undefined_variables_read_as_zero() {
    assert_output("print nothing", "0");
    assert_output("x = missing + 1 print x", "1");
}

#[test]
fn named_constants_are_seeded_and_shadowable() {
    assert_output("print PI > 3.14", "1");
    assert_output("print E > 2.7", "1");
    assert_output("PI = 3 print PI", "3");
}

#[test]
fn text_concatenation() {
    assert_output("print \"a\" + 1", "a1");
    assert_output("print \"a\" + \"b\"", "ab");
    assert_output("print 1 + \"2\"", "3");
    assert_output("print 0 + \"x\"", "0");
}

#[test]
fn text_minus_and_slash_fall_back_to_concatenation() {
    assert_output("print \"a\" - \"b\"", "ab");
    assert_output("print \"a\" / 2", "a2");
}

#[test]
fn text_repetition_truncates_and_clamps() {
    assert_output("print \"ab\" * 3", "ababab");
    assert_output("print \"ab\" * 2.9", "abab");
    assert_output("print \"ab\" * -1", "");
    assert_output("print \"ab\" * 0", "");
}

#[test]
fn text_comparisons_use_lexicographic_order() {
    assert_output("print \"abc\" < \"abd\"", "1");
    assert_output("print \"b\" < \"a\"", "0");
    assert_output("print \"b\" >= \"a\"", "1");
    assert_output("print \"a\" == \"a\"", "1");
    assert_output("print \"a\" != \"a\"", "0");
}

#[test]
fn logical_operators_produce_numeric_booleans() {
    assert_output("print 1 && 2", "1");
    assert_output("print 1 && 0", "0");
    assert_output("print 0 || 3", "1");
    assert_output("print 0 || 0", "0");
}

#[test]
fn equality_applies_at_most_once() {
    assert_failure("print 1 == 1 == 1");
    assert_failure("print 1 != 1 != 1");
}

#[test]
fn if_statements_pick_a_branch() {
    assert_output("if 1 print \"a\" else print \"b\"", "a");
    assert_output("if 0 print \"a\" else print \"b\"", "b");
    assert_output("if 0 print \"a\"", "");
    assert_output("if 2 < 3 { print \"yes\" }", "yes");
}

#[test]
fn text_truthiness_uses_the_numeric_view() {
    assert_output("if \"2\" print \"t\" else print \"f\"", "t");
    assert_output("if \"x\" print \"t\" else print \"f\"", "f");
}

#[test]
fn while_loops_and_break() {
    assert_output("while 1 { print 1; break; }", "1");
    assert_output("i = 3 while i > 0 { print i i = i - 1 }", "321");
}

#[test]
fn break_stops_only_the_innermost_loop() {
    assert_output("i = 0 while i < 2 { while 1 break print i i = i + 1 }",
                  "01");
}

#[test]
fn for_loops_run_header_statements_in_order() {
    assert_output("for i = 0; i < 5; i = i + 1 { print i; if i == 2 break; }",
                  "012");
    assert_output("for i = 0; i < 3; i = i + 1 { } print i", "3");
    assert_output("for i = 0; 0; i = i + 1 print i", "");
}

#[test]
fn break_outside_a_loop_is_a_runtime_error() {
    assert_failure("break");
    assert_failure("if 1 break");
    assert_failure("while 0 print 1 break");
}

#[test]
fn doubled_unary_minus_is_rejected() {
    assert_failure("print --5");
    assert_failure("x = - -5");
    assert_output("print -(-5)", "5");
}

#[test]
fn end_of_input_errors_carry_the_source_line() {
    let err = run_capture("x = 1\ny =").unwrap_err();
    assert!(err.to_string().contains("line 2"), "{err}");

    let err = run_capture("while 1").unwrap_err();
    assert!(err.to_string().contains("line 1"), "{err}");
}

#[test]
fn multiline_text_records_its_starting_line() {
    let tokens = tokenize("x = \"a\nb\"\nbreak").unwrap();

    assert_eq!(tokens[2], (Token::Text("a\nb".to_string()), 1));
    assert_eq!(tokens[3], (Token::Break, 3));
}

#[test]
fn runtime_errors_carry_the_source_line() {
    let err = run_capture("x = 1\ny = 2\nbreak").unwrap_err();
    assert!(err.to_string().contains("line 3"), "{err}");
}

#[test]
fn comments_are_skipped() {
    assert_output("print 1 // trailing comment\nprint 2", "12");
    assert_output("/* leading note */ print 3", "3");
    assert_output("print 1 /* spanning\ntwo lines */ print 2", "12");
}

#[test]
fn unterminated_block_comment_fails() {
    assert_failure("/* never closed");
}

#[test]
fn numeric_literals() {
    assert_output("print 5", "5");
    assert_output("print 5.", "5");
    assert_output("print 0.50", "0.5");
    assert_failure("print 1.2.3");
}

#[test]
fn text_escapes() {
    assert_output("print \"a\\\"b\"", "a\"b");
    assert_output("print \"a\\nb\"", "a\nb");
    assert_output("print \"a\\tb\"", "a\tb");
    // Unknown escapes keep the backslash.
    assert_output("print \"a\\qb\"", "a\\qb");
    assert_output("print \"a\\\\b\"", "a\\\\b");
}

#[test]
fn unterminated_text_literal_fails() {
    assert_failure("print \"abc");
}

#[test]
fn unrecognized_characters_are_skipped() {
    assert_output("print 1 #@, + 2", "3");
    assert_output("print .5", "5");
}

#[test]
fn semicolons_separate_statements() {
    assert_output("print 1; print 2;", "12");
    assert_output(";;;", "");
}

#[test]
fn malformed_statements_fail() {
    assert_failure("+ 1");
    assert_failure("x + 1");
    assert_failure("do");
    assert_failure("continue");
    assert_failure("print *");
    assert_failure("print (1");
    assert_failure("for i = 0 i < 3; i = i + 1 print i");
}

#[test]
fn statements_render_back_to_source_shape() {
    let tokens = tokenize("print 1 + 2 * 3").unwrap();
    let program = parse_program(&mut tokens.iter().peekable()).unwrap();
    assert_eq!(program[0].to_string(), "print 1 + 2 * 3");

    let tokens = tokenize("x = -y").unwrap();
    let program = parse_program(&mut tokens.iter().peekable()).unwrap();
    assert_eq!(program[0].to_string(), "x = -y");
}
