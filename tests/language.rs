use std::fs;

use castellano::{
    Report,
    error::{ParseError, RuntimeError},
    interpret,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_blocks(&content).into_iter().enumerate() {
            count += 1;
            let report = interpret(&code);
            if !report.is_clean() || report.output.is_none() {
                panic!("Example {} in {:?} failed:\n{}\nReport: {:?}",
                       i + 1,
                       path,
                       code,
                       report);
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```castellano") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_output(src: &str, expected: &str) {
    let report = interpret(src);
    assert_eq!(report.output.as_deref(),
               Some(expected),
               "Script {src:?} produced {report:?}");
    assert!(report.is_clean(), "Script {src:?} reported errors: {report:?}");
}

fn assert_no_value(src: &str) -> Report {
    let report = interpret(src);
    assert_eq!(report.output, None, "Script {src:?} produced a value: {report:?}");
    report
}

#[test]
fn literals() {
    assert_output("52", "52");
    assert_output("verdadero", "verdadero");
    assert_output("falso", "falso");
}

#[test]
fn assignment() {
    assert_output("a:=falso \n a", "falso");
    assert_output("h0la    := verdadero\n\th0la", "verdadero");
    assert_output("número27 :=27\nnúmero27", "27");
}

#[test]
fn assignment_yields_no_value() {
    let report = assert_no_value("a := 1");
    assert!(report.is_clean());
}

#[test]
fn empty_program_yields_no_value() {
    let report = assert_no_value("");
    assert!(report.is_clean());
    assert_no_value(" \n\t ");
}

#[test]
fn infix_arithmetic_and_equality() {
    assert_output("3+3", "6");
    assert_output("2-5", "-3");
    assert_output("8/4+7*2.", "16");
    assert_output("(2+6)", "8");
    assert_output("(3-(0-8))", "11");
    assert_output("a := (35+7)-(2-10)+1. a", "51");
    assert_output("cincoIgualACuatroMásUno := 5 = 4 + 1. cincoIgualACuatroMásUno.",
                  "verdadero");
    assert_output("verdadero = falso", "falso");
    assert_output("falso = falso", "verdadero");
}

#[test]
fn subtraction_and_division_are_left_associative() {
    assert_output("8 - 4 - 2", "2");
    assert_output("64 / 4 / 2", "8");
}

#[test]
fn division_truncates_toward_zero() {
    assert_output("7 / 2", "3");
    assert_output("(0 - 7) / 2", "-3");
}

#[test]
fn integer_arithmetic_wraps() {
    assert_output("9223372036854775807 + 1", "-9223372036854775808");
    assert_output("-9223372036854775808", "-9223372036854775808");
    assert_output("(0 - 9223372036854775807 - 1) / (0 - 1)", "-9223372036854775808");
}

#[test]
fn prefix_operators() {
    assert_output("-(65-1)", "-64");
    assert_output("2+(-85)", "-83");
    assert_output("no verdadero", "falso");
    assert_output("_está_terminado := falso. no _está_terminado", "verdadero");
}

#[test]
fn unary_minus_takes_the_whole_expression() {
    assert_output("-1 + 2", "-3");
}

#[test]
fn conditionals() {
    assert_output("si verdadero {5.}", "5");
    assert_output("a:=5. si falso {a := 1.} sino {a := a+2. a.}", "7");
    assert_output("a := falso. si no a a := verdadero. si no entonces a := falso. a.",
                  "verdadero");
    assert_output("si 2 = 3-2 a:= 5 si no entonces si 3=1 a := 2 si no entonces a := 1 a",
                  "1");
}

#[test]
fn conditional_without_alternative() {
    let report = assert_no_value("si falso {5}");
    assert!(report.is_clean());
}

#[test]
fn loops() {
    assert_output("a := 0. b := verdadero mientras b {a := a + 1. b := falso} a", "1");
    assert_output("a := 1. i := 0 mientras no (a = 16) {a := 2*a. i:= i+1.} i.", "4");
}

#[test]
fn loop_yields_last_body_value() {
    assert_output("a := 0 mientras a = 0 {a := a + 1. a * 10}", "10");

    let report = assert_no_value("mientras falso {1}");
    assert!(report.is_clean());
}

#[test]
fn loop_condition_must_stay_boolean() {
    let report = assert_no_value("b := verdadero mientras b {b := 1. 5}");
    assert!(matches!(report.runtime_errors.as_slice(),
                     [RuntimeError::ExpectedBoolean { .. }]));

    let report = assert_no_value("mientras 5 {1}");
    assert!(matches!(report.runtime_errors.as_slice(),
                     [RuntimeError::ExpectedBoolean { .. }]));
}

#[test]
fn functions() {
    assert_output("a := función() {b := 5. b.} a()", "5");
    assert_output("func := función(a) {5.} func(2).", "5");
    assert_output("a := función(a. a1) a + a1. b := 0. a(2. 2 + b).", "4");
}

#[test]
fn function_values_render_as_objects() {
    assert_output("f := función() 1. f", "Objeto de tipo función");
}

#[test]
fn functions_are_values() {
    assert_output("doble := función(x) x * 2. aplicar := función(f. v) f(v). aplicar(doble. 21)",
                  "42");
}

#[test]
fn recursion_through_self_application() {
    assert_output("f := función(g. n) si n = 0 {0} sino {n + g(g. n - 1)}. f(f. 4)",
                  "10");
}

#[test]
fn functions_do_not_see_enclosing_bindings() {
    let report = assert_no_value("x := 1. f := función() x. f()");
    assert!(matches!(report.runtime_errors.as_slice(),
                     [RuntimeError::UnknownIdentifier { name, .. }] if name == "x"));
}

#[test]
fn points_are_optional_terminators() {
    assert_output("5.. 6", "6");
    assert_output("si verdadero {1. .}", "1");
    assert_output("a := 1. . a", "1");
}

#[test]
fn points_before_an_operand_are_skipped() {
    assert_output("1 + . 2", "3");
    assert_output("a := . 5. a", "5");
    assert_output("-. . 4", "-4");
}

#[test]
fn block_tolerates_failed_forms() {
    let report = interpret("si verdadero { x. 5 }");
    assert_eq!(report.output.as_deref(), Some("5"));
    assert!(matches!(report.runtime_errors.as_slice(),
                     [RuntimeError::UnknownIdentifier { .. }]));
}

#[test]
fn semantic_errors_yield_no_value() {
    let report = assert_no_value("1 = verdadero");
    assert!(matches!(report.runtime_errors.as_slice(),
                     [RuntimeError::MismatchedOperands { .. }]));

    let report = assert_no_value("verdadero + falso");
    assert!(matches!(report.runtime_errors.as_slice(),
                     [RuntimeError::UnsupportedOperation { .. }]));

    let report = assert_no_value("5 / 0");
    assert!(matches!(report.runtime_errors.as_slice(),
                     [RuntimeError::DivisionByZero { .. }]));

    let report = assert_no_value("si 1 {2}");
    assert!(matches!(report.runtime_errors.as_slice(),
                     [RuntimeError::ExpectedBoolean { .. }]));

    let report = assert_no_value("-verdadero");
    assert!(matches!(report.runtime_errors.as_slice(),
                     [RuntimeError::ExpectedInteger { .. }]));

    let report = assert_no_value("no 5");
    assert!(matches!(report.runtime_errors.as_slice(),
                     [RuntimeError::ExpectedBoolean { .. }]));
}

#[test]
fn errors_are_recorded_once_at_their_origin() {
    let report = assert_no_value("(y + 1) * 2");
    assert!(matches!(report.runtime_errors.as_slice(),
                     [RuntimeError::UnknownIdentifier { name, .. }] if name == "y"));
}

#[test]
fn bad_calls() {
    let report = assert_no_value("f := función(a) a. f(1. 2)");
    assert!(matches!(report.runtime_errors.as_slice(),
                     [RuntimeError::ArgumentCountMismatch { expected: 1, found: 2, .. }]));

    let report = assert_no_value("f := 1. f()");
    assert!(matches!(report.runtime_errors.as_slice(),
                     [RuntimeError::NotAFunction { .. }]));

    let report = assert_no_value("g()");
    assert!(matches!(report.runtime_errors.as_slice(),
                     [RuntimeError::UnknownIdentifier { .. }]));
}

#[test]
fn deep_recursion() {
    assert_output("f := función(g. n) si n = 0 {0} sino {n + g(g. n - 1)}. f(f. 1000)",
                  "500500");
}

#[test]
fn long_operator_chains() {
    let terms = 50_000;
    assert_output(&("1+".repeat(terms) + "1"), &(terms + 1).to_string());
    assert_output(&("1*".repeat(terms) + "1"), "1");
    assert_output(&format!("0{}", " - 1".repeat(terms)), &format!("-{terms}"));
}

#[test]
fn long_runs_of_points() {
    assert_output(&(".".repeat(50_000) + "7"), "7");
    assert_output(&("1 + ".to_string() + &".".repeat(50_000) + "2"), "3");
}

#[test]
fn nested_parentheses() {
    let depth = 500;
    assert_output(&("(".repeat(depth) + "1" + &")".repeat(depth)), "1");

    let depth = 20_000;
    let report = assert_no_value(&("(".repeat(depth) + "1" + &")".repeat(depth)));
    assert!(matches!(report.parse_error, Some(ParseError::NestingTooDeep { .. })));
}

#[test]
fn runaway_recursion_is_stopped() {
    let report = assert_no_value("f := función(g) g(g). f(f)");
    assert!(matches!(report.runtime_errors.as_slice(),
                     [RuntimeError::CallDepthExceeded { .. }]));
}

#[test]
fn failed_assignment_unbinds_the_name() {
    let report = assert_no_value("a := 1. a := 1 / 0. a");
    assert_eq!(report.runtime_errors.len(), 2);
}

#[test]
fn parse_errors_keep_previous_forms() {
    let report = interpret("a := 3. a ) 7");
    assert_eq!(report.output.as_deref(), Some("3"));
    assert!(report.parse_error.is_some());

    let report = interpret("5 :");
    assert_eq!(report.output.as_deref(), Some("5"));
    assert!(report.parse_error.is_some());
}

#[test]
fn parse_errors_drop_the_failing_form() {
    assert!(assert_no_value("- -1").parse_error.is_some());
    assert!(assert_no_value("si verdadero { 1").parse_error.is_some());
    assert!(assert_no_value("no no verdadero").parse_error.is_some());
}
