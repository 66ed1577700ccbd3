use expr_evaluator::operators::OperatorTable;
use expr_evaluator::rpn_converter::SyntaxError;
use expr_evaluator::rpn_evaluator::EvalError;
use expr_evaluator::{process, CalcError};

fn assert_evaluates(input: &str, postfix: &str, result: f64) {
    let evaluation = process(input);
    assert_eq!(evaluation.error, None, "{input}");
    assert_eq!(evaluation.postfix_text(), postfix, "{input}");
    assert_eq!(evaluation.result, Some(result), "{input}");
}

#[test]
fn precedence() {
    assert_evaluates("2 + 3 * 4", "2 3 4 * +", 14.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_evaluates("(2 + 3) * 4", "2 3 + 4 *", 20.0);
}

#[test]
fn power_is_right_associative() {
    assert_evaluates("2 ^ 3 ^ 2", "2 3 2 ^ ^", 512.0);
}

#[test]
fn leading_unary_minus() {
    assert_evaluates("-3 + 5", "3 u- 5 +", 2.0);
}

#[test]
fn unary_minus_after_operator() {
    assert_evaluates("2 * -5", "2 5 u- *", -10.0);
}

#[test]
fn unary_minus_after_paren() {
    assert_evaluates("(-2) * 3", "2 u- 3 *", -6.0);
}

#[test]
fn unary_minus_binds_tighter_than_power() {
    assert_evaluates("-2 ^ 2", "2 u- 2 ^", 4.0);
}

#[test]
fn decimals() {
    assert_evaluates("1.5 * .5 - 2.", "1.5 0.5 * 2 -", -1.25);
}

#[test]
fn division_by_zero() {
    let evaluation = process("5 / 0");
    assert_eq!(
        evaluation.error,
        Some(CalcError::Eval(EvalError::DivisionByZero))
    );
    assert_eq!(evaluation.result, None);
    assert!(evaluation.postfix.is_empty());
    assert!(evaluation.trace.is_empty());
}

#[test]
fn unmatched_parentheses() {
    for input in ["(2 + 3", "2 + 3)", ")", "(", "((", "2 * ("] {
        assert_eq!(
            process(input).error,
            Some(CalcError::Syntax(SyntaxError::UnmatchedParen)),
            "{input}"
        );
    }
}

#[test]
fn trace_snapshots() {
    let evaluation = process("(2 + 3) * 4");
    let trace: Vec<(&str, &[f64])> = evaluation
        .trace
        .iter()
        .map(|line| (line.label.as_str(), line.stack.as_slice()))
        .collect();

    assert_eq!(
        trace,
        vec![
            ("PUSH 2", &[2.0][..]),
            ("PUSH 3", &[2.0, 3.0][..]),
            ("2 + 3 -> 5", &[5.0][..]),
            ("PUSH 4", &[5.0, 4.0][..]),
            ("5 * 4 -> 20", &[20.0][..]),
        ]
    );
}

#[test]
fn custom_table_is_honored() {
    let evaluation = expr_evaluator::pipeline::process_with("8 / 2 / 2", &OperatorTable::standard());
    assert_eq!(evaluation.postfix_text(), "8 2 / 2 /");
    assert_eq!(evaluation.result, Some(2.0));
}

#[test]
fn process_is_repeatable() {
    for input in ["3 + 4 * 2 / (1 - 5) ^ 2 ^ 3", "2 $ 3", "((1)"] {
        assert_eq!(process(input), process(input), "{input}");
    }
}

#[test]
fn concurrent_requests() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let input = format!("{i} * ({i} + 1)");
                (i, process(&input).result)
            })
        })
        .collect();

    for handle in handles {
        let (i, result) = handle.join().unwrap();
        assert_eq!(result, Some((i * (i + 1)) as f64));
    }
}

#[test]
fn postfix_keeps_input_precision() {
    let evaluation = process("1.0000000000001 + 0");
    assert_eq!(evaluation.postfix, vec!["1.0000000000001", "0", "+"]);
    assert_eq!(evaluation.result_text().as_deref(), Some("1.0000000000001"));
}
