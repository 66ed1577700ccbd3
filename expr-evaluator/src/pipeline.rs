//! End-to-end processing of one expression: tokenize, convert, evaluate.

use crate::format::{format_number, format_tokens};
use crate::operators::OperatorTable;
use crate::rpn_converter::{RPNExpr, RpnConverter, SyntaxError};
use crate::rpn_evaluator::{EvalError, RpnEvaluator, Trace};
use crate::tokenizer::{LexError, TokenizedInput, Tokenizer};

/// Expressions shipped with the calculator for demonstration.
pub const SAMPLES: [&str; 6] = [
    "3 + 4 * 2 / (1 - 5) ^ 2 ^ 3",
    "-3 + 4 * (2 - 1)",
    "2^3^2",
    " ( 3.5 + 2.1 ) * 4 - -2 ",
    "10 / (5-5)",
    "3 + * 4",
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    #[error("Failed to tokenize the input: {0}")]
    Lex(#[from] LexError),
    #[error("Failed to convert the input to RPN: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("Failed to evaluate the RPN expression: {0}")]
    Eval(#[from] EvalError),
}

impl CalcError {
    /// Stable `Stage.Kind` name for display layers.
    pub fn kind(&self) -> &'static str {
        match self {
            CalcError::Lex(LexError::InvalidChar(_)) => "LexError.InvalidChar",
            CalcError::Lex(LexError::MalformedNumber(_)) => "LexError.MalformedNumber",
            CalcError::Syntax(SyntaxError::UnmatchedParen) => "SyntaxError.UnmatchedParen",
            CalcError::Syntax(SyntaxError::EmptyExpression) => "SyntaxError.EmptyExpression",
            CalcError::Syntax(SyntaxError::MissingOperand) => "SyntaxError.MissingOperand",
            CalcError::Eval(EvalError::StackUnderflow(_)) => "EvalError.StackUnderflow",
            CalcError::Eval(EvalError::MalformedExpression) => "EvalError.MalformedExpression",
            CalcError::Eval(EvalError::DivisionByZero) => "EvalError.DivisionByZero",
        }
    }
}

/// One line of the evaluation trace as handed to a display layer.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceLine {
    pub label: String,
    pub stack: Vec<f64>,
}

/// Everything a display layer needs for one request.
///
/// On failure only `error` is populated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Evaluation {
    pub tokens: Vec<String>,
    pub postfix: Vec<String>,
    pub result: Option<f64>,
    pub trace: Vec<TraceLine>,
    pub error: Option<CalcError>,
}

impl Evaluation {
    pub fn postfix_text(&self) -> String {
        self.postfix.join(" ")
    }

    pub fn result_text(&self) -> Option<String> {
        self.result.map(format_number)
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Result of running all three stages.
#[derive(Debug, Clone, PartialEq)]
pub struct Computation {
    pub tokens: TokenizedInput,
    pub rpn: RPNExpr,
    pub value: f64,
    pub trace: Trace,
}

pub fn compute(input: &str, operators: &OperatorTable) -> Result<Computation, CalcError> {
    let tokens = Tokenizer::new().tokenize(input)?;
    let rpn = RpnConverter::new(operators).convert(&tokens)?;
    let (value, trace) = RpnEvaluator::new(operators).evaluate(&rpn)?;

    Ok(Computation {
        tokens,
        rpn,
        value,
        trace,
    })
}

/// Processes `input` with the given operator table.
pub fn process_with(input: &str, operators: &OperatorTable) -> Evaluation {
    match compute(input, operators) {
        Ok(computation) => Evaluation {
            tokens: format_tokens(&computation.tokens, operators),
            postfix: format_tokens(&computation.rpn, operators),
            result: Some(computation.value),
            trace: computation
                .trace
                .iter()
                .map(|step| TraceLine {
                    label: step.label(),
                    stack: step.stack.clone(),
                })
                .collect(),
            error: None,
        },
        Err(e) => Evaluation {
            error: Some(e),
            ..Evaluation::default()
        },
    }
}

/// Processes `input` with the standard operator table.
pub fn process(input: &str) -> Evaluation {
    process_with(input, &OperatorTable::STANDARD)
}
