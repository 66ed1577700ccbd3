use crate::format::format_number;
use crate::operators::OperatorTable;
use crate::rpn_converter::RPNExpr;
use crate::tokenizer::Op;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("Insufficient operands for '{0}'")]
    StackUnderflow(&'static str),
    #[error("The expression could not be evaluated to a single value")]
    MalformedExpression,
    #[error("Division by zero")]
    DivisionByZero,
}

/// What a single evaluation step did.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceAction {
    Push(f64),
    Unary { op: Op, operand: f64, result: f64 },
    Binary {
        op: Op,
        /// Symbol from the table the evaluator ran with.
        symbol: &'static str,
        lhs: f64,
        rhs: f64,
        result: f64,
    },
}

impl TraceAction {
    /// Value the step left on top of the stack.
    pub fn value(&self) -> f64 {
        match *self {
            TraceAction::Push(value) => value,
            TraceAction::Unary { result, .. } | TraceAction::Binary { result, .. } => result,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TraceStep {
    pub action: TraceAction,
    /// Evaluation stack right after the step, bottom first.
    pub stack: Vec<f64>,
}

impl TraceStep {
    pub fn label(&self) -> String {
        match self.action {
            TraceAction::Push(value) => format!("PUSH {}", format_number(value)),
            TraceAction::Unary { operand, result, .. } => format!(
                "UNARY_MINUS {} -> {}",
                format_number(operand),
                format_number(result)
            ),
            TraceAction::Binary {
                symbol,
                lhs,
                rhs,
                result,
                ..
            } => format!(
                "{} {} {} -> {}",
                format_number(lhs),
                symbol,
                format_number(rhs),
                format_number(result)
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trace(pub Vec<TraceStep>);

impl std::ops::Deref for Trace {
    type Target = Vec<TraceStep>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub struct RpnEvaluator<'a> {
    operators: &'a OperatorTable,
}

impl<'a> RpnEvaluator<'a> {
    pub fn new(operators: &'a OperatorTable) -> Self {
        Self { operators }
    }

    /// Applies `op` to the operands popped for it, bottom first.
    fn apply(op: Op, symbol: &'static str, operands: &[f64]) -> Result<TraceAction, EvalError> {
        use crate::tokenizer::Op::*;

        let (lhs, rhs, result) = match (op, operands) {
            (Neg, &[operand]) => {
                return Ok(TraceAction::Unary {
                    op,
                    operand,
                    result: -operand,
                })
            }
            (Plus, &[a, b]) => (a, b, a + b),
            (Minus, &[a, b]) => (a, b, a - b),
            (Mult, &[a, b]) => (a, b, a * b),
            (Div, &[_, b]) if b == 0.0 => return Err(EvalError::DivisionByZero),
            (Div, &[a, b]) => (a, b, a / b),
            (Pow, &[a, b]) => (a, b, a.powf(b)),
            // Arity in the table disagrees with the operator.
            _ => return Err(EvalError::MalformedExpression),
        };

        Ok(TraceAction::Binary {
            op,
            symbol,
            lhs,
            rhs,
            result,
        })
    }

    /// Evaluates the postfix expression, recording the stack after every token.
    pub fn evaluate(&self, tokens: &RPNExpr) -> Result<(f64, Trace), EvalError> {
        use crate::tokenizer::Token::*;

        let mut eval_stack: Vec<f64> = Vec::with_capacity(tokens.len());
        let mut trace = Vec::with_capacity(tokens.len());

        for token in tokens.iter() {
            let action = match *token {
                Number(num) => {
                    eval_stack.push(num);
                    TraceAction::Push(num)
                }
                Operator(op) => {
                    let desc = self.operators.get(op);
                    if eval_stack.len() < desc.arity {
                        return Err(EvalError::StackUnderflow(desc.symbol));
                    }

                    let operands = eval_stack.split_off(eval_stack.len() - desc.arity);
                    let action = Self::apply(op, desc.symbol, &operands)?;
                    eval_stack.push(action.value());
                    action
                }
                LParen | RParen => return Err(EvalError::MalformedExpression),
            };

            trace.push(TraceStep {
                action,
                stack: eval_stack.clone(),
            });
        }

        match eval_stack[..] {
            [result] => Ok((result, Trace(trace))),
            _ => Err(EvalError::MalformedExpression),
        }
    }
}
