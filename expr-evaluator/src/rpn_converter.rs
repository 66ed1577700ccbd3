use crate::operators::OperatorTable;
use crate::tokenizer::{Token, TokenizedInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("Mismatched parentheses")]
    UnmatchedParen,
    #[error("Empty expression")]
    EmptyExpression,
    #[error("Missing operand")]
    MissingOperand,
}

#[derive(Debug, PartialEq, Clone)]
pub struct RPNExpr(pub Vec<Token>);

impl std::ops::Deref for RPNExpr {
    type Target = Vec<Token>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for RPNExpr {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

pub struct RpnConverter<'a> {
    operators: &'a OperatorTable,
}

impl<'a> RpnConverter<'a> {
    pub fn new(operators: &'a OperatorTable) -> Self {
        Self { operators }
    }

    /// Error for a position that needed an operand but got `)` or end of input.
    fn missing_operand(prev: Option<&Token>) -> SyntaxError {
        match prev {
            None | Some(Token::LParen) => SyntaxError::EmptyExpression,
            _ => SyntaxError::MissingOperand,
        }
    }

    /// Converts infix notation to Reverse Polish Notation
    /// using the Shunting Yard algorithm.
    pub fn convert(&self, tokens: &TokenizedInput) -> Result<RPNExpr, SyntaxError> {
        use crate::tokenizer::Token::*;
        let mut output = Vec::with_capacity(tokens.len());
        let mut stack: Vec<Token> = Vec::new();

        // True wherever a number, `(` or a prefix operator may appear.
        let mut expect_operand = true;
        let mut prev = None;

        for token in tokens.iter() {
            match *token {
                Number(_) => {
                    output.push(*token);
                    expect_operand = false;
                }
                Operator(op) => {
                    let prefix = self.operators.get(op).arity == 1;
                    if expect_operand && !prefix {
                        return Err(SyntaxError::MissingOperand);
                    }

                    while let Some(&Operator(top)) = stack.last() {
                        if !self.operators.pops_before(top, op) {
                            break;
                        }
                        output.extend(stack.pop());
                    }

                    stack.push(*token);
                    expect_operand = true;
                }
                LParen => {
                    stack.push(*token);
                    expect_operand = true;
                }
                RParen => {
                    if !stack.contains(&LParen) {
                        return Err(SyntaxError::UnmatchedParen);
                    }
                    if expect_operand {
                        return Err(Self::missing_operand(prev));
                    }

                    while let Some(tok) = stack.pop() {
                        if tok == LParen {
                            break;
                        }
                        output.push(tok);
                    }
                }
            }

            prev = Some(token);
        }

        // An unclosed group is reported before a missing operand.
        if stack.contains(&LParen) {
            return Err(SyntaxError::UnmatchedParen);
        }
        if expect_operand {
            return Err(Self::missing_operand(prev));
        }

        // Only operators remain on the stack.
        output.extend(stack.into_iter().rev());

        Ok(RPNExpr(output))
    }
}
