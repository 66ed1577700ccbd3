use std::iter;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Op {
    Plus,
    Minus,
    Mult,
    Div,
    Pow,
    /// Unary minus, kept distinct from the binary one.
    Neg,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    Number(f64),
    Operator(Op),
    LParen,
    RParen,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("Unsupported character: '{0}'")]
    InvalidChar(char),
    #[error("Invalid numeric literal: {0}")]
    MalformedNumber(String),
}

#[derive(Debug, PartialEq, Clone)]
pub struct TokenizedInput(pub Vec<Token>);

impl std::ops::Deref for TokenizedInput {
    type Target = Vec<Token>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for TokenizedInput {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// A sign is unary at the start of input and right after an operator or `(`.
    fn makes_unary(prev: Option<&Token>) -> bool {
        !matches!(prev, Some(Token::Number(_)) | Some(Token::RParen))
    }

    pub fn tokenize(&self, input: &str) -> Result<TokenizedInput, LexError> {
        use Token::*;

        let mut tokens = Vec::new();
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                c if c.is_ascii_digit() || c == '.' => {
                    let literal: String = iter::once(c)
                        .chain(iter::from_fn(|| {
                            chars.by_ref().next_if(|c| c.is_ascii_digit() || *c == '.')
                        }))
                        .collect();

                    if literal.matches('.').count() > 1 {
                        return Err(LexError::MalformedNumber(literal));
                    }

                    let value: f64 = literal
                        .parse()
                        .map_err(|_| LexError::MalformedNumber(literal.clone()))?;
                    tokens.push(Number(value));
                }
                '+' => {
                    // Unary plus is a no-op.
                    if !Self::makes_unary(tokens.last()) {
                        tokens.push(Operator(Op::Plus));
                    }
                }
                '-' => {
                    if Self::makes_unary(tokens.last()) {
                        tokens.push(Operator(Op::Neg));
                    } else {
                        tokens.push(Operator(Op::Minus));
                    }
                }
                '*' => tokens.push(Operator(Op::Mult)),
                '/' => tokens.push(Operator(Op::Div)),
                '^' => tokens.push(Operator(Op::Pow)),
                '(' => tokens.push(LParen),
                ')' => tokens.push(RParen),
                c if c.is_whitespace() => {}
                _ => {
                    return Err(LexError::InvalidChar(c));
                }
            }
        }

        Ok(TokenizedInput(tokens))
    }
}
