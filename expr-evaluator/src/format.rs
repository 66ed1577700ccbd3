use crate::operators::OperatorTable;
use crate::tokenizer::Token;

/// Distance from an integer under which a value is shown as that integer.
const INTEGER_TOLERANCE: f64 = 1e-12;

/// Renders a value for display.
///
/// Values within [`INTEGER_TOLERANCE`] of an integer print without a
/// fractional part (`14`, not `14.000000000000002`); everything else uses the
/// shortest decimal that round-trips.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = value.round();
    if (value - rounded).abs() < INTEGER_TOLERANCE {
        // `-0.0` would otherwise print as "-0".
        if rounded == 0.0 {
            return "0".to_string();
        }
        return format!("{rounded}");
    }

    format!("{value}")
}

/// Renders a single token the way it appears in the infix or postfix listing.
///
/// Numbers keep their full decimal value; only results get integer rounding.
pub fn format_token(token: &Token, operators: &OperatorTable) -> String {
    match token {
        Token::Number(value) => value.to_string(),
        Token::Operator(op) => operators.get(*op).symbol.to_string(),
        Token::LParen => "(".to_string(),
        Token::RParen => ")".to_string(),
    }
}

pub fn format_tokens(tokens: &[Token], operators: &OperatorTable) -> Vec<String> {
    tokens
        .iter()
        .map(|token| format_token(token, operators))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::Op;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(14.0), "14");
        assert_eq!(format_number(-10.0), "-10");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1.0 + 1e-14), "1");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(1e21), "1000000000000000000000");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_tokens() {
        let tokens = [
            Token::Number(3.0),
            Token::Operator(Op::Neg),
            Token::Number(0.5),
            Token::Operator(Op::Minus),
        ];
        assert_eq!(
            format_tokens(&tokens, &OperatorTable::STANDARD),
            vec!["3", "u-", "0.5", "-"]
        );
    }

    #[test]
    fn test_format_tokens_keeps_near_integers() {
        let tokens = [Token::Number(1.0000000000001), Token::Number(2.0)];
        assert_eq!(
            format_tokens(&tokens, &OperatorTable::STANDARD),
            vec!["1.0000000000001", "2"]
        );
    }
}
