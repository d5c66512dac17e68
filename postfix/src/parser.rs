use crate::operators::{is_left_assoc, is_operator, precedence};
use lexers::{ArithToken, ArithTokenizer};
use std::{error, fmt, ops};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ParseError {
    MismatchedParentheses,
    InvalidCharacter(char),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::MismatchedParentheses => write!(f, "expression with wrong parentheses"),
            ParseError::InvalidCharacter(c) => write!(f, "unexpected character '{}'", c),
        }
    }
}

impl error::Error for ParseError {}

/// Postfix form of an expression: only `Digit` and `Op` tokens, in
/// evaluation order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RPNExpr(pub Vec<ArithToken>);

impl ops::Deref for RPNExpr {
    type Target = [ArithToken];
    fn deref(&self) -> &[ArithToken] {
        &self.0
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, ParseError> {
        Self::parse(&mut ArithTokenizer::from_str(expr))
    }

    pub fn parse(lex: &mut impl Iterator<Item = ArithToken>) -> Result<RPNExpr, ParseError> {
        let mut out = Vec::new();
        let mut stack = Vec::new();

        while let Some(token) = lex.next() {
            match token {
                ArithToken::Digit(_) => out.push(token),
                ArithToken::OParen => stack.push(token),
                ArithToken::CParen => loop {
                    match stack.pop() {
                        Some(ArithToken::OParen) => break,
                        Some(top) => out.push(top),
                        None => return Err(ParseError::MismatchedParentheses),
                    }
                },
                ArithToken::Op(op) if is_operator(op) => {
                    // pop while the stacked op binds tighter, or as tight
                    // and the incoming op groups to the left
                    while let Some(&ArithToken::Op(top)) = stack.last() {
                        let (prec_lhs, prec_rhs) = (precedence(top), precedence(op));
                        if prec_lhs < prec_rhs || (prec_lhs == prec_rhs && !is_left_assoc(op)) {
                            break;
                        }
                        debug!("pop {} before {}", top, op);
                        out.push(ArithToken::Op(top));
                        stack.pop();
                    }
                    stack.push(token);
                }
                ArithToken::Op(c) | ArithToken::Unknown(c) => {
                    return Err(ParseError::InvalidCharacter(c))
                }
            }
        }
        while let Some(top) = stack.pop() {
            match top {
                ArithToken::OParen => return Err(ParseError::MismatchedParentheses),
                token => out.push(token),
            }
        }
        debug!("parsed {:?}", out);
        Ok(RPNExpr(out))
    }
}

/// Converts an infix expression into its postfix string, eg: `"2+3*4"`
/// becomes `"234*+"`. Whitespace in the input is ignored.
pub fn to_postfix(expr: &str) -> Result<String, ParseError> {
    Ok(ShuntingParser::parse_str(expr)?.to_string())
}
