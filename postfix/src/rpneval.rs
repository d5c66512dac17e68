use crate::operators::apply;
use crate::parser::RPNExpr;
use lexers::{ArithToken, ArithTokenizer};
use std::{error, fmt};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvalErr {
    DivisionByZero,
    InvalidOperator(char),
    InvalidCharacter(char),
    MalformedPostfix,
    Overflow,
}

impl fmt::Display for EvalErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            EvalErr::DivisionByZero => write!(f, "division by zero"),
            EvalErr::InvalidOperator(op) => write!(f, "invalid operator '{}'", op),
            EvalErr::InvalidCharacter(c) => write!(f, "unexpected character '{}'", c),
            EvalErr::MalformedPostfix => write!(f, "postfix expression is wrong"),
            EvalErr::Overflow => write!(f, "integer overflow"),
        }
    }
}

impl error::Error for EvalErr {}

pub struct PostfixEvaluator;

impl PostfixEvaluator {
    /// Evaluates a postfix string such as `"234*+"`. Whitespace is ignored.
    pub fn eval_str(postfix: &str) -> Result<i64, EvalErr> {
        Self::eval_tokens(&mut ArithTokenizer::from_str(postfix))
    }

    pub fn eval(rpn: &RPNExpr) -> Result<i64, EvalErr> {
        Self::eval_tokens(&mut rpn.iter().copied())
    }

    pub fn eval_tokens(tokens: &mut impl Iterator<Item = ArithToken>) -> Result<i64, EvalErr> {
        let mut operands = Vec::new();

        while let Some(token) = tokens.next() {
            match token {
                ArithToken::Digit(d) => operands.push(i64::from(d)),
                ArithToken::Op(op) => {
                    let r = operands.pop().ok_or(EvalErr::MalformedPostfix)?;
                    let l = operands.pop().ok_or(EvalErr::MalformedPostfix)?;
                    let result = apply(op, l, r)?;
                    debug!("{} {} {} = {}", l, op, r, result);
                    operands.push(result);
                }
                _ => return Err(EvalErr::InvalidCharacter(token.symbol())),
            }
        }
        let result = operands.pop().ok_or(EvalErr::MalformedPostfix)?;
        if !operands.is_empty() {
            return Err(EvalErr::MalformedPostfix);
        }
        Ok(result)
    }
}
