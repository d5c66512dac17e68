//! Operator table shared by the converter and the evaluator.
//!
//! Every binary operator is identified by its symbol char. Anything that is
//! not one of `+ - * / ^` ranks below all operators, which lets the converter
//! treat a missing operator as the weakest possible one.

use crate::rpneval::EvalErr;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Assoc {
    Left,
    Right,
}

pub fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^')
}

pub fn precedence(c: char) -> usize {
    match c {
        '+' | '-' => 1,
        '*' | '/' => 2,
        '^' => 3,
        _ => 0,
    }
}

pub fn assoc(c: char) -> Assoc {
    match c {
        '^' => Assoc::Right,
        _ => Assoc::Left,
    }
}

pub fn is_left_assoc(c: char) -> bool {
    assoc(c) == Assoc::Left
}

/// Applies binary operator `op` to `lhs` and `rhs`.
///
/// Division truncates toward zero. Exponentiation is exact; a negative
/// exponent yields the truncated real result (so `2^-1` is `0`).
pub fn apply(op: char, lhs: i64, rhs: i64) -> Result<i64, EvalErr> {
    match op {
        '+' => lhs.checked_add(rhs).ok_or(EvalErr::Overflow),
        '-' => lhs.checked_sub(rhs).ok_or(EvalErr::Overflow),
        '*' => lhs.checked_mul(rhs).ok_or(EvalErr::Overflow),
        '/' if rhs == 0 => Err(EvalErr::DivisionByZero),
        '/' => lhs.checked_div(rhs).ok_or(EvalErr::Overflow),
        '^' => int_pow(lhs, rhs),
        _ => Err(EvalErr::InvalidOperator(op)),
    }
}

// exponentiation by squaring
fn int_pow(base: i64, exp: i64) -> Result<i64, EvalErr> {
    if exp < 0 {
        return match base {
            0 => Err(EvalErr::DivisionByZero),
            1 => Ok(1),
            -1 if exp % 2 == 0 => Ok(1),
            -1 => Ok(-1),
            _ => Ok(0),
        };
    }
    let (mut base, mut exp, mut acc) = (base, exp as u64, 1i64);
    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc.checked_mul(base).ok_or(EvalErr::Overflow)?;
        }
        exp >>= 1;
        if exp > 0 {
            base = base.checked_mul(base).ok_or(EvalErr::Overflow)?;
        }
    }
    Ok(acc)
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_table() {
        for op in "+-*/^".chars() {
            assert!(is_operator(op));
        }
        for c in "()%x7 ".chars() {
            assert!(!is_operator(c));
            assert_eq!(precedence(c), 0);
        }
        assert_eq!(precedence('+'), precedence('-'));
        assert_eq!(precedence('*'), precedence('/'));
        assert!(precedence('+') < precedence('*'));
        assert!(precedence('*') < precedence('^'));
        assert!(!is_left_assoc('^'));
        assert!("+-*/(".chars().all(is_left_assoc));
    }

    #[test]
    fn arithmetic() {
        assert_eq!(apply('+', 2, 3), Ok(5));
        assert_eq!(apply('-', 2, 3), Ok(-1));
        assert_eq!(apply('*', -4, 3), Ok(-12));
        assert_eq!(apply('/', 7, 2), Ok(3));
        assert_eq!(apply('/', -7, 2), Ok(-3));
        assert_eq!(apply('/', 5, 0), Err(EvalErr::DivisionByZero));
        assert_eq!(apply('%', 5, 2), Err(EvalErr::InvalidOperator('%')));
    }

    #[test]
    fn exponentiation() {
        assert_eq!(apply('^', 2, 9), Ok(512));
        assert_eq!(apply('^', -3, 3), Ok(-27));
        assert_eq!(apply('^', 0, 0), Ok(1));
        assert_eq!(apply('^', 9, 0), Ok(1));
        assert_eq!(apply('^', 2, -1), Ok(0));
        assert_eq!(apply('^', 1, -5), Ok(1));
        assert_eq!(apply('^', -1, -3), Ok(-1));
        assert_eq!(apply('^', -1, -4), Ok(1));
        assert_eq!(apply('^', 0, -2), Err(EvalErr::DivisionByZero));
        assert_eq!(apply('^', 3, 39), Ok(4052555153018976267));
        assert_eq!(apply('^', 3, 40), Err(EvalErr::Overflow));
    }

    #[test]
    fn overflow() {
        assert_eq!(apply('+', i64::MAX, 1), Err(EvalErr::Overflow));
        assert_eq!(apply('-', i64::MIN, 1), Err(EvalErr::Overflow));
        assert_eq!(apply('*', i64::MAX, 2), Err(EvalErr::Overflow));
        assert_eq!(apply('/', i64::MIN, -1), Err(EvalErr::Overflow));
    }
}
