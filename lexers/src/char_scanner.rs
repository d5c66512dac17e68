#![deny(warnings)]

use crate::scanner::Scanner;

static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
static OPS: &[char] = &['+', '-', '*', '/', '^', '(', ')'];


impl<I: Iterator<Item=char>> Scanner<I> {
    // discard any run of whitespace along with whatever was pending
    pub fn ignore_ws(&mut self) {
        self.skip_matching(|c| c.is_whitespace());
        self.ignore();
    }

    // a single decimal digit, operands are never grouped
    pub fn scan_digit(&mut self) -> Option<u8> {
        let d = self.accept_any(DIGITS)?;
        self.ignore();
        d.to_digit(10).map(|d| d as u8)
    }

    pub fn scan_math_op(&mut self) -> Option<char> {
        let op = self.accept_any(OPS)?;
        self.ignore();
        Some(op)
    }
}

///////////////////////////////////////////////////////////////////////////////
