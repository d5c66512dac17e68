#![deny(warnings)]

use crate::scanner::Scanner;


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArithToken {
    Digit(u8),
    Op(char),
    OParen, CParen,
    Unknown(char),
}

impl ArithToken {
    // the character this token was read from, U+FFFD for a Digit over 9
    pub fn symbol(&self) -> char {
        match *self {
            ArithToken::Digit(d) => {
                char::from_digit(u32::from(d), 10).unwrap_or(char::REPLACEMENT_CHARACTER)
            }
            ArithToken::Op(op) | ArithToken::Unknown(op) => op,
            ArithToken::OParen => '(',
            ArithToken::CParen => ')',
        }
    }
}

// Whitespace never reaches the consumer, every other char becomes a token.
pub struct ArithTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item=char>> ArithTokenizer<I> {
    pub fn new(source: I) -> Self {
        ArithTokenizer{src: Scanner::new(source)}
    }

    fn get_token(&mut self) -> Option<ArithToken> {
        self.src.ignore_ws();
        if let Some(d) = self.src.scan_digit() {
            Some(ArithToken::Digit(d))
        } else if let Some(op) = self.src.scan_math_op() {
            match op {
                '(' => Some(ArithToken::OParen),
                ')' => Some(ArithToken::CParen),
                _ => Some(ArithToken::Op(op)),
            }
        } else if let Some(c) = self.src.next() {
            self.src.ignore();
            Some(ArithToken::Unknown(c))
        } else {
            None
        }
    }
}

impl<'a> ArithTokenizer<std::str::Chars<'a>> {
    pub fn from_str(source: &'a str) -> Self {
        Self::new(source.chars())
    }
}

impl<I: Iterator<Item=char>> Iterator for ArithTokenizer<I> {
    type Item = ArithToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.get_token()
    }
}

///////////////////////////////////////////////////////////////////////////////
