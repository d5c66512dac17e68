use crate::operators::{assoc, precedence, Assoc};
use crate::parser::RPNExpr;
use lexers::ArithToken;
use std::fmt;

#[derive(Debug, Clone)]
enum AST {
    Leaf(u8),
    Node(char, Box<AST>, Box<AST>),
}

impl RPNExpr {
    // None if operands and operators don't pair up
    fn build_ast(&self) -> Option<AST> {
        let mut nodes = Vec::new();
        for token in self.iter() {
            match *token {
                ArithToken::Digit(d) => nodes.push(AST::Leaf(d)),
                ArithToken::Op(op) => {
                    let rhs = nodes.pop()?;
                    let lhs = nodes.pop()?;
                    nodes.push(AST::Node(op, Box::new(lhs), Box::new(rhs)));
                }
                _ => return None,
            }
        }
        let root = nodes.pop()?;
        if !nodes.is_empty() {
            return None;
        }
        Some(root)
    }

    /// Rebuilds the infix form with the fewest parentheses that keep the
    /// grouping, eg: `23+4*` prints as `(2 + 3) * 4`.
    pub fn to_infix(&self) -> Option<String> {
        fn printer(root: &AST) -> (String, (usize, Assoc)) {
            match root {
                AST::Leaf(d) => (format!("{}", d), (usize::MAX, Assoc::Left)),
                AST::Node(op, lhs, rhs) => {
                    let (lhs, rhs) = (printer(lhs), printer(rhs));
                    let (prec, assoc) = (precedence(*op), assoc(*op));

                    let lh = if prec > (lhs.1).0 || (prec == (lhs.1).0 && assoc != Assoc::Left) {
                        format!("({})", lhs.0)
                    } else {
                        lhs.0
                    };
                    let rh = if prec > (rhs.1).0 || (prec == (rhs.1).0 && assoc != Assoc::Right) {
                        format!("({})", rhs.0)
                    } else {
                        rhs.0
                    };
                    // NOTE: '2+(3+4)' keeps its parens so it parses back to the same rpn
                    (format!("{} {} {}", lh, op, rh), (prec, assoc))
                }
            }
        }
        self.build_ast().map(|root| printer(&root).0)
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for token in self.iter() {
            write!(f, "{}", token.symbol())?;
        }
        Ok(())
    }
}

///////////////////////////////////////////////////////////////////////////////
