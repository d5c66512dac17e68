extern crate lexers;

// trace conversion/evaluation steps when built with --features debug
macro_rules! debug {
    ($($args:tt)*) => (if cfg!(feature="debug") { eprintln!($($args)*); })
}

pub use operators::{apply, assoc, is_left_assoc, is_operator, precedence, Assoc};

pub use parser::ParseError;
pub use parser::RPNExpr;
pub use parser::ShuntingParser;
pub use parser::to_postfix;

pub use rpneval::EvalErr;
pub use rpneval::PostfixEvaluator;

pub mod operators;
pub mod parser;

mod rpnprint;
mod rpneval;
