use std::fmt;
use std::str::FromStr;

/// Errors reported by the tag list when an operation is not allowed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormulaError {
    #[error("tag index {index} out of range for {len} tags")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("cannot delete the last remaining tag")]
    LastTag,

    #[error("unknown operator: {0}")]
    UnknownOperator(String),
}

/// Operator tokens offered by the operator buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Power,
    OpenParen,
    CloseParen,
}

impl Operator {
    /// Button order: `+ - * / ^ ( )`
    pub const ALL: [Operator; 7] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Multiply,
        Operator::Divide,
        Operator::Power,
        Operator::OpenParen,
        Operator::CloseParen,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Power => "^",
            Operator::OpenParen => "(",
            Operator::CloseParen => ")",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| FormulaError::UnknownOperator(s.to_string()))
    }
}
