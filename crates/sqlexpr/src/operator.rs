//! Comparison operators.
//!
//! [`Operator`] is the fixed set of operators accepted by
//! [`ExpressionBuilder::comparison`](crate::ExpressionBuilder::comparison).
//! It parses from either the enumeration name (`EQ`, `NOT_LIKE`) or the SQL
//! token (`=`, `NOT LIKE`).

use crate::error::{ExprError, ExprResult};
use std::fmt;
use std::str::FromStr;

/// Comparison operator.
///
/// # Example
/// ```ignore
/// use sqlexpr::Operator;
///
/// assert_eq!("<>".parse::<Operator>()?, Operator::Neq);
/// assert_eq!("not_like".parse::<Operator>()?, Operator::NotLike);
/// assert_eq!(Operator::Gte.token(), ">=");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal: `=`
    Eq,
    /// Not equal: `<>`
    Neq,
    /// Less than: `<`
    Lt,
    /// Less than or equal: `<=`
    Lte,
    /// Greater than: `>`
    Gt,
    /// Greater than or equal: `>=`
    Gte,
    /// `LIKE`
    Like,
    /// `NOT LIKE`
    NotLike,
    /// `IN`
    In,
    /// `NOT IN`
    NotIn,
    /// `IS NULL`
    IsNull,
    /// `IS NOT NULL`
    IsNotNull,
}

impl Operator {
    /// All supported operators.
    pub const ALL: [Operator; 12] = [
        Operator::Eq,
        Operator::Neq,
        Operator::Lt,
        Operator::Lte,
        Operator::Gt,
        Operator::Gte,
        Operator::Like,
        Operator::NotLike,
        Operator::In,
        Operator::NotIn,
        Operator::IsNull,
        Operator::IsNotNull,
    ];

    /// The SQL token for this operator.
    pub fn token(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Neq => "<>",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT LIKE",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
            Operator::IsNull => "IS NULL",
            Operator::IsNotNull => "IS NOT NULL",
        }
    }

    /// The enumeration name (`EQ`, `NOT_LIKE`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Operator::Eq => "EQ",
            Operator::Neq => "NEQ",
            Operator::Lt => "LT",
            Operator::Lte => "LTE",
            Operator::Gt => "GT",
            Operator::Gte => "GTE",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT_LIKE",
            Operator::In => "IN",
            Operator::NotIn => "NOT_IN",
            Operator::IsNull => "IS_NULL",
            Operator::IsNotNull => "IS_NOT_NULL",
        }
    }

    /// Whether the operator takes no right-hand operand.
    pub fn is_unary(self) -> bool {
        matches!(self, Operator::IsNull | Operator::IsNotNull)
    }

    /// Parse an operator from its name or SQL token.
    pub fn parse(s: &str) -> ExprResult<Self> {
        let normalized = s
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_uppercase();

        let op = match normalized.as_str() {
            "=" | "EQ" => Operator::Eq,
            "<>" | "!=" | "NEQ" => Operator::Neq,
            "<" | "LT" => Operator::Lt,
            "<=" | "LTE" => Operator::Lte,
            ">" | "GT" => Operator::Gt,
            ">=" | "GTE" => Operator::Gte,
            "LIKE" => Operator::Like,
            "NOT LIKE" | "NOT_LIKE" => Operator::NotLike,
            "IN" => Operator::In,
            "NOT IN" | "NOT_IN" => Operator::NotIn,
            "IS NULL" | "IS_NULL" => Operator::IsNull,
            "IS NOT NULL" | "IS_NOT_NULL" => Operator::IsNotNull,
            _ => return Err(ExprError::invalid_operator(s)),
        };
        Ok(op)
    }
}

impl FromStr for Operator {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::parse(s)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tokens() {
        assert_eq!(Operator::parse("=").unwrap(), Operator::Eq);
        assert_eq!(Operator::parse("<>").unwrap(), Operator::Neq);
        assert_eq!(Operator::parse("!=").unwrap(), Operator::Neq);
        assert_eq!(Operator::parse("<=").unwrap(), Operator::Lte);
        assert_eq!(Operator::parse("not like").unwrap(), Operator::NotLike);
        assert_eq!(Operator::parse("IS  NOT   NULL").unwrap(), Operator::IsNotNull);
    }

    #[test]
    fn parses_names() {
        assert_eq!(Operator::parse("eq").unwrap(), Operator::Eq);
        assert_eq!(Operator::parse("NOT_IN").unwrap(), Operator::NotIn);
        assert_eq!(Operator::parse("is_null").unwrap(), Operator::IsNull);
    }

    #[test]
    fn name_and_token_round_trip() {
        for op in Operator::ALL {
            assert_eq!(Operator::parse(op.name()).unwrap(), op);
            assert_eq!(Operator::parse(op.token()).unwrap(), op);
        }
    }

    #[test]
    fn rejects_unknown() {
        let err = Operator::parse("BOGUS").unwrap_err();
        assert_eq!(err, ExprError::InvalidOperator("BOGUS".into()));
        assert!("".parse::<Operator>().is_err());
        assert!("===".parse::<Operator>().is_err());
    }

    #[test]
    fn unary_operators() {
        assert!(Operator::IsNull.is_unary());
        assert!(Operator::IsNotNull.is_unary());
        assert!(!Operator::Eq.is_unary());
    }
}
