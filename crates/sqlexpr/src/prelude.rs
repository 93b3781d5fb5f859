//! Convenient imports for typical `sqlexpr` usage.
//!
//! ```ignore
//! use sqlexpr::prelude::*;
//! ```

pub use crate::{
    CompositeExpression, DialectConfig, ExprError, ExprResult, Expression, ExpressionBuilder,
    MySqlDialect, Operator, ParamType, Placeholder, PostgresDialect, SqlDialect, SqliteDialect,
    Value, escape_like,
};
