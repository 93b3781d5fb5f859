//! # sqlexpr
//!
//! A dialect-aware builder for SQL boolean/comparison fragments.
//!
//! ## Features
//!
//! - **Fragments, not statements**: build WHERE/HAVING expressions and hand them
//!   to whatever assembles the final query; nothing is executed here
//! - **AND/OR trees**: composites nest by value and render on demand
//! - **Dialect quoting**: literals and identifiers are quoted by a [`SqlDialect`]
//!   (PostgreSQL, MySQL, SQLite)
//! - **Placeholder tracking**: `?`, `$n` and `:name` markers are carried through
//!   in rendering order
//! - **Stateless**: a builder is `Send + Sync` and cheap to clone
//!
//! ## Example
//!
//! ```ignore
//! use sqlexpr::prelude::*;
//!
//! let expr = ExpressionBuilder::for_dialect(PostgresDialect::default());
//!
//! let filter = expr
//!     .and_x([
//!         expr.eq("status", expr.literal("active")?),
//!         expr.is_null("deleted_at"),
//!     ])
//!     .with(expr.or_x([
//!         expr.gt("age", "18"),
//!         expr.in_list("role", ["'admin'", "'owner'"]),
//!     ]));
//!
//! assert_eq!(
//!     filter.to_sql()?,
//!     "(status = 'active') AND (deleted_at IS NULL) AND ((age > 18) OR (role IN ('admin', 'owner')))"
//! );
//! # Ok::<(), sqlexpr::ExprError>(())
//! ```

pub mod builder;
pub mod composite;
pub mod config;
pub mod dialect;
pub mod error;
pub mod expr;
pub mod operator;
pub mod prelude;
pub mod value;

pub use builder::{ExpressionBuilder, InValues, escape_like};
pub use composite::{CompositeExpression, CompositeKind, Part};
pub use config::{DialectConfig, DialectKind};
pub use dialect::{MySqlDialect, PostgresDialect, SqlDialect, SqliteDialect};
pub use error::{ExprError, ExprResult};
pub use expr::{Expression, Placeholder};
pub use operator::Operator;
pub use value::{ParamType, Value};
