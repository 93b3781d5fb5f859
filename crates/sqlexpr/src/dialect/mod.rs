//! Dialect-specific quoting rules.
//!
//! [`SqlDialect`] is the only thing the expression builder knows about a
//! database: how to quote identifiers and literals, and which token to emit for
//! each comparison operator. Implementations are read-only and shared across
//! threads behind an `Arc`.
//!
//! # Example
//! ```ignore
//! use sqlexpr::{PostgresDialect, SqlDialect, Value};
//!
//! let pg = PostgresDialect::default();
//! assert_eq!(pg.quote_identifier("public.User")?, r#""public"."User""#);
//! assert_eq!(pg.quote_literal(&Value::from("o'brien"), None)?, "'o''brien'");
//! # Ok::<(), sqlexpr::ExprError>(())
//! ```

mod mysql;
mod postgres;
mod sqlite;

pub use mysql::MySqlDialect;
pub use postgres::PostgresDialect;
pub use sqlite::SqliteDialect;

use crate::error::{ExprError, ExprResult};
use crate::operator::Operator;
use crate::value::{ParamType, Value};
use std::fmt::{self, Write as _};

/// Quoting and token rules for one database.
pub trait SqlDialect: fmt::Debug + Send + Sync {
    /// Dialect name (e.g. `postgres`).
    fn name(&self) -> &'static str;

    /// Character used to delimit identifiers.
    fn identifier_quote(&self) -> char;

    /// Quote a text value as a string literal.
    fn quote_string(&self, text: &str) -> ExprResult<String>;

    /// Render bytes as a binary literal.
    fn quote_bytes(&self, bytes: &[u8]) -> String;

    /// Render a boolean literal.
    fn boolean_literal(&self, value: bool) -> &'static str;

    /// SQL token for a comparison operator.
    fn comparison_token(&self, op: Operator) -> &'static str {
        op.token()
    }

    /// Quote a (possibly dotted) identifier.
    ///
    /// Each `.`-separated segment is quoted separately and embedded quote
    /// characters are doubled: `public.User` becomes `"public"."User"`.
    fn quote_identifier(&self, name: &str) -> ExprResult<String> {
        if name.is_empty() {
            return Err(ExprError::invalid_identifier("Identifier cannot be empty"));
        }
        if name.contains('\0') {
            return Err(ExprError::invalid_identifier(
                "Identifier cannot contain NUL character",
            ));
        }

        let q = self.identifier_quote();
        let mut out = String::with_capacity(name.len() + 2);
        for (i, segment) in name.split('.').enumerate() {
            if segment.is_empty() {
                return Err(ExprError::invalid_identifier(format!(
                    "Empty identifier segment in '{name}'"
                )));
            }
            if i > 0 {
                out.push('.');
            }
            out.push(q);
            for ch in segment.chars() {
                if ch == q {
                    out.push(q);
                }
                out.push(ch);
            }
            out.push(q);
        }
        Ok(out)
    }

    /// Render `value` as a literal, optionally coerced to `hint`.
    ///
    /// `Value::Null` renders as `NULL` under every hint.
    fn quote_literal(&self, value: &Value, hint: Option<ParamType>) -> ExprResult<String> {
        if value.is_null() {
            return Ok("NULL".to_string());
        }
        match hint {
            None => quote_inferred(self, value),
            Some(ParamType::Null) => Err(unquotable(value, "only NULL can be rendered as NULL")),
            Some(ParamType::Integer) => quote_integer(value),
            Some(ParamType::String) => quote_as_text(self, value, false),
            Some(ParamType::Ascii) => quote_as_text(self, value, true),
            Some(ParamType::Boolean) => quote_boolean(self, value),
            Some(ParamType::Binary | ParamType::LargeObject) => match value {
                Value::Bytes(b) => Ok(self.quote_bytes(b)),
                Value::Text(s) => Ok(self.quote_bytes(s.as_bytes())),
                other => Err(unquotable(other, "expected bytes or text for a binary literal")),
            },
        }
    }
}

fn unquotable(value: &Value, reason: &str) -> ExprError {
    ExprError::unquotable(format!("{value} ({})", value.type_name()), reason)
}

fn quote_inferred<D: SqlDialect + ?Sized>(dialect: &D, value: &Value) -> ExprResult<String> {
    match value {
        Value::Null => Ok("NULL".to_string()),
        Value::Bool(b) => Ok(dialect.boolean_literal(*b).to_string()),
        Value::Int(i) => Ok(i.to_string()),
        Value::Float(f) if !f.is_finite() => Err(unquotable(value, "non-finite float")),
        Value::Float(f) => Ok(f.to_string()),
        Value::Bytes(b) => Ok(dialect.quote_bytes(b)),
        #[cfg(feature = "rust_decimal")]
        Value::Decimal(d) => Ok(d.to_string()),
        other => match other.as_text() {
            Some(text) => dialect.quote_string(&text),
            None => Err(unquotable(other, "value has no text form")),
        },
    }
}

fn quote_integer(value: &Value) -> ExprResult<String> {
    match value {
        Value::Int(i) => Ok(i.to_string()),
        Value::Bool(b) => Ok(if *b { "1" } else { "0" }.to_string()),
        Value::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            Ok((*f as i64).to_string())
        }
        Value::Text(s) => s
            .trim()
            .parse::<i64>()
            .map(|i| i.to_string())
            .map_err(|_| unquotable(value, "text is not an integer")),
        #[cfg(feature = "rust_decimal")]
        Value::Decimal(d) if d.fract().is_zero() => Ok(d.trunc().normalize().to_string()),
        other => Err(unquotable(other, "cannot be rendered as an integer")),
    }
}

fn quote_as_text<D: SqlDialect + ?Sized>(
    dialect: &D,
    value: &Value,
    ascii_only: bool,
) -> ExprResult<String> {
    let text = match value {
        Value::Bytes(b) => std::str::from_utf8(b)
            .map(str::to_string)
            .map_err(|_| unquotable(value, "bytes are not valid UTF-8"))?,
        other => other
            .as_text()
            .ok_or_else(|| unquotable(other, "value has no text form"))?,
    };
    if ascii_only && !text.is_ascii() {
        return Err(unquotable(value, "text is not ASCII"));
    }
    dialect.quote_string(&text)
}

fn quote_boolean<D: SqlDialect + ?Sized>(dialect: &D, value: &Value) -> ExprResult<String> {
    let b = match value {
        Value::Bool(b) => *b,
        Value::Int(0) => false,
        Value::Int(1) => true,
        Value::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "t" | "1" => true,
            "false" | "f" | "0" => false,
            _ => return Err(unquotable(value, "text is not a boolean")),
        },
        other => return Err(unquotable(other, "cannot be rendered as a boolean")),
    };
    Ok(dialect.boolean_literal(b).to_string())
}

/// Lowercase hex encoding used by binary literals.
pub(crate) fn hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(out, "{b:02x}");
    }
    out
}
