use super::{SqlDialect, hex};
use crate::error::{ExprError, ExprResult};

/// SQLite quoting rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SqliteDialect;

impl SqlDialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn identifier_quote(&self) -> char {
        '"'
    }

    fn quote_string(&self, text: &str) -> ExprResult<String> {
        // A NUL would silently truncate the literal.
        if text.contains('\0') {
            return Err(ExprError::unquotable(
                format!("{text:?}"),
                "SQLite string literals cannot contain NUL",
            ));
        }
        Ok(format!("'{}'", text.replace('\'', "''")))
    }

    fn quote_bytes(&self, bytes: &[u8]) -> String {
        format!("X'{}'", hex(bytes))
    }

    fn boolean_literal(&self, value: bool) -> &'static str {
        if value { "1" } else { "0" }
    }
}
