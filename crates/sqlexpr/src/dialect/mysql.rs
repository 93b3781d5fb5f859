use super::{SqlDialect, hex};
use crate::error::{ExprError, ExprResult};

/// MySQL / MariaDB quoting rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MySqlDialect {
    /// Server runs with `sql_mode=NO_BACKSLASH_ESCAPES`.
    ///
    /// When set, backslash is an ordinary character and quotes are escaped by
    /// doubling them.
    pub no_backslash_escapes: bool,
}

impl MySqlDialect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `NO_BACKSLASH_ESCAPES` mode.
    pub fn no_backslash_escapes(mut self, enabled: bool) -> Self {
        self.no_backslash_escapes = enabled;
        self
    }
}

impl SqlDialect for MySqlDialect {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn identifier_quote(&self) -> char {
        '`'
    }

    fn quote_string(&self, text: &str) -> ExprResult<String> {
        let mut out = String::with_capacity(text.len() + 2);
        out.push('\'');
        if self.no_backslash_escapes {
            if text.contains('\0') {
                return Err(ExprError::unquotable(
                    format!("{text:?}"),
                    "NUL cannot be escaped with NO_BACKSLASH_ESCAPES",
                ));
            }
            for ch in text.chars() {
                if ch == '\'' {
                    out.push('\'');
                }
                out.push(ch);
            }
        } else {
            // Same set as mysql_real_escape_string().
            for ch in text.chars() {
                match ch {
                    '\0' => out.push_str("\\0"),
                    '\n' => out.push_str("\\n"),
                    '\r' => out.push_str("\\r"),
                    '\\' => out.push_str("\\\\"),
                    '\'' => out.push_str("\\'"),
                    '"' => out.push_str("\\\""),
                    '\x1a' => out.push_str("\\Z"),
                    c => out.push(c),
                }
            }
        }
        out.push('\'');
        Ok(out)
    }

    fn quote_bytes(&self, bytes: &[u8]) -> String {
        format!("X'{}'", hex(bytes))
    }

    fn boolean_literal(&self, value: bool) -> &'static str {
        if value { "1" } else { "0" }
    }
}
