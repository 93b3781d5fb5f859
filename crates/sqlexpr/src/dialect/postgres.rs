use super::{SqlDialect, hex};
use crate::error::{ExprError, ExprResult};

/// PostgreSQL quoting rules.
///
/// String literals follow `quote_literal()`: quotes are doubled, and text
/// containing a backslash uses the `E'...'` form with backslashes doubled, so
/// the output is correct whatever `standard_conforming_strings` is set to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostgresDialect {
    /// Server-side `standard_conforming_strings` (on by default since 9.1).
    ///
    /// Only affects `bytea` literals.
    pub standard_conforming_strings: bool,
}

impl Default for PostgresDialect {
    fn default() -> Self {
        Self {
            standard_conforming_strings: true,
        }
    }
}

impl PostgresDialect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `standard_conforming_strings`.
    pub fn standard_conforming_strings(mut self, enabled: bool) -> Self {
        self.standard_conforming_strings = enabled;
        self
    }
}

impl SqlDialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn identifier_quote(&self) -> char {
        '"'
    }

    fn quote_string(&self, text: &str) -> ExprResult<String> {
        if text.contains('\0') {
            return Err(ExprError::unquotable(
                format!("{text:?}"),
                "PostgreSQL text cannot contain NUL",
            ));
        }

        let has_backslash = text.contains('\\');
        let mut out = String::with_capacity(text.len() + 3);
        if has_backslash {
            out.push('E');
        }
        out.push('\'');
        for ch in text.chars() {
            match ch {
                '\'' => out.push_str("''"),
                '\\' => out.push_str("\\\\"),
                c => out.push(c),
            }
        }
        out.push('\'');
        Ok(out)
    }

    fn quote_bytes(&self, bytes: &[u8]) -> String {
        if self.standard_conforming_strings {
            format!("'\\x{}'::bytea", hex(bytes))
        } else {
            format!("E'\\\\x{}'::bytea", hex(bytes))
        }
    }

    fn boolean_literal(&self, value: bool) -> &'static str {
        if value { "TRUE" } else { "FALSE" }
    }
}
