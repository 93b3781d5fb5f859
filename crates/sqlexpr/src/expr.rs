//! Rendered SQL fragments.
//!
//! An [`Expression`] is plain SQL text plus the placeholders it references, in
//! textual order. Fragments are never parsed or validated; whatever text the
//! caller passes in is carried through verbatim.

use std::fmt;

/// A parameter marker substituted at execution time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `?`
    Positional,
    /// `$n` (1-based)
    Numbered(usize),
    /// `:name`
    Named(String),
}

impl Placeholder {
    /// Create a named placeholder (`:name`).
    pub fn named(name: impl Into<String>) -> Self {
        Placeholder::Named(name.into())
    }

    /// Create a numbered placeholder (`$n`).
    pub fn numbered(n: usize) -> Self {
        Placeholder::Numbered(n)
    }

    /// Render the marker as SQL.
    pub fn to_sql(&self) -> String {
        match self {
            Placeholder::Positional => "?".to_string(),
            Placeholder::Numbered(n) => format!("${n}"),
            Placeholder::Named(name) => format!(":{name}"),
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placeholder::Positional => f.write_str("?"),
            Placeholder::Numbered(n) => write!(f, "${n}"),
            Placeholder::Named(name) => write!(f, ":{name}"),
        }
    }
}

/// A SQL fragment: text plus the placeholders it contains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expression {
    sql: String,
    placeholders: Vec<Placeholder>,
}

impl Expression {
    /// Create an expression from raw SQL text.
    ///
    /// # Safety
    /// The text is embedded as-is. Be careful with SQL injection.
    pub fn raw(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            placeholders: Vec::new(),
        }
    }

    /// Create an expression from raw text that references `placeholders`.
    pub fn with_placeholders(sql: impl Into<String>, placeholders: Vec<Placeholder>) -> Self {
        Self {
            sql: sql.into(),
            placeholders,
        }
    }

    /// The SQL text.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Placeholders referenced by this fragment, in textual order.
    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    /// Check if the SQL text is empty (or whitespace only).
    pub fn is_empty(&self) -> bool {
        self.sql.trim().is_empty()
    }

    /// Consume the expression, returning the SQL text.
    pub fn into_sql(self) -> String {
        self.sql
    }

    /// Consume the expression, returning the SQL text and placeholders.
    pub fn into_parts(self) -> (String, Vec<Placeholder>) {
        (self.sql, self.placeholders)
    }

    /// Join fragments with `sep`, concatenating their placeholders in order.
    pub(crate) fn join<I>(parts: I, sep: &str) -> Self
    where
        I: IntoIterator<Item = Expression>,
    {
        let mut out = Expression::default();
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                out.sql.push_str(sep);
            }
            out.append(part);
        }
        out
    }

    pub(crate) fn push_str(&mut self, s: &str) -> &mut Self {
        self.sql.push_str(s);
        self
    }

    pub(crate) fn append(&mut self, other: Expression) -> &mut Self {
        self.sql.push_str(&other.sql);
        self.placeholders.extend(other.placeholders);
        self
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

impl From<&str> for Expression {
    fn from(sql: &str) -> Self {
        Expression::raw(sql)
    }
}

impl From<String> for Expression {
    fn from(sql: String) -> Self {
        Expression::raw(sql)
    }
}

impl From<&String> for Expression {
    fn from(sql: &String) -> Self {
        Expression::raw(sql.as_str())
    }
}

impl From<&Expression> for Expression {
    fn from(expr: &Expression) -> Self {
        expr.clone()
    }
}

impl From<Placeholder> for Expression {
    fn from(p: Placeholder) -> Self {
        Expression {
            sql: p.to_sql(),
            placeholders: vec![p],
        }
    }
}

impl PartialEq<str> for Expression {
    fn eq(&self, other: &str) -> bool {
        self.sql == other
    }
}

impl PartialEq<&str> for Expression {
    fn eq(&self, other: &&str) -> bool {
        self.sql == *other
    }
}
