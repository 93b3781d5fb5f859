//! AND/OR composite expressions.
//!
//! A [`CompositeExpression`] is a tree of [`Part`]s joined by one boolean
//! operator. It is rendered on demand with [`CompositeExpression::to_sql`]:
//!
//! - one part renders as that part, unwrapped
//! - several parts render as `(p1) AND (p2) ...`
//! - no parts is an error ([`ExprError::EmptyComposite`])

use crate::error::{ExprError, ExprResult};
use crate::expr::{Expression, Placeholder};
use std::fmt;

/// Boolean operator joining the parts of a composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompositeKind {
    And,
    Or,
}

impl CompositeKind {
    /// SQL keyword for this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            CompositeKind::And => "AND",
            CompositeKind::Or => "OR",
        }
    }
}

impl fmt::Display for CompositeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One child of a composite: a fragment or a nested composite.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Leaf(Expression),
    Composite(CompositeExpression),
}

impl Part {
    /// Check if this part would contribute nothing to the rendered SQL.
    pub fn is_empty(&self) -> bool {
        match self {
            Part::Leaf(expr) => expr.is_empty(),
            Part::Composite(c) => c.is_empty(),
        }
    }

    fn render(&self) -> ExprResult<Expression> {
        match self {
            Part::Leaf(expr) => Ok(expr.clone()),
            Part::Composite(c) => c.render(),
        }
    }

    fn collect_placeholders<'a>(&'a self, out: &mut Vec<&'a Placeholder>) {
        match self {
            Part::Leaf(expr) => out.extend(expr.placeholders()),
            Part::Composite(c) => {
                for part in &c.parts {
                    part.collect_placeholders(out);
                }
            }
        }
    }
}

impl From<Expression> for Part {
    fn from(expr: Expression) -> Self {
        Part::Leaf(expr)
    }
}

impl From<&Expression> for Part {
    fn from(expr: &Expression) -> Self {
        Part::Leaf(expr.clone())
    }
}

impl From<CompositeExpression> for Part {
    fn from(c: CompositeExpression) -> Self {
        Part::Composite(c)
    }
}

impl From<&str> for Part {
    fn from(sql: &str) -> Self {
        Part::Leaf(Expression::raw(sql))
    }
}

impl From<String> for Part {
    fn from(sql: String) -> Self {
        Part::Leaf(Expression::raw(sql))
    }
}

impl From<Placeholder> for Part {
    fn from(p: Placeholder) -> Self {
        Part::Leaf(Expression::from(p))
    }
}

/// A boolean combination (AND/OR) of expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeExpression {
    kind: CompositeKind,
    parts: Vec<Part>,
}

impl CompositeExpression {
    /// Create a composite of `kind` from the given parts.
    ///
    /// Empty parts are skipped (see [`CompositeExpression::add`]).
    pub fn new<I>(kind: CompositeKind, parts: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Part>,
    {
        let mut composite = Self {
            kind,
            parts: Vec::new(),
        };
        for part in parts {
            composite.add(part);
        }
        composite
    }

    /// Create an AND composite.
    pub fn and<I>(parts: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Part>,
    {
        Self::new(CompositeKind::And, parts)
    }

    /// Create an OR composite.
    pub fn or<I>(parts: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Part>,
    {
        Self::new(CompositeKind::Or, parts)
    }

    /// The boolean operator joining the parts.
    pub fn kind(&self) -> CompositeKind {
        self.kind
    }

    /// The parts, in insertion order.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Number of direct parts.
    pub fn count(&self) -> usize {
        self.parts.len()
    }

    /// Check if the composite has no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Add a part in place.
    ///
    /// Blank fragments and empty composites are ignored.
    pub fn add(&mut self, part: impl Into<Part>) -> &mut Self {
        let part = part.into();
        if !part.is_empty() {
            self.parts.push(part);
        }
        self
    }

    /// Add several parts in place.
    pub fn add_all<I>(&mut self, parts: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Part>,
    {
        for part in parts {
            self.add(part);
        }
        self
    }

    /// Return this composite extended with `part`.
    pub fn with(mut self, part: impl Into<Part>) -> Self {
        self.add(part);
        self
    }

    /// All placeholders in the tree, depth-first in rendering order.
    pub fn placeholders(&self) -> Vec<&Placeholder> {
        let mut out = Vec::new();
        for part in &self.parts {
            part.collect_placeholders(&mut out);
        }
        out
    }

    /// Render the composite as SQL.
    pub fn to_sql(&self) -> ExprResult<String> {
        Ok(self.render()?.into_sql())
    }

    /// Render the composite into a single [`Expression`], keeping placeholders.
    pub fn into_expression(self) -> ExprResult<Expression> {
        self.render()
    }

    fn render(&self) -> ExprResult<Expression> {
        let expr = match self.parts.as_slice() {
            [] => return Err(ExprError::empty_composite(self.kind)),
            [only] => only.render()?,
            parts => {
                let sep = format!(" {} ", self.kind.keyword());
                let mut rendered = Vec::with_capacity(parts.len());
                for part in parts {
                    let mut wrapped = Expression::raw("(");
                    wrapped.append(part.render()?).push_str(")");
                    rendered.push(wrapped);
                }
                Expression::join(rendered, &sep)
            }
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "sqlexpr.render",
            kind = %self.kind,
            parts = self.parts.len(),
            sql = %expr.sql(),
        );

        Ok(expr)
    }
}

impl TryFrom<CompositeExpression> for Expression {
    type Error = ExprError;

    fn try_from(c: CompositeExpression) -> Result<Self, Self::Error> {
        c.into_expression()
    }
}

impl TryFrom<&CompositeExpression> for String {
    type Error = ExprError;

    fn try_from(c: &CompositeExpression) -> Result<Self, Self::Error> {
        c.to_sql()
    }
}

#[cfg(test)]
mod tests;
