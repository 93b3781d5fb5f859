//! Expression builder.
//!
//! [`ExpressionBuilder`] is a stateless factory for WHERE/HAVING fragments bound
//! to one [`SqlDialect`]. Field names and right-hand operands are raw SQL
//! fragments (or [`Placeholder`]s); they are embedded verbatim and never
//! validated. Only [`ExpressionBuilder::literal`] and
//! [`ExpressionBuilder::identifier`] quote anything.
//!
//! # Example
//! ```ignore
//! use sqlexpr::{ExpressionBuilder, Placeholder, PostgresDialect};
//!
//! let expr = ExpressionBuilder::for_dialect(PostgresDialect::default());
//! let filter = expr.and_x([
//!     expr.eq("u.status", expr.literal("active")?),
//!     expr.in_list("u.role", Placeholder::named("roles")),
//! ]);
//!
//! assert_eq!(
//!     filter.to_sql()?,
//!     "(u.status = 'active') AND (u.role IN (:roles))"
//! );
//! # Ok::<(), sqlexpr::ExprError>(())
//! ```

use crate::composite::{CompositeExpression, CompositeKind, Part};
use crate::config::DialectConfig;
use crate::dialect::SqlDialect;
use crate::error::ExprResult;
use crate::expr::{Expression, Placeholder};
use crate::operator::Operator;
use crate::value::{ParamType, Value};
use std::sync::Arc;

/// Right-hand side of an `IN` / `NOT IN` expression.
#[derive(Debug, Clone, PartialEq)]
pub enum InValues {
    /// One fragment or placeholder, rendered as `(x)`.
    Single(Expression),
    /// A list of fragments, rendered as `(a, b, c)`.
    List(Vec<Expression>),
}

impl From<Placeholder> for InValues {
    fn from(p: Placeholder) -> Self {
        InValues::Single(p.into())
    }
}

impl From<Expression> for InValues {
    fn from(expr: Expression) -> Self {
        InValues::Single(expr)
    }
}

impl From<&str> for InValues {
    fn from(sql: &str) -> Self {
        InValues::Single(sql.into())
    }
}

impl From<String> for InValues {
    fn from(sql: String) -> Self {
        InValues::Single(sql.into())
    }
}

impl<T: Into<Expression>> From<Vec<T>> for InValues {
    fn from(values: Vec<T>) -> Self {
        InValues::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Expression>, const N: usize> From<[T; N]> for InValues {
    fn from(values: [T; N]) -> Self {
        InValues::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Expression>> From<&[T]> for InValues {
    fn from(values: &[T]) -> Self {
        InValues::List(values.iter().cloned().map(Into::into).collect())
    }
}

/// Factory for SQL expression fragments.
///
/// Cloning is cheap (the dialect is shared) and the builder can be used from
/// several threads at once.
#[derive(Debug, Clone)]
pub struct ExpressionBuilder {
    dialect: Arc<dyn SqlDialect>,
}

impl ExpressionBuilder {
    /// Create a builder over a shared dialect.
    pub fn new(dialect: Arc<dyn SqlDialect>) -> Self {
        Self { dialect }
    }

    /// Create a builder that owns `dialect`.
    pub fn for_dialect<D: SqlDialect + 'static>(dialect: D) -> Self {
        Self::new(Arc::new(dialect))
    }

    /// Create a builder from a [`DialectConfig`].
    pub fn from_config(config: &DialectConfig) -> ExprResult<Self> {
        Ok(Self::new(config.build()?))
    }

    /// The dialect this builder renders for.
    pub fn dialect(&self) -> &dyn SqlDialect {
        &*self.dialect
    }

    // ==================== Composites ====================

    /// Create an AND composite.
    ///
    /// Zero parts is accepted; rendering it fails with
    /// [`ExprError::EmptyComposite`](crate::ExprError::EmptyComposite).
    pub fn and_x<I>(&self, parts: I) -> CompositeExpression
    where
        I: IntoIterator,
        I::Item: Into<Part>,
    {
        CompositeExpression::new(CompositeKind::And, parts)
    }

    /// Create an OR composite.
    pub fn or_x<I>(&self, parts: I) -> CompositeExpression
    where
        I: IntoIterator,
        I::Item: Into<Part>,
    {
        CompositeExpression::new(CompositeKind::Or, parts)
    }

    // ==================== Comparisons ====================

    /// Build `<left> <op> <right>` from an operator given as text.
    ///
    /// `op` may be a SQL token (`=`, `<>`, `NOT LIKE`) or an operator name
    /// (`EQ`, `NOT_LIKE`).
    pub fn comparison(
        &self,
        left: impl Into<Expression>,
        op: &str,
        right: impl Into<Expression>,
    ) -> ExprResult<Expression> {
        let op = Operator::parse(op)?;
        Ok(self.compare(left, op, right))
    }

    /// Build `<left> <op> <right>`.
    ///
    /// For `IS NULL` / `IS NOT NULL` an empty right operand is omitted.
    pub fn compare(
        &self,
        left: impl Into<Expression>,
        op: Operator,
        right: impl Into<Expression>,
    ) -> Expression {
        let right = right.into();
        let mut expr = left.into();
        expr.push_str(" ").push_str(self.dialect.comparison_token(op));
        if !(op.is_unary() && right.is_empty()) {
            expr.push_str(" ").append(right);
        }
        expr
    }

    /// `<left> = <right>`
    pub fn eq(&self, left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
        self.compare(left, Operator::Eq, right)
    }

    /// `<left> <> <right>`
    pub fn neq(&self, left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
        self.compare(left, Operator::Neq, right)
    }

    /// `<left> < <right>`
    pub fn lt(&self, left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
        self.compare(left, Operator::Lt, right)
    }

    /// `<left> <= <right>`
    pub fn lte(&self, left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
        self.compare(left, Operator::Lte, right)
    }

    /// `<left> > <right>`
    pub fn gt(&self, left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
        self.compare(left, Operator::Gt, right)
    }

    /// `<left> >= <right>`
    pub fn gte(&self, left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
        self.compare(left, Operator::Gte, right)
    }

    // ==================== NULL checks ====================

    /// `<field> IS NULL`
    pub fn is_null(&self, field: impl Into<Expression>) -> Expression {
        self.compare(field, Operator::IsNull, Expression::default())
    }

    /// `<field> IS NOT NULL`
    pub fn is_not_null(&self, field: impl Into<Expression>) -> Expression {
        self.compare(field, Operator::IsNotNull, Expression::default())
    }

    // ==================== Pattern matching ====================

    /// `<field> LIKE <pattern>`
    pub fn like(&self, field: impl Into<Expression>, pattern: impl Into<Expression>) -> Expression {
        self.compare(field, Operator::Like, pattern)
    }

    /// `<field> NOT LIKE <pattern>`
    pub fn not_like(
        &self,
        field: impl Into<Expression>,
        pattern: impl Into<Expression>,
    ) -> Expression {
        self.compare(field, Operator::NotLike, pattern)
    }

    /// `<field> LIKE <pattern> ESCAPE <escape>`
    pub fn like_escape(
        &self,
        field: impl Into<Expression>,
        pattern: impl Into<Expression>,
        escape: impl Into<Expression>,
    ) -> Expression {
        let mut expr = self.like(field, pattern);
        expr.push_str(" ESCAPE ").append(escape.into());
        expr
    }

    /// `<field> NOT LIKE <pattern> ESCAPE <escape>`
    pub fn not_like_escape(
        &self,
        field: impl Into<Expression>,
        pattern: impl Into<Expression>,
        escape: impl Into<Expression>,
    ) -> Expression {
        let mut expr = self.not_like(field, pattern);
        expr.push_str(" ESCAPE ").append(escape.into());
        expr
    }

    // ==================== IN lists ====================

    /// `<field> IN (<values>)`
    ///
    /// An empty list or a blank single fragment renders `1=0` (matches nothing).
    pub fn in_list(&self, field: impl Into<Expression>, values: impl Into<InValues>) -> Expression {
        self.in_expr(field.into(), Operator::In, values.into())
    }

    /// `<field> NOT IN (<values>)`
    ///
    /// An empty list or a blank single fragment renders `1=1` (matches everything).
    pub fn not_in(&self, field: impl Into<Expression>, values: impl Into<InValues>) -> Expression {
        self.in_expr(field.into(), Operator::NotIn, values.into())
    }

    /// `<field> IN (...)` with every value quoted as a literal.
    pub fn in_literals<I>(&self, field: impl Into<Expression>, values: I) -> ExprResult<Expression>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let values = self.quote_all(values)?;
        Ok(self.in_expr(field.into(), Operator::In, InValues::List(values)))
    }

    /// `<field> NOT IN (...)` with every value quoted as a literal.
    pub fn not_in_literals<I>(
        &self,
        field: impl Into<Expression>,
        values: I,
    ) -> ExprResult<Expression>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let values = self.quote_all(values)?;
        Ok(self.in_expr(field.into(), Operator::NotIn, InValues::List(values)))
    }

    fn in_expr(&self, field: Expression, op: Operator, values: InValues) -> Expression {
        let empty = match &values {
            InValues::Single(v) => v.is_empty(),
            InValues::List(list) => list.is_empty(),
        };
        if empty {
            return Expression::raw(if op == Operator::In { "1=0" } else { "1=1" });
        }

        let values = match values {
            InValues::Single(v) => v,
            InValues::List(list) => Expression::join(list, ", "),
        };

        let mut rhs = Expression::raw("(");
        rhs.append(values).push_str(")");
        self.compare(field, op, rhs)
    }

    fn quote_all<I>(&self, values: I) -> ExprResult<Vec<Expression>>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        values
            .into_iter()
            .map(|v| self.literal(v))
            .collect::<ExprResult<Vec<_>>>()
    }

    // ==================== Quoting ====================

    /// Render `value` as a dialect-correct SQL literal.
    pub fn literal(&self, value: impl Into<Value>) -> ExprResult<Expression> {
        self.literal_as(value, None)
    }

    /// Render `value` as a literal of the given type.
    pub fn literal_as(
        &self,
        value: impl Into<Value>,
        hint: Option<ParamType>,
    ) -> ExprResult<Expression> {
        let sql = self.dialect.quote_literal(&value.into(), hint)?;
        Ok(Expression::raw(sql))
    }

    /// Quote a (possibly dotted) identifier.
    pub fn identifier(&self, name: &str) -> ExprResult<Expression> {
        Ok(Expression::raw(self.dialect.quote_identifier(name)?))
    }
}

/// Escape the LIKE wildcards `%` and `_` (and `escape` itself) in `text`.
///
/// The result is meant for a pattern passed to [`ExpressionBuilder::like_escape`]
/// with the same escape character. It is not quoted; pass it through
/// [`ExpressionBuilder::literal`].
pub fn escape_like(text: &str, escape: char) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == escape || ch == '%' || ch == '_' {
            out.push(escape);
        }
        out.push(ch);
    }
    out
}
