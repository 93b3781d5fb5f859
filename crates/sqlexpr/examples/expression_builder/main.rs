//! Example demonstrating sqlexpr's expression builder.
//!
//! Run with:
//!   cargo run --example expression_builder -p sqlexpr
//!
//! Optional (pick a dialect from a TOML file):
//!   SQLEXPR_CONFIG=./sqlexpr.toml cargo run --example expression_builder -p sqlexpr

use sqlexpr::prelude::*;
use std::env;

#[derive(Debug)]
struct Filters {
    status: Option<String>,
    search: Option<String>,
    roles_any_of: Vec<String>,
    include_deleted: bool,
}

fn build_where(expr: &ExpressionBuilder, filters: &Filters) -> ExprResult<Option<Expression>> {
    let mut where_expr = expr.and_x(Vec::<Expression>::new());

    if let Some(status) = &filters.status {
        where_expr.add(expr.eq(expr.identifier("status")?, expr.literal(status.as_str())?));
    }

    if let Some(search) = &filters.search {
        let pattern = expr.literal(format!("%{}%", escape_like(search, '!')))?;
        where_expr.add(expr.like_escape("name", pattern, expr.literal("!")?));
    }

    if !filters.roles_any_of.is_empty() {
        where_expr.add(expr.in_literals("role", filters.roles_any_of.iter().map(String::as_str))?);
    }

    if !filters.include_deleted {
        where_expr.add(expr.is_null("deleted_at"));
    }

    if where_expr.is_empty() {
        return Ok(None);
    }
    Ok(Some(where_expr.into_expression()?))
}

fn main() -> ExprResult<()> {
    let config = match env::var("SQLEXPR_CONFIG") {
        Ok(path) => DialectConfig::from_toml_file(path)?,
        Err(_) => DialectConfig::default(),
    };
    let expr = ExpressionBuilder::from_config(&config)?;

    let filters = Filters {
        status: Some("active".to_string()),
        search: Some("o'brien_100%".to_string()),
        roles_any_of: vec!["admin".to_string(), "owner".to_string()],
        include_deleted: false,
    };

    let mut sql = String::from("SELECT id, name, status, role FROM users");
    if let Some(clause) = build_where(&expr, &filters)? {
        sql.push_str(" WHERE ");
        sql.push_str(clause.sql());
    }
    println!("[{}] {sql}", expr.dialect().name());

    // Operators can also come from user input, e.g. a filter UI.
    match expr.comparison("age", "BETWEEN", "18") {
        Ok(e) => println!("unexpected: {e}"),
        Err(e) => println!("rejected: {e}"),
    }

    // Empty groups are an error rather than silently rendering nothing.
    if let Err(e) = expr.or_x(Vec::<Expression>::new()).to_sql() {
        println!("rejected: {e}");
    }

    Ok(())
}
