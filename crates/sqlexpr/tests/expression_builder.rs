//! End-to-end checks of the public expression-building API.

use sqlexpr::prelude::*;
use sqlexpr::{CompositeKind, DialectKind};

fn builders() -> Vec<ExpressionBuilder> {
    vec![
        ExpressionBuilder::for_dialect(PostgresDialect::default()),
        ExpressionBuilder::for_dialect(MySqlDialect::default()),
        ExpressionBuilder::for_dialect(SqliteDialect),
    ]
}

#[test]
fn comparisons_render_the_same_in_every_dialect() {
    for expr in builders() {
        for (a, b) in [("a", "b"), ("u.id", "?"), ("COUNT(*)", "10")] {
            assert_eq!(expr.eq(a, b).to_string(), format!("{a} = {b}"));
            assert_eq!(expr.neq(a, b).to_string(), format!("{a} <> {b}"));
            assert_eq!(expr.lt(a, b).to_string(), format!("{a} < {b}"));
            assert_eq!(expr.lte(a, b).to_string(), format!("{a} <= {b}"));
            assert_eq!(expr.gt(a, b).to_string(), format!("{a} > {b}"));
            assert_eq!(expr.gte(a, b).to_string(), format!("{a} >= {b}"));
        }
    }
}

#[test]
fn predicates() {
    let expr = ExpressionBuilder::for_dialect(PostgresDialect::default());
    assert_eq!(expr.is_null("x").sql(), "x IS NULL");
    assert_eq!(expr.is_not_null("x").sql(), "x IS NOT NULL");
    assert_eq!(expr.like("x", "'%a%'").sql(), "x LIKE '%a%'");
    assert_eq!(expr.not_like("x", "'%a%'").sql(), "x NOT LIKE '%a%'");
    assert_eq!(expr.in_list("x", ["1", "2", "3"]).sql(), "x IN (1, 2, 3)");
    assert_eq!(expr.not_in("x", ["1", "2", "3"]).sql(), "x NOT IN (1, 2, 3)");
}

#[test]
fn composites() -> ExprResult<()> {
    let expr = ExpressionBuilder::for_dialect(PostgresDialect::default());

    let and = expr.and_x([expr.eq("a", "1"), expr.eq("b", "2")]);
    assert_eq!(and.to_sql()?, "(a = 1) AND (b = 2)");

    let or = expr.or_x([expr.eq("a", "1"), expr.eq("b", "2")]);
    assert_eq!(or.to_sql()?, "(a = 1) OR (b = 2)");

    assert_eq!(
        expr.and_x(Vec::<Expression>::new()).to_sql(),
        Err(ExprError::EmptyComposite(CompositeKind::And))
    );
    assert_eq!(
        expr.or_x(Vec::<Expression>::new()).to_sql(),
        Err(ExprError::EmptyComposite(CompositeKind::Or))
    );
    Ok(())
}

#[test]
fn literals() -> ExprResult<()> {
    for expr in builders() {
        assert_eq!(expr.literal(5)?.sql(), "5");

        let quoted = expr.literal("o'brien")?;
        let sql = quoted.sql();
        assert!(sql.starts_with('\'') && sql.ends_with('\''));

        // Every quote inside the literal is escaped (doubled or backslashed).
        let inner = &sql[1..sql.len() - 1];
        let bytes = inner.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'\\' {
                i += 2;
                continue;
            }
            if bytes[i] == b'\'' {
                assert_eq!(bytes.get(i + 1), Some(&b'\''), "unescaped quote in {sql}");
                i += 2;
                continue;
            }
            i += 1;
        }
    }
    Ok(())
}

#[test]
fn invalid_operator() {
    let expr = ExpressionBuilder::for_dialect(SqliteDialect);
    let err = expr.comparison("a", "BOGUS", "b").unwrap_err();
    assert!(err.is_invalid_operator());
    assert_eq!(err.to_string(), "Invalid operator: BOGUS");
}

#[test]
fn where_clause_with_placeholders() -> ExprResult<()> {
    let expr = ExpressionBuilder::for_dialect(PostgresDialect::default());

    let filter = expr
        .and_x([
            expr.eq("o.status", Placeholder::numbered(1)),
            expr.gte("o.created_at", Placeholder::numbered(2)),
        ])
        .with(expr.or_x([
            expr.in_list("o.region", Placeholder::numbered(3)),
            expr.is_null("o.region"),
        ]));

    let placeholders: Vec<Placeholder> = filter.placeholders().into_iter().cloned().collect();
    assert_eq!(
        placeholders,
        vec![
            Placeholder::numbered(1),
            Placeholder::numbered(2),
            Placeholder::numbered(3),
        ]
    );

    let clause = filter.into_expression()?;
    let sql = format!("SELECT id FROM orders o WHERE {clause}");
    assert_eq!(
        sql,
        "SELECT id FROM orders o WHERE (o.status = $1) AND (o.created_at >= $2) AND ((o.region IN ($3)) OR (o.region IS NULL))"
    );
    assert_eq!(clause.placeholders().len(), 3);
    Ok(())
}

#[test]
fn generated_filter_tracks_numbered_placeholders() -> ExprResult<()> {
    let expr = ExpressionBuilder::for_dialect(PostgresDialect::default());

    let mut filter = expr.and_x(Vec::<Expression>::new());
    for i in 0..6 {
        let col = format!("col{i}");
        let cmp = expr.eq(col.as_str(), Placeholder::numbered(i + 1));
        if i % 4 == 1 {
            filter.add(expr.or_x([cmp, expr.is_null(col.as_str())]));
        } else {
            filter.add(cmp);
        }
    }

    let numbers: Vec<Placeholder> = filter.placeholders().into_iter().cloned().collect();
    assert_eq!(numbers, (1..=6).map(Placeholder::numbered).collect::<Vec<_>>());
    assert!(filter.to_sql()?.starts_with("(col0 = $1) AND ((col1 = $2) OR (col1 IS NULL))"));

    // `$1` typed as text is plain SQL, not a tracked placeholder.
    assert!(expr.eq("col0", "$1").placeholders().is_empty());
    Ok(())
}

#[test]
fn builder_is_shared_across_threads() {
    let expr = ExpressionBuilder::from_config(&DialectConfig::new(DialectKind::Postgres)).unwrap();

    let results: Vec<String> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let expr = &expr;
                s.spawn(move || {
                    expr.and_x([expr.eq("id", i.to_string()), expr.is_not_null("name")])
                        .to_sql()
                        .unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, sql) in results.iter().enumerate() {
        assert_eq!(sql, &format!("(id = {i}) AND (name IS NOT NULL)"));
    }
}
