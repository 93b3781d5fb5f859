use super::*;

#[test]
fn renders_and_of_two_parts() {
    let c = CompositeExpression::and(["a = 1", "b = 2"]);
    assert_eq!(c.to_sql().unwrap(), "(a = 1) AND (b = 2)");
}

#[test]
fn renders_or_of_three_parts() {
    let c = CompositeExpression::or(["a = 1", "b = 2", "c = 3"]);
    assert_eq!(c.to_sql().unwrap(), "(a = 1) OR (b = 2) OR (c = 3)");
}

#[test]
fn single_part_is_not_wrapped() {
    let c = CompositeExpression::and(["a = 1"]);
    assert_eq!(c.to_sql().unwrap(), "a = 1");
}

#[test]
fn empty_composite_fails_to_render() {
    let c = CompositeExpression::and(Vec::<Part>::new());
    assert_eq!(
        c.to_sql().unwrap_err(),
        ExprError::EmptyComposite(CompositeKind::And)
    );

    let c = CompositeExpression::or(Vec::<Part>::new());
    assert!(c.to_sql().unwrap_err().is_empty_composite());
}

#[test]
fn nested_composites() {
    let inner = CompositeExpression::or(["role = 'admin'", "role = 'owner'"]);
    let c = CompositeExpression::and(Vec::<Part>::new())
        .with("status = 'active'")
        .with(inner);

    assert_eq!(
        c.to_sql().unwrap(),
        "(status = 'active') AND ((role = 'admin') OR (role = 'owner'))"
    );
}

#[test]
fn nested_single_part_composite_collapses() {
    let inner = CompositeExpression::or(["x > 1"]);
    let c = CompositeExpression::and([Part::from("a = 1"), Part::from(inner)]);
    assert_eq!(c.to_sql().unwrap(), "(a = 1) AND (x > 1)");
}

#[test]
fn add_skips_empty_parts() {
    let mut c = CompositeExpression::and(Vec::<Part>::new());
    c.add("").add("   ").add(CompositeExpression::or(Vec::<Part>::new()));
    assert_eq!(c.count(), 0);
    assert!(c.is_empty());

    c.add("a = 1");
    assert_eq!(c.count(), 1);
    assert_eq!(c.to_sql().unwrap(), "a = 1");
}

#[test]
fn with_does_not_touch_original_clone() {
    let base = CompositeExpression::and(["a = 1"]);
    let extended = base.clone().with("b = 2");
    assert_eq!(base.count(), 1);
    assert_eq!(extended.count(), 2);
    assert_eq!(extended.kind(), CompositeKind::And);
}

#[test]
fn add_all_appends_in_order() {
    let mut c = CompositeExpression::or(Vec::<Part>::new());
    c.add_all(["a = 1", "b = 2"]);
    assert_eq!(c.to_sql().unwrap(), "(a = 1) OR (b = 2)");
}

#[test]
fn placeholders_are_collected_depth_first() {
    let a = Expression::with_placeholders("a = $1", vec![Placeholder::numbered(1)]);
    let b = Expression::with_placeholders("b = $2", vec![Placeholder::numbered(2)]);
    let c = Expression::with_placeholders("c = :c", vec![Placeholder::named("c")]);

    let tree = CompositeExpression::and([Part::from(a), Part::from(CompositeExpression::or([b, c]))]);
    let collected: Vec<_> = tree.placeholders().into_iter().cloned().collect();
    assert_eq!(
        collected,
        vec![
            Placeholder::numbered(1),
            Placeholder::numbered(2),
            Placeholder::named("c"),
        ]
    );

    let expr = tree.into_expression().unwrap();
    assert_eq!(expr, "(a = $1) AND ((b = $2) OR (c = :c))");
    assert_eq!(expr.placeholders().len(), 3);
}

#[test]
fn try_from_conversions() {
    let c = CompositeExpression::and(["a = 1", "b = 2"]);
    let s = String::try_from(&c).unwrap();
    assert_eq!(s, "(a = 1) AND (b = 2)");

    let expr = Expression::try_from(c).unwrap();
    assert_eq!(expr.sql(), "(a = 1) AND (b = 2)");

    let empty = CompositeExpression::or(Vec::<Part>::new());
    assert!(Expression::try_from(empty).is_err());
}

#[test]
fn kind_keywords() {
    assert_eq!(CompositeKind::And.to_string(), "AND");
    assert_eq!(CompositeKind::Or.keyword(), "OR");
}
