use super::{Constraint, OrderDirection, QueryPlan};

fn sample_plan() -> QueryPlan {
    QueryPlan::from_constraints(vec![
        Constraint::eq("ownerId", "owner-1"),
        Constraint::order_by("createdAt", OrderDirection::Desc),
        Constraint::gte("createdAt", "2026-01-01"),
        Constraint::limit(20),
    ])
}

#[test]
fn plans_are_element_wise_comparable() {
    assert_eq!(sample_plan(), sample_plan());

    let reordered = QueryPlan::from_constraints(vec![
        Constraint::order_by("createdAt", OrderDirection::Desc),
        Constraint::eq("ownerId", "owner-1"),
        Constraint::gte("createdAt", "2026-01-01"),
        Constraint::limit(20),
    ]);
    assert_ne!(sample_plan(), reordered);
}

#[test]
fn fingerprint_tracks_plan_equality() {
    assert_eq!(sample_plan().fingerprint(), sample_plan().fingerprint());

    let mut constraints: Vec<Constraint> = sample_plan().into_iter().collect();
    constraints.pop();
    constraints.push(Constraint::limit(40));
    let changed = QueryPlan::from_constraints(constraints);

    assert_ne!(sample_plan().fingerprint(), changed.fingerprint());
}

#[test]
fn fingerprint_is_not_confused_by_field_value_boundaries() {
    // "ab" / "c" must not hash identically to "a" / "bc".
    let left = QueryPlan::from_constraints(vec![Constraint::eq("ab", "c")]);
    let right = QueryPlan::from_constraints(vec![Constraint::eq("a", "bc")]);

    assert_ne!(left.fingerprint(), right.fingerprint());
}

#[test]
fn fingerprint_displays_as_hex() {
    let hex = sample_plan().fingerprint().as_hex();
    assert_eq!(hex.len(), 64);
    assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(hex, sample_plan().fingerprint().to_string());
}

#[test]
fn limit_count_reads_the_trailing_limit() {
    assert_eq!(sample_plan().limit_count(), Some(20));

    let no_limit = QueryPlan::from_constraints(vec![Constraint::eq("ownerId", "owner-1")]);
    assert_eq!(no_limit.limit_count(), None);
}

#[test]
fn display_renders_in_plan_order() {
    assert_eq!(
        sample_plan().to_string(),
        "ownerId == \"owner-1\"; order by createdAt desc; \
         createdAt >= \"2026-01-01\"; limit 20",
    );
}

#[test]
fn constraints_serialize_with_a_kind_tag() {
    let json = serde_json::to_value(sample_plan()).unwrap();
    let kinds: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["kind"].as_str().unwrap())
        .collect();

    assert_eq!(kinds, ["fieldEq", "fieldRange", "orderBy", "limit"]);
    assert_eq!(json[1]["op"], "Gte");
    assert_eq!(json[3]["count"], 20);
}
