//! Property tests for the filter layer, run against the client spec
//!
//! - filtering is idempotent and never invents or reorders records
//! - the active count is zero exactly when filtering changes nothing
//! - every finite measure has exactly one bucket
//! - widening a date range never drops records, narrowing never adds any

use chrono::NaiveDate;
use contracts::domain::a001_client::aggregate::Client;
use contracts::domain::a001_client::filters::CLIENT_FILTERS;
use contracts::domain::spec_for;
use contracts::shared::filters::{
    count_active, filter, DateRange, EntityKind, FilterValue, FilterValues, DEAL_VALUE_SCALE,
    LEAD_SCORE_SCALE, PRICE_SCALE, USAGE_SCALE,
};
use proptest::prelude::*;
use uuid::Uuid;

// ============================================================================
// Strategies
// ============================================================================

fn day(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2022i32..2026, 1u32..13, 1u32..29)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn arb_client() -> impl Strategy<Value = Client> {
    (
        "[a-z]{2,8}",
        prop::sample::select(vec!["active", "trial", "suspended", "expired"]),
        prop::sample::select(vec!["starter", "professional", "enterprise"]),
        0u32..200,
        0u32..150,
        arb_date(),
    )
        .prop_map(|(name, status, plan, users_count, users_limit, created)| Client {
            id: Uuid::nil(),
            company: format!("{} inc", name),
            email: format!("{}@mail.test", name),
            name,
            phone: String::new(),
            status: status.to_string(),
            plan: plan.to_string(),
            users_count,
            users_limit,
            created_at: day(created),
        })
}

fn arb_values() -> impl Strategy<Value = FilterValues> {
    (
        prop::sample::select(vec!["", " ", "a", "inc", "zz"]),
        prop::sample::select(vec!["all", "", "active", "expired"]),
        prop::sample::select(vec!["all", "starter", "enterprise"]),
        prop::sample::select(vec!["all", "low", "medium", "high", "over"]),
        prop::option::of(arb_date()),
        prop::option::of(arb_date()),
    )
        .prop_map(|(search, status, plan, usage, from, to)| {
            let from = from.map(day);
            let to = to.map(day);
            let range = DateRange::parse(from.as_deref(), to.as_deref()).unwrap_or_default();
            FilterValues::new()
                .with("search", FilterValue::text(search))
                .with("status", FilterValue::text(status))
                .with("plan", FilterValue::text(plan))
                .with("usage", FilterValue::text(usage))
                .with("created_at", FilterValue::Range(range))
        })
}

/// Client that fails every active field of `values`
fn failing_client(values: &FilterValues) -> Client {
    let text = |key: &str| values.get(key).and_then(|v| v.as_text()).unwrap_or("all");
    let usage = match text("usage") {
        "low" => (90, 100),
        _ => (10, 100),
    };
    let range = values
        .get("created_at")
        .and_then(|v| v.as_range())
        .copied()
        .unwrap_or_default();
    let created = match (range.from, range.to) {
        (Some(from), _) => from - chrono::Duration::days(1),
        (None, Some(to)) => to + chrono::Duration::days(1),
        (None, None) => NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
    };

    Client {
        id: Uuid::nil(),
        name: "q".to_string(),
        email: "q@q.q".to_string(),
        company: "q".to_string(),
        phone: String::new(),
        // never offered by arb_values
        status: "trial".to_string(),
        plan: "professional".to_string(),
        users_count: usage.0,
        users_limit: usage.1,
        created_at: created.format("%Y-%m-%dT%H:%M:%S").to_string(),
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn filtering_is_idempotent(
        clients in prop::collection::vec(arb_client(), 0..30),
        values in arb_values(),
    ) {
        let once = filter(&clients, &values, &CLIENT_FILTERS);
        let twice = filter(&once, &values, &CLIENT_FILTERS);
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.len() <= clients.len());
    }

    #[test]
    fn result_is_an_ordered_subsequence(
        clients in prop::collection::vec(arb_client(), 0..30),
        values in arb_values(),
    ) {
        let result = filter(&clients, &values, &CLIENT_FILTERS);
        let mut rest = clients.iter();
        for kept in &result {
            prop_assert!(rest.any(|c| c == kept));
        }
    }

    #[test]
    fn zero_count_means_identity(
        clients in prop::collection::vec(arb_client(), 0..30),
        values in arb_values(),
    ) {
        if count_active(&values, &CLIENT_FILTERS) == 0 {
            prop_assert_eq!(filter(&clients, &values, &CLIENT_FILTERS), clients);
        }
    }

    #[test]
    fn nonzero_count_drops_a_failing_record(
        clients in prop::collection::vec(arb_client(), 0..10),
        values in arb_values(),
    ) {
        prop_assume!(count_active(&values, &CLIENT_FILTERS) > 0);
        let outsider = failing_client(&values);
        let mut input = clients.clone();
        input.push(outsider.clone());

        let result = filter(&input, &values, &CLIENT_FILTERS);
        prop_assert!(!result.contains(&outsider));
        prop_assert_ne!(result, input);
    }

    #[test]
    fn defaults_are_identity_for_every_entity(
        clients in prop::collection::vec(arb_client(), 0..10),
    ) {
        for kind in EntityKind::all() {
            let defaults = spec_for(*kind).default_filters();
            prop_assert_eq!(count_active(&defaults, spec_for(*kind)), 0);
        }
        let defaults = CLIENT_FILTERS.default_filters();
        prop_assert_eq!(filter(&clients, &defaults, &CLIENT_FILTERS), clients);
    }

    #[test]
    fn every_measure_has_one_bucket(value in -1.0e7f64..1.0e7) {
        for scale in [&USAGE_SCALE, &PRICE_SCALE, &LEAD_SCORE_SCALE, &DEAL_VALUE_SCALE] {
            let label = scale.classify(value);
            prop_assert!(label.is_some());
            let hits = scale
                .buckets
                .iter()
                .filter(|b| Some(b.label) == label)
                .count();
            prop_assert_eq!(hits, 1);
        }
    }

    #[test]
    fn date_range_is_monotonic(
        clients in prop::collection::vec(arb_client(), 0..30),
        a in arb_date(),
        b in arb_date(),
        widen in (0i64..400, 0i64..400),
        narrow in (0i64..200, 0i64..200),
    ) {
        let (from, to) = if a <= b { (a, b) } else { (b, a) };
        let days = chrono::Duration::days;
        let run = |from: NaiveDate, to: NaiveDate| {
            let (from, to) = (day(from), day(to));
            let range = DateRange::parse(Some(from.as_str()), Some(to.as_str())).unwrap();
            let values = FilterValues::new().with("created_at", FilterValue::Range(range));
            filter(&clients, &values, &CLIENT_FILTERS)
        };

        let base = run(from, to);
        let wide = run(from - days(widen.0), to + days(widen.1));
        let narrow = run(from + days(narrow.0), to - days(narrow.1));

        for kept in &base {
            prop_assert!(wide.contains(kept));
        }
        for kept in &narrow {
            prop_assert!(base.contains(kept));
        }
        prop_assert!(narrow.len() <= base.len() && base.len() <= wide.len());
    }
}
