use crate::shared::filters::{
    opt, EntityKind, FilterField, FilterOption, FilterSpec, USAGE_SCALE,
};

static STATUS: &[FilterOption] = &[
    opt("active", "Active"),
    opt("trialing", "Trialing"),
    opt("past_due", "Past due"),
    opt("cancelled", "Cancelled"),
    opt("expired", "Expired"),
];

static BILLING_CYCLE: &[FilterOption] = &[opt("monthly", "Monthly"), opt("yearly", "Yearly")];

static USAGE: &[FilterOption] = &[
    opt("low", "Low (0–25%)"),
    opt("medium", "Medium (26–75%)"),
    opt("high", "High (76–100%)"),
    opt("over", "Over limit"),
];

static FIELDS: &[FilterField] = &[
    FilterField::search("search", "Search", &["client_name", "package_name"]),
    FilterField::select("status", "Status", STATUS),
    FilterField::select("billing_cycle", "Billing cycle", BILLING_CYCLE).advanced(),
    FilterField::bucketed("usage", "Seat usage", "usage_percentage", &USAGE_SCALE, USAGE),
    FilterField::date_range("started_at", "Started", "started_at"),
];

pub static SUBSCRIPTION_FILTERS: FilterSpec = FilterSpec {
    entity: EntityKind::Subscription,
    fields: FIELDS,
};
