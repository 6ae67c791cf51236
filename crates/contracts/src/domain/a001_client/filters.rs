use crate::shared::filters::{
    opt, EntityKind, FilterField, FilterOption, FilterSpec, DEFAULT_DATE_ATTRIBUTE, USAGE_SCALE,
};

static STATUS: &[FilterOption] = &[
    opt("active", "Active"),
    opt("trial", "Trial"),
    opt("suspended", "Suspended"),
    opt("expired", "Expired"),
];

static PLAN: &[FilterOption] = &[
    opt("starter", "Starter"),
    opt("professional", "Professional"),
    opt("enterprise", "Enterprise"),
];

static USAGE: &[FilterOption] = &[
    opt("low", "Low (0–25%)"),
    opt("medium", "Medium (26–75%)"),
    opt("high", "High (76–100%)"),
    opt("over", "Over limit"),
];

static FIELDS: &[FilterField] = &[
    FilterField::search("search", "Search", &["name", "email", "company", "phone"]),
    FilterField::select("status", "Status", STATUS),
    FilterField::select("plan", "Plan", PLAN).advanced(),
    FilterField::bucketed("usage", "Seat usage", "usage_percentage", &USAGE_SCALE, USAGE),
    FilterField::date_range("created_at", "Created", DEFAULT_DATE_ATTRIBUTE).advanced(),
];

pub static CLIENT_FILTERS: FilterSpec = FilterSpec {
    entity: EntityKind::Client,
    fields: FIELDS,
};
