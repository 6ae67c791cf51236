use crate::shared::filters::{
    opt, EntityKind, FilterField, FilterOption, FilterSpec, DEAL_VALUE_SCALE,
    DEFAULT_DATE_ATTRIBUTE,
};

static STAGE: &[FilterOption] = &[
    opt("prospecting", "Prospecting"),
    opt("qualification", "Qualification"),
    opt("proposal", "Proposal"),
    opt("negotiation", "Negotiation"),
    opt("won", "Won"),
    opt("lost", "Lost"),
];

static SIZE: &[FilterOption] = &[
    opt("small", "Up to 1 000"),
    opt("medium", "1 001–10 000"),
    opt("large", "10 001–100 000"),
    opt("enterprise", "Above 100 000"),
];

static FIELDS: &[FilterField] = &[
    FilterField::search("search", "Search", &["title", "contact_name", "company", "owner"]),
    FilterField::select("stage", "Stage", STAGE),
    FilterField::bucketed("size", "Deal size", "amount", &DEAL_VALUE_SCALE, SIZE),
    FilterField::date_range("expected_close", "Expected close", "expected_close_date"),
    FilterField::date_range("created_at", "Created", DEFAULT_DATE_ATTRIBUTE).advanced(),
];

pub static DEAL_FILTERS: FilterSpec = FilterSpec {
    entity: EntityKind::Deal,
    fields: FIELDS,
};
