use crate::shared::filters::{
    opt, EntityKind, FilterField, FilterOption, FilterSpec, DEFAULT_DATE_ATTRIBUTE,
};

static CONTACT_TYPE: &[FilterOption] = &[
    opt("customer", "Customer"),
    opt("partner", "Partner"),
    opt("vendor", "Vendor"),
    opt("prospect", "Prospect"),
];

static STATUS: &[FilterOption] = &[opt("active", "Active"), opt("inactive", "Inactive")];

static INDUSTRY: &[FilterOption] = &[
    opt("technology", "Technology"),
    opt("retail", "Retail"),
    opt("finance", "Finance"),
    opt("healthcare", "Healthcare"),
    opt("manufacturing", "Manufacturing"),
];

static FIELDS: &[FilterField] = &[
    FilterField::search(
        "search",
        "Search",
        &["full_name", "email", "phone", "company.name"],
    ),
    FilterField::select("contact_type", "Type", CONTACT_TYPE),
    FilterField::select("status", "Status", STATUS),
    FilterField::select_on("industry", "Industry", "company.industry", INDUSTRY).advanced(),
    FilterField::date_range("created_at", "Created", DEFAULT_DATE_ATTRIBUTE).advanced(),
];

pub static CONTACT_FILTERS: FilterSpec = FilterSpec {
    entity: EntityKind::Contact,
    fields: FIELDS,
};
