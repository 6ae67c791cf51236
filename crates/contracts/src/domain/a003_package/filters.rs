use crate::shared::filters::{
    opt, EntityKind, FilterField, FilterOption, FilterSpec, DEFAULT_DATE_ATTRIBUTE, PRICE_SCALE,
};

static STATUS: &[FilterOption] = &[opt("active", "Active"), opt("archived", "Archived")];

static BILLING_CYCLE: &[FilterOption] = &[opt("monthly", "Monthly"), opt("yearly", "Yearly")];

static PRICE: &[FilterOption] = &[
    opt("free", "Free"),
    opt("low", "Up to 50"),
    opt("medium", "51–150"),
    opt("high", "151–500"),
    opt("premium", "Above 500"),
];

static FIELDS: &[FilterField] = &[
    FilterField::search("search", "Search", &["name", "description"]),
    FilterField::select("status", "Status", STATUS),
    FilterField::select("billing_cycle", "Billing cycle", BILLING_CYCLE),
    FilterField::bucketed("price_range", "Price", "price", &PRICE_SCALE, PRICE),
    FilterField::date_range("created_at", "Created", DEFAULT_DATE_ATTRIBUTE).advanced(),
];

pub static PACKAGE_FILTERS: FilterSpec = FilterSpec {
    entity: EntityKind::Package,
    fields: FIELDS,
};

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::a003_package::aggregate::Package;
    use crate::shared::filters::{filter, FilterValue, FilterValues};

    fn package(name: &str, price: f64) -> Package {
        Package {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: format!("{} tier", name),
            price,
            billing_cycle: "monthly".to_string(),
            status: "active".to_string(),
            users_limit: 10,
            created_at: "2023-06-01".to_string(),
        }
    }

    #[test]
    fn test_spec_is_valid() {
        assert_eq!(PACKAGE_FILTERS.validate(), Ok(()));
    }

    #[test]
    fn test_price_buckets() {
        let packages = vec![
            package("Free", 0.0),
            package("Basic", 49.0),
            package("Team", 150.0),
            package("Business", 499.0),
            package("Corporate", 1200.0),
        ];
        let pick = |bucket: &str| -> Vec<String> {
            let values = FilterValues::new().with("price_range", FilterValue::text(bucket));
            filter(&packages, &values, &PACKAGE_FILTERS)
                .into_iter()
                .map(|p| p.name)
                .collect()
        };
        assert_eq!(pick("free"), vec!["Free"]);
        assert_eq!(pick("low"), vec!["Basic"]);
        assert_eq!(pick("medium"), vec!["Team"]);
        assert_eq!(pick("high"), vec!["Business"]);
        assert_eq!(pick("premium"), vec!["Corporate"]);
    }
}
