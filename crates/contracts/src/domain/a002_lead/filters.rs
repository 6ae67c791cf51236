use crate::shared::filters::{
    opt, EntityKind, FilterField, FilterOption, FilterSpec, DEFAULT_DATE_ATTRIBUTE,
    LEAD_SCORE_SCALE,
};

static STATUS: &[FilterOption] = &[
    opt("new", "New"),
    opt("contacted", "Contacted"),
    opt("qualified", "Qualified"),
    opt("converted", "Converted"),
    opt("lost", "Lost"),
];

static SOURCE: &[FilterOption] = &[
    opt("website", "Website"),
    opt("referral", "Referral"),
    opt("social", "Social media"),
    opt("campaign", "Campaign"),
    opt("event", "Event"),
];

static TEMPERATURE: &[FilterOption] = &[
    opt("cold", "Cold (0–39)"),
    opt("warm", "Warm (40–69)"),
    opt("hot", "Hot (70+)"),
];

static FIELDS: &[FilterField] = &[
    FilterField::search("search", "Search", &["name", "email", "company", "phone"]),
    FilterField::select("status", "Status", STATUS),
    FilterField::select("source", "Source", SOURCE),
    FilterField::bucketed("temperature", "Temperature", "score", &LEAD_SCORE_SCALE, TEMPERATURE)
        .advanced(),
    FilterField::date_range("created_at", "Created", DEFAULT_DATE_ATTRIBUTE),
];

pub static LEAD_FILTERS: FilterSpec = FilterSpec {
    entity: EntityKind::Lead,
    fields: FIELDS,
};

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::a002_lead::aggregate::Lead;
    use crate::shared::filters::{filter, FilterValue, FilterValues};

    fn lead(name: &str, company: Option<&str>, score: u8) -> Lead {
        Lead {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@mail.test", name.to_lowercase()),
            company: company.map(str::to_string),
            phone: None,
            source: "referral".to_string(),
            status: "new".to_string(),
            score,
            assigned_to: None,
            created_at: "2024-04-01".to_string(),
        }
    }

    #[test]
    fn test_spec_is_valid() {
        assert_eq!(LEAD_FILTERS.validate(), Ok(()));
    }

    #[test]
    fn test_search_skips_missing_company() {
        let leads = vec![lead("Ann", None, 10), lead("Bob", Some("Northwind"), 50)];
        let values = FilterValues::new().with("search", FilterValue::text("north"));
        let result = filter(&leads, &values, &LEAD_FILTERS);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Bob");
    }

    #[test]
    fn test_temperature_buckets() {
        let leads = vec![lead("Ann", None, 39), lead("Bob", None, 40), lead("Cid", None, 95)];
        let values = FilterValues::new().with("temperature", FilterValue::text("warm"));
        let result = filter(&leads, &values, &LEAD_FILTERS);
        assert_eq!(result.iter().map(|l| l.score).collect::<Vec<_>>(), vec![40]);
    }
}
