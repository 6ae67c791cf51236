use crate::shared::filters::{
    opt, EntityKind, FilterField, FilterOption, FilterSpec, DEFAULT_DATE_ATTRIBUTE,
};

static ROLE: &[FilterOption] = &[
    opt("admin", "Administrator"),
    opt("manager", "Manager"),
    opt("agent", "Agent"),
    opt("viewer", "Viewer"),
];

static STATUS: &[FilterOption] = &[
    opt("active", "Active"),
    opt("invited", "Invited"),
    opt("disabled", "Disabled"),
];

static FIELDS: &[FilterField] = &[
    FilterField::search("search", "Search", &["name", "email"]),
    FilterField::select("role", "Role", ROLE),
    FilterField::select("status", "Status", STATUS),
    FilterField::date_range("last_login", "Last login", "last_login_at").advanced(),
    FilterField::date_range("created_at", "Created", DEFAULT_DATE_ATTRIBUTE),
];

pub static USER_FILTERS: FilterSpec = FilterSpec {
    entity: EntityKind::User,
    fields: FIELDS,
};

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::a005_user::aggregate::User;
    use crate::shared::filters::{filter, DateRange, FilterValue, FilterValues};

    fn user(name: &str, role: &str, last_login_at: Option<&str>) -> User {
        User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@crm.test", name.to_lowercase()),
            role: role.to_string(),
            status: if last_login_at.is_some() { "active" } else { "invited" }.to_string(),
            last_login_at: last_login_at.map(str::to_string),
            created_at: "2024-01-01T09:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_spec_is_valid() {
        assert_eq!(USER_FILTERS.validate(), Ok(()));
    }

    #[test]
    fn test_role_select() {
        let users = vec![user("Olga", "admin", None), user("Ivan", "agent", None)];
        let values = FilterValues::new().with("role", FilterValue::text("agent"));
        let result = filter(&users, &values, &USER_FILTERS);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Ivan");
    }

    #[test]
    fn test_last_login_range_excludes_never_logged_in() {
        let users = vec![
            user("Olga", "admin", Some("2024-06-10T08:15:00Z")),
            user("Ivan", "agent", None),
            user("Petr", "viewer", Some("2023-12-31T23:00:00Z")),
        ];
        let range = DateRange::parse(Some("2024-06-01"), Some("2024-06-30")).unwrap();
        let values = FilterValues::new().with("last_login", FilterValue::Range(range));
        let result = filter(&users, &values, &USER_FILTERS);
        assert_eq!(result.iter().map(|u| u.name.as_str()).collect::<Vec<_>>(), vec!["Olga"]);
    }
}
