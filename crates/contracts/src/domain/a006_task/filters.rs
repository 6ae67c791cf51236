use crate::shared::filters::{
    opt, EntityKind, FilterField, FilterOption, FilterSpec, DEFAULT_DATE_ATTRIBUTE,
};

static PRIORITY: &[FilterOption] = &[
    opt("low", "Low"),
    opt("medium", "Medium"),
    opt("high", "High"),
    opt("urgent", "Urgent"),
];

static STATUS: &[FilterOption] = &[
    opt("todo", "To do"),
    opt("in_progress", "In progress"),
    opt("done", "Done"),
    opt("cancelled", "Cancelled"),
];

static FIELDS: &[FilterField] = &[
    FilterField::search("search", "Search", &["title", "description", "assignee"]),
    FilterField::select("priority", "Priority", PRIORITY),
    FilterField::select("status", "Status", STATUS),
    FilterField::date_range("due_date", "Due", "due_date"),
    FilterField::date_range("created_at", "Created", DEFAULT_DATE_ATTRIBUTE).advanced(),
];

pub static TASK_FILTERS: FilterSpec = FilterSpec {
    entity: EntityKind::Task,
    fields: FIELDS,
};

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::a006_task::aggregate::Task;
    use crate::shared::filters::{count_active, filter, DateRange, FilterValue, FilterValues};

    fn task(title: &str, priority: &str, due_date: Option<&str>) -> Task {
        Task {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: String::new(),
            assignee: Some("olga".to_string()),
            priority: priority.to_string(),
            status: "todo".to_string(),
            due_date: due_date.map(str::to_string),
            created_at: "2024-05-01".to_string(),
        }
    }

    #[test]
    fn test_spec_is_valid() {
        assert_eq!(TASK_FILTERS.validate(), Ok(()));
    }

    #[test]
    fn test_due_date_upper_bound_covers_whole_day() {
        let tasks = vec![
            task("Call back", "high", Some("2024-05-31T17:30:00")),
            task("Send invoice", "low", Some("2024-06-01T00:00:00")),
            task("Someday", "low", None),
        ];
        let range = DateRange::parse(None, Some("2024-05-31")).unwrap();
        let values = FilterValues::new().with("due_date", FilterValue::Range(range));
        let result = filter(&tasks, &values, &TASK_FILTERS);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Call back");
    }

    #[test]
    fn test_priority_and_search_combined() {
        let tasks = vec![
            task("Call back", "high", None),
            task("Call supplier", "low", None),
        ];
        let values = FilterValues::new()
            .with("search", FilterValue::text("call"))
            .with("priority", FilterValue::text("high"));
        assert_eq!(count_active(&values, &TASK_FILTERS), 2);
        let result = filter(&tasks, &values, &TASK_FILTERS);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Call back");
    }
}
