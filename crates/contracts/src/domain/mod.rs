pub mod a001_client;
pub mod a002_lead;
pub mod a003_package;
pub mod a004_contact;
pub mod a005_user;
pub mod a006_task;
pub mod a007_deal;
pub mod a008_subscription;

use crate::shared::filters::{EntityKind, FilterSpec};

/// Filter declaration of an entity type
pub fn spec_for(kind: EntityKind) -> &'static FilterSpec {
    match kind {
        EntityKind::Client => &a001_client::filters::CLIENT_FILTERS,
        EntityKind::Lead => &a002_lead::filters::LEAD_FILTERS,
        EntityKind::Package => &a003_package::filters::PACKAGE_FILTERS,
        EntityKind::Contact => &a004_contact::filters::CONTACT_FILTERS,
        EntityKind::User => &a005_user::filters::USER_FILTERS,
        EntityKind::Task => &a006_task::filters::TASK_FILTERS,
        EntityKind::Deal => &a007_deal::filters::DEAL_FILTERS,
        EntityKind::Subscription => &a008_subscription::filters::SUBSCRIPTION_FILTERS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_spec_is_valid_and_owned_by_its_kind() {
        for kind in EntityKind::all() {
            let spec = spec_for(*kind);
            assert_eq!(spec.entity, *kind);
            assert_eq!(spec.validate(), Ok(()), "{kind}");
        }
    }
}
