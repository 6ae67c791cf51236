//! In-memory entity lists served by the list endpoints

use contracts::domain::a001_client::aggregate::Client;
use contracts::domain::a002_lead::aggregate::Lead;
use contracts::domain::a003_package::aggregate::Package;
use contracts::domain::a004_contact::aggregate::{CompanyRef, Contact};
use contracts::domain::a005_user::aggregate::User;
use contracts::domain::a006_task::aggregate::Task;
use contracts::domain::a007_deal::aggregate::Deal;
use contracts::domain::a008_subscription::aggregate::Subscription;
use once_cell::sync::OnceCell;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct DemoStore {
    pub clients: Vec<Client>,
    pub leads: Vec<Lead>,
    pub packages: Vec<Package>,
    pub contacts: Vec<Contact>,
    pub users: Vec<User>,
    pub tasks: Vec<Task>,
    pub deals: Vec<Deal>,
    pub subscriptions: Vec<Subscription>,
}

static STORE: OnceCell<DemoStore> = OnceCell::new();

/// Fill the store once at startup; later calls are ignored
pub fn initialize_store(seed_demo: bool) {
    let store = if seed_demo {
        DemoStore::seeded()
    } else {
        DemoStore::default()
    };
    let counts = store.counts();
    if STORE.set(store).is_ok() {
        tracing::info!(?counts, seed_demo, "demo store initialised");
    }
}

/// Store contents; empty if startup did not initialise it
pub fn get_store() -> &'static DemoStore {
    STORE.get_or_init(DemoStore::default)
}

fn id(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

fn s(v: &str) -> String {
    v.to_string()
}

fn some(v: &str) -> Option<String> {
    Some(v.to_string())
}

impl DemoStore {
    fn counts(&self) -> [usize; 8] {
        [
            self.clients.len(),
            self.leads.len(),
            self.packages.len(),
            self.contacts.len(),
            self.users.len(),
            self.tasks.len(),
            self.deals.len(),
            self.subscriptions.len(),
        ]
    }

    pub fn seeded() -> Self {
        Self {
            clients: seed_clients(),
            leads: seed_leads(),
            packages: seed_packages(),
            contacts: seed_contacts(),
            users: seed_users(),
            tasks: seed_tasks(),
            deals: seed_deals(),
            subscriptions: seed_subscriptions(),
        }
    }
}

// ============================================================================
// Seed data
// ============================================================================

fn seed_clients() -> Vec<Client> {
    let client = |n: u128, name: &str, status: &str, plan: &str, users: (u32, u32), created: &str| Client {
        id: id(0x1000 + n),
        name: s(name),
        email: format!("office@{}.example", name.to_lowercase().replace(' ', "-")),
        company: format!("{} Ltd", name),
        phone: format!("+1 555 01{:02}", n),
        status: s(status),
        plan: s(plan),
        users_count: users.0,
        users_limit: users.1,
        created_at: s(created),
    };
    vec![
        client(1, "Acme", "active", "professional", (22, 25), "2024-01-10T09:30:00"),
        client(2, "Beta Foods", "trial", "starter", (2, 10), "2024-02-03T14:00:00"),
        client(3, "Contoso", "active", "enterprise", (240, 200), "2023-11-21T08:15:00"),
        client(4, "Globex", "suspended", "starter", (5, 10), "2023-07-14T16:45:00"),
        client(5, "Initech", "expired", "professional", (0, 25), "2022-12-01T10:00:00"),
        client(6, "Umbrella", "active", "enterprise", (120, 200), "2024-03-18T11:20:00"),
    ]
}

fn seed_leads() -> Vec<Lead> {
    let lead = |n: u128, name: &str, company: Option<&str>, source: &str, status: &str, score, created: &str| Lead {
        id: id(0x2000 + n),
        name: s(name),
        email: format!("{}@mail.example", name.split(' ').next().unwrap_or(name).to_lowercase()),
        company: company.map(s),
        phone: None,
        source: s(source),
        status: s(status),
        score,
        assigned_to: some("olga"),
        created_at: s(created),
    };
    vec![
        lead(1, "Ann Lee", Some("Northwind"), "website", "new", 22, "2024-04-02"),
        lead(2, "Bob Stone", None, "referral", "contacted", 48, "2024-04-05"),
        lead(3, "Carla Diaz", Some("Fabrikam"), "event", "qualified", 81, "2024-03-28"),
        lead(4, "Dan Wu", Some("Tailspin"), "campaign", "lost", 12, "2024-01-19"),
        lead(5, "Eva Novak", None, "social", "converted", 93, "2024-02-11"),
    ]
}

fn seed_packages() -> Vec<Package> {
    let package = |n: u128, name: &str, price, cycle: &str, status: &str, users_limit, created: &str| Package {
        id: id(0x3000 + n),
        name: s(name),
        description: format!("{} plan for growing teams", name),
        price,
        billing_cycle: s(cycle),
        status: s(status),
        users_limit,
        created_at: s(created),
    };
    vec![
        package(1, "Free", 0.0, "monthly", "active", 2, "2022-01-01"),
        package(2, "Starter", 29.0, "monthly", "active", 10, "2022-01-01"),
        package(3, "Professional", 99.0, "monthly", "active", 25, "2022-06-15"),
        package(4, "Enterprise", 1490.0, "yearly", "active", 200, "2023-02-01"),
        package(5, "Legacy Team", 249.0, "yearly", "archived", 50, "2021-09-09"),
    ]
}

fn seed_contacts() -> Vec<Contact> {
    let contact = |n: u128, first: &str, last: &str, company: Option<(&str, Option<&str>)>, kind: &str, created: &str| Contact {
        id: id(0x4000 + n),
        first_name: s(first),
        last_name: s(last),
        email: format!("{}.{}@contact.example", first.to_lowercase(), last.to_lowercase()),
        phone: None,
        company: company.map(|(name, industry)| CompanyRef {
            name: s(name),
            industry: industry.map(s),
        }),
        contact_type: s(kind),
        status: s("active"),
        created_at: s(created),
    };
    vec![
        contact(1, "Maria", "Garcia", Some(("Northwind", Some("retail"))), "customer", "2024-01-05"),
        contact(2, "Li", "Wei", Some(("Contoso", Some("technology"))), "partner", "2023-10-12"),
        contact(3, "John", "Smith", None, "prospect", "2024-03-01"),
        contact(4, "Fatima", "Khan", Some(("Woodgrove Bank", Some("finance"))), "customer", "2023-05-30"),
        contact(5, "Pavel", "Orlov", Some(("Litware", None)), "vendor", "2024-02-20"),
    ]
}

fn seed_users() -> Vec<User> {
    let user = |n: u128, name: &str, role: &str, status: &str, last_login: Option<&str>, created: &str| User {
        id: id(0x5000 + n),
        name: s(name),
        email: format!("{}@crm.example", name.to_lowercase()),
        role: s(role),
        status: s(status),
        last_login_at: last_login.map(s),
        created_at: s(created),
    };
    vec![
        user(1, "Olga", "admin", "active", Some("2024-06-10T08:15:00Z"), "2022-01-01"),
        user(2, "Ivan", "manager", "active", Some("2024-05-28T17:40:00Z"), "2022-03-14"),
        user(3, "Sara", "agent", "invited", None, "2024-06-01"),
        user(4, "Tom", "viewer", "disabled", Some("2023-09-02T12:00:00Z"), "2023-01-20"),
    ]
}

fn seed_tasks() -> Vec<Task> {
    let task = |n: u128, title: &str, assignee: Option<&str>, priority: &str, status: &str, due: Option<&str>| Task {
        id: id(0x6000 + n),
        title: s(title),
        description: format!("Follow-up: {}", title.to_lowercase()),
        assignee: assignee.map(s),
        priority: s(priority),
        status: s(status),
        due_date: due.map(s),
        created_at: s("2024-05-01T09:00:00"),
    };
    vec![
        task(1, "Call Acme about renewal", Some("olga"), "high", "todo", Some("2024-06-12")),
        task(2, "Prepare Contoso proposal", Some("ivan"), "urgent", "in_progress", Some("2024-06-07")),
        task(3, "Update price list", None, "low", "todo", None),
        task(4, "Send onboarding pack", Some("sara"), "medium", "done", Some("2024-05-20")),
        task(5, "Archive legacy accounts", Some("tom"), "low", "cancelled", Some("2024-04-30")),
    ]
}

fn seed_deals() -> Vec<Deal> {
    let deal = |n: u128, title: &str, company: &str, stage: &str, amount, close: Option<&str>| Deal {
        id: id(0x7000 + n),
        title: s(title),
        contact_name: s("Maria Garcia"),
        company: s(company),
        stage: s(stage),
        amount,
        owner: s("ivan"),
        expected_close_date: close.map(s),
        created_at: s("2024-02-15"),
    };
    vec![
        deal(1, "Acme seat expansion", "Acme", "negotiation", 12_500.0, Some("2024-07-01")),
        deal(2, "Northwind pilot", "Northwind", "won", 900.0, Some("2024-03-10")),
        deal(3, "Contoso group licence", "Contoso", "proposal", 180_000.0, Some("2024-09-30")),
        deal(4, "Globex upgrade", "Globex", "lost", 4_200.0, None),
        deal(5, "Fabrikam rollout", "Fabrikam", "qualification", 48_000.0, Some("2024-08-15")),
    ]
}

fn seed_subscriptions() -> Vec<Subscription> {
    let sub = |n: u128, client: &str, package: &str, status: &str, cycle: &str, users: (u32, u32), started: &str| {
        Subscription {
            id: id(0x8000 + n),
            client_name: s(client),
            package_name: s(package),
            status: s(status),
            billing_cycle: s(cycle),
            users_count: users.0,
            users_limit: users.1,
            started_at: s(started),
            renews_at: None,
        }
    };
    vec![
        sub(1, "Acme", "Professional", "active", "monthly", (18, 25), "2024-01-10"),
        sub(2, "Beta Foods", "Starter", "trialing", "monthly", (2, 10), "2024-02-03"),
        sub(3, "Contoso", "Enterprise", "active", "yearly", (240, 200), "2023-11-21"),
        sub(4, "Globex", "Starter", "past_due", "monthly", (5, 10), "2023-07-14"),
        sub(5, "Initech", "Professional", "expired", "yearly", (0, 0), "2022-12-01"),
    ]
}
