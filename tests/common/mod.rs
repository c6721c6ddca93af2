use orgledger::directory::seed;
use orgledger::{Directory, EmployeeId};

/// Install a test-writer subscriber so traced spans land in test output.
/// Safe to call from every test; only the first call wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// A small organization used across the integration suites:
///
/// - Engineering (Berlin): Alice > Bob > Carol
/// - Sales (Lisbon): Dan > Erin
/// - Research (Zurich): no employees
///
/// Engineering's four reviews carry ratings 5, 5, 4, 3; Sales has a 4 and
/// a 2.
pub const ORG_SEED: &str = r#"{
    "departments": [
        {"name": "Engineering", "location": "Berlin", "budget": 500000},
        {"name": "Sales", "location": "Lisbon", "budget": 200000},
        {"name": "Research", "location": "Zurich", "budget": 150000}
    ],
    "employees": [
        {
            "first_name": "Alice", "last_name": "Nguyen",
            "email": "alice@example.com", "department": "Engineering",
            "hire_date": "2019-02-11", "salary": 85000
        },
        {
            "first_name": "Bob", "last_name": "Okafor",
            "email": "bob@example.com", "department": "Engineering",
            "manager": "alice@example.com",
            "hire_date": "2021-06-01", "salary": 75000
        },
        {
            "first_name": "Carol", "last_name": "Smith",
            "email": "carol@example.com", "department": "Engineering",
            "manager": "bob@example.com",
            "hire_date": "2022-03-15", "salary": 65000
        },
        {
            "first_name": "Dan", "last_name": "Wu",
            "email": "dan@example.com", "department": "Sales",
            "hire_date": "2020-09-01", "salary": 70000
        },
        {
            "first_name": "Erin", "last_name": "Byrne",
            "email": "erin@example.com", "department": "Sales",
            "manager": "dan@example.com",
            "hire_date": "2023-01-09", "salary": 60000
        }
    ],
    "reviews": [
        {
            "employee": "bob@example.com", "reviewer": "alice@example.com",
            "review_date": "2024-03-01", "rating": 5,
            "comment": "shipped the billing migration"
        },
        {
            "employee": "carol@example.com", "reviewer": "alice@example.com",
            "review_date": "2024-03-05", "rating": 5,
            "comment": "strong ramp-up"
        },
        {
            "employee": "bob@example.com", "reviewer": "alice@example.com",
            "review_date": "2024-09-01", "rating": 4,
            "comment": "steady quarter"
        },
        {
            "employee": "carol@example.com", "reviewer": "bob@example.com",
            "review_date": "2024-09-05", "rating": 3,
            "comment": "missed two deadlines"
        },
        {
            "employee": "erin@example.com", "reviewer": "dan@example.com",
            "review_date": "2024-04-01", "rating": 4,
            "comment": "great pipeline work"
        },
        {
            "employee": "dan@example.com", "reviewer": "erin@example.com",
            "review_date": "2024-05-01", "rating": 2,
            "comment": "upward feedback: needs focus"
        }
    ]
}"#;

pub fn sample_org() -> Directory {
    seed::from_json(ORG_SEED).expect("sample org seed is valid")
}

pub fn employee_id(store: &Directory, email: &str) -> EmployeeId {
    store
        .find_employee_by_email(email)
        .unwrap_or_else(|| panic!("no employee with email {}", email))
        .id
}
