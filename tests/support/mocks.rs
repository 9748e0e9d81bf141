// tests/support/mocks.rs
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use newsdesk::application::ports::time::Clock;
use newsdesk::application::services::ApplicationServices;
use newsdesk::domain::news::{NewsReadRepository, NewsWriteRepository};
use newsdesk::infrastructure::{repositories::InMemoryNewsRepository, util::DefaultSlugGenerator};

/// Fixed timestamp for deterministic tests.
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Starts at `fixed_now` and moves forward one minute per reading.
pub struct SteppingClock {
    next: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self {
            next: Mutex::new(fixed_now()),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().unwrap();
        let now = *next;
        *next = now + Duration::minutes(1);
        now
    }
}

pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub repo: Arc<InMemoryNewsRepository>,
}

pub fn test_app() -> TestApp {
    test_app_with_page_size(10)
}

pub fn test_app_with_page_size(per_page: u32) -> TestApp {
    let repo = Arc::new(InMemoryNewsRepository::new());
    let write_repo: Arc<dyn NewsWriteRepository> = repo.clone();
    let read_repo: Arc<dyn NewsReadRepository> = repo.clone();
    let services = Arc::new(ApplicationServices::new(
        write_repo,
        read_repo,
        Arc::new(SteppingClock::new()),
        Arc::new(DefaultSlugGenerator),
        per_page,
    ));
    TestApp { services, repo }
}
