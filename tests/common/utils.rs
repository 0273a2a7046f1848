use once_cell::sync::Lazy;
use uuid::Uuid;

use vitalog::models::medication::{Frequency, MedicationCatalogOption, MedicationCategory};
use vitalog::session::SessionGate;
use vitalog::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub fn init_tracing() {
    Lazy::force(&TRACING);
}

/// Session gate with a fixed answer: `Some(user)` for a signed-in user,
/// `None` for no session.
#[derive(Clone, Copy)]
pub struct TestGate(pub Option<Uuid>);

impl SessionGate for TestGate {
    fn current_user(&self) -> Option<Uuid> {
        self.0
    }
}

pub fn signed_in() -> (Uuid, TestGate) {
    let user_id = Uuid::new_v4();
    (user_id, TestGate(Some(user_id)))
}

pub fn catalog_option(
    name: &str,
    category: MedicationCategory,
    default_dosage: &str,
    default_frequency: Frequency,
    notes: Option<&str>,
) -> MedicationCatalogOption {
    MedicationCatalogOption {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category,
        default_dosage: default_dosage.to_string(),
        default_frequency,
        notes: notes.map(str::to_string),
    }
}
