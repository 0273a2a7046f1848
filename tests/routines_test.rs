use chrono::NaiveTime;
use uuid::Uuid;
use vitalog::controller::{PageError, RoutinesController};
use vitalog::models::routine::{RoutineCategory, RoutineDraft};
use vitalog::store::StoreError;

mod common;
use common::memory::MemoryStore;
use common::utils::{init_tracing, signed_in};

fn draft(activity: &str, hour: u32, category: RoutineCategory) -> RoutineDraft {
    RoutineDraft::default()
        .with_category(category)
        .with_time_of_day(NaiveTime::from_hms_opt(hour, 0, 0))
        .with_activity(activity)
}

#[tokio::test]
async fn plan_is_listed_in_time_order() {
    init_tracing();
    let store = MemoryStore::new();
    let (user_id, gate) = signed_in();
    let mut page = RoutinesController::new(store, gate);
    page.mount().await;

    page.set_draft(draft("Bedtime", 22, RoutineCategory::Sleep));
    page.submit().await.unwrap();
    page.set_draft(draft("Morning walk (30 minutes)", 7, RoutineCategory::Exercise));
    page.submit().await.unwrap();

    let plan = page.state().data().unwrap();
    let activities: Vec<_> = plan.iter().map(|r| r.activity.as_str()).collect();
    assert_eq!(activities, vec!["Morning walk (30 minutes)", "Bedtime"]);
    assert!(plan.iter().all(|r| r.user_id == user_id));
    assert!(plan.iter().all(|r| !r.is_completed));
}

#[tokio::test]
async fn toggling_flips_completion_and_refreshes_from_the_store() {
    init_tracing();
    let store = MemoryStore::new();
    let (_, gate) = signed_in();
    let mut page = RoutinesController::new(store, gate);
    page.mount().await;

    page.set_draft(draft("Morning walk (30 minutes)", 7, RoutineCategory::Exercise));
    page.submit().await.unwrap();
    let id = page.state().data().unwrap()[0].id;

    page.toggle_completed(id).await.unwrap();
    assert!(page.state().data().unwrap()[0].is_completed);

    page.toggle_completed(id).await.unwrap();
    assert!(!page.state().data().unwrap()[0].is_completed);
}

#[tokio::test]
async fn toggling_a_vanished_step_reports_not_found_and_reconciles() {
    init_tracing();
    let store = MemoryStore::new();
    let (_, gate) = signed_in();
    let mut page = RoutinesController::new(store, gate);
    page.mount().await;

    page.set_draft(draft("Bedtime", 22, RoutineCategory::Sleep));
    page.submit().await.unwrap();

    let err = page.toggle_completed(Uuid::new_v4()).await.unwrap_err();

    assert!(matches!(err, PageError::Store(StoreError::NotFound)));
    assert_eq!(page.state().data().unwrap().len(), 1);
}

#[tokio::test]
async fn deleted_step_never_comes_back() {
    init_tracing();
    let store = MemoryStore::new();
    let (_, gate) = signed_in();
    let mut page = RoutinesController::new(store, gate);
    page.mount().await;

    page.set_draft(draft("Bedtime", 22, RoutineCategory::Sleep));
    page.submit().await.unwrap();
    let id = page.state().data().unwrap()[0].id;

    page.delete(id).await.unwrap();
    assert!(page.state().data().unwrap().is_empty());

    // Deleting it again is NotFound, not a crash.
    let err = page.delete(id).await.unwrap_err();
    assert!(matches!(err, PageError::Store(StoreError::NotFound)));
}

#[tokio::test]
async fn missing_fields_are_rejected_in_documented_order() {
    init_tracing();
    let store = MemoryStore::new();
    let (_, gate) = signed_in();
    let mut page = RoutinesController::new(store.clone(), gate);
    page.mount().await;
    let calls_after_mount = store.backend_calls();

    // Time is checked before activity.
    page.set_draft(RoutineDraft::default());
    let err = page.submit().await.unwrap_err();
    assert_eq!(err.user_message(), "Time is required");

    page.set_draft(RoutineDraft::default().with_time_of_day(NaiveTime::from_hms_opt(7, 0, 0)));
    let err = page.submit().await.unwrap_err();
    assert_eq!(err.user_message(), "Activity is required");

    assert_eq!(store.backend_calls(), calls_after_mount);
}

#[tokio::test]
async fn category_switch_through_the_form_clears_the_activity() {
    init_tracing();
    let store = MemoryStore::new();
    let (_, gate) = signed_in();
    let mut page = RoutinesController::new(store, gate);
    page.mount().await;

    let exercise_activity = RoutineCategory::Exercise.activities()[0];
    page.set_draft(
        RoutineDraft::default()
            .with_time_of_day(NaiveTime::from_hms_opt(7, 0, 0))
            .with_activity(exercise_activity),
    );
    // The user changes their mind about the category; the stale activity
    // must not survive into the new option set.
    let switched = page.draft().clone().with_category(RoutineCategory::Nutrition);
    page.set_draft(switched);

    assert!(page.draft().activity.is_empty());
    let err = page.submit().await.unwrap_err();
    assert_eq!(err.user_message(), "Activity is required");
}
