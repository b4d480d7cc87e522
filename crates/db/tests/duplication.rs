//! Integration tests for tour duplication.

use sqlx::PgPool;
use tourcraft_core::status::{TourPrivacy, TourStatus};
use tourcraft_db::models::tour::{CreateTour, UpdateTour};
use tourcraft_db::models::tour_step::CreateTourStep;
use tourcraft_db::models::user::{CreateUser, User};
use tourcraft_db::repositories::{TourRepo, TourStepRepo, UserRepo};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_user(pool: &PgPool, username: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "$argon2id$test-hash".to_string(),
        },
    )
    .await
    .unwrap()
}

fn new_tour(title: &str) -> CreateTour {
    CreateTour {
        title: title.to_string(),
        description: Some("walkthrough".to_string()),
        privacy_id: Some(TourPrivacy::Private.id()),
        status_id: None,
        thumbnail_path: Some("thumbs/demo.png".to_string()),
    }
}

fn new_step(title: &str, content: &str) -> CreateTourStep {
    CreateTourStep {
        title: title.to_string(),
        content: Some(content.to_string()),
        screenshot_path: None,
        highlight_area: Some(serde_json::json!({"selector": "#cta"})),
    }
}

async fn publish(pool: &PgPool, tour_id: Uuid, creator_id: i64) {
    TourRepo::update_for_creator(
        pool,
        tour_id,
        creator_id,
        &UpdateTour {
            title: None,
            description: None,
            privacy_id: None,
            status_id: Some(TourStatus::Published.id()),
            thumbnail_path: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_copies_steps_verbatim(pool: PgPool) {
    let user = seed_user(&pool, "copier").await;
    let tour = TourRepo::create(&pool, user.id, &new_tour("Feature Tour"))
        .await
        .unwrap();

    let mut step_ids = Vec::new();
    for i in 1..=3 {
        let s = TourStepRepo::add_step(&pool, tour.id, &new_step(&format!("Step {i}"), "body"))
            .await
            .unwrap()
            .unwrap();
        step_ids.push(s.id);
    }
    // Leave a gap so the copy proves numbers are taken verbatim.
    TourStepRepo::delete(&pool, tour.id, step_ids[1]).await.unwrap();

    let copy = TourRepo::duplicate(&pool, tour.id, user.id)
        .await
        .unwrap()
        .expect("source exists");

    assert_ne!(copy.id, tour.id);
    assert_eq!(copy.title, "Feature Tour (Copy)");
    assert_eq!(copy.status_id, TourStatus::Draft.id());
    assert_eq!(copy.privacy_id, tour.privacy_id);
    assert_eq!(copy.view_count, 0);
    assert!(copy.share_uuid.is_none());

    let source_steps = TourStepRepo::list_by_tour(&pool, tour.id).await.unwrap();
    let copy_steps = TourStepRepo::list_by_tour(&pool, copy.id).await.unwrap();
    assert_eq!(copy_steps.len(), source_steps.len());
    for (src, dup) in source_steps.iter().zip(copy_steps.iter()) {
        assert_eq!(dup.step_number, src.step_number);
        assert_eq!(dup.title, src.title);
        assert_eq!(dup.content, src.content);
        assert_eq!(dup.highlight_area, src.highlight_area);
        assert_eq!(dup.tour_id, copy.id);
    }
    // The gap from the deleted step carried over.
    let numbers: Vec<i32> = copy_steps.iter().map(|s| s.step_number).collect();
    assert_eq!(numbers, vec![1, 3]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_of_published_tour_is_draft(pool: PgPool) {
    let user = seed_user(&pool, "publisher").await;
    let tour = TourRepo::create(&pool, user.id, &new_tour("Live Tour"))
        .await
        .unwrap();
    publish(&pool, tour.id, user.id).await;

    let copy = TourRepo::duplicate(&pool, tour.id, user.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(copy.status_id, TourStatus::Draft.id());

    // The source is untouched.
    let source = TourRepo::find_by_id(&pool, tour.id).await.unwrap().unwrap();
    assert_eq!(source.status_id, TourStatus::Published.id());
    assert_eq!(source.title, "Live Tour");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_requires_ownership(pool: PgPool) {
    let alice = seed_user(&pool, "alice").await;
    let mallory = seed_user(&pool, "mallory").await;
    let tour = TourRepo::create(&pool, alice.id, &new_tour("Hers"))
        .await
        .unwrap();

    let result = TourRepo::duplicate(&pool, tour.id, mallory.id).await.unwrap();
    assert!(result.is_none());

    // Nothing was created for the failed attempt.
    let mallorys = TourRepo::list_by_creator(&pool, mallory.id).await.unwrap();
    assert!(mallorys.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_of_missing_tour_is_none(pool: PgPool) {
    let user = seed_user(&pool, "nobody").await;
    let result = TourRepo::duplicate(&pool, Uuid::new_v4(), user.id).await.unwrap();
    assert!(result.is_none());
}
