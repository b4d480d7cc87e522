//! Integration tests for the dashboard aggregation queries.

use sqlx::PgPool;
use tourcraft_core::status::TourStatus;
use tourcraft_db::models::tour::CreateTour;
use tourcraft_db::models::user::{CreateUser, User};
use tourcraft_db::repositories::{DashboardRepo, TourRepo, UserRepo};

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

fn new_tour(title: &str, status: Option<TourStatus>) -> CreateTour {
    CreateTour {
        title: title.to_string(),
        description: None,
        privacy_id: None,
        status_id: status.map(|s| s.id()),
        thumbnail_path: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_stats_aggregate_counts_and_views(pool: PgPool) {
    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;

    let t1 = TourRepo::create(&pool, alice.id, &new_tour("Draft One", None))
        .await
        .unwrap();
    let t2 = TourRepo::create(
        &pool,
        alice.id,
        &new_tour("Live One", Some(TourStatus::Published)),
    )
    .await
    .unwrap();
    TourRepo::create(
        &pool,
        alice.id,
        &new_tour("Live Two", Some(TourStatus::Published)),
    )
    .await
    .unwrap();
    // Bob's tour must not leak into Alice's stats.
    TourRepo::create(&pool, bob.id, &new_tour("Other", Some(TourStatus::Published)))
        .await
        .unwrap();

    TourRepo::increment_view_count(&pool, t1.id).await.unwrap();
    TourRepo::increment_view_count(&pool, t2.id).await.unwrap();
    TourRepo::increment_view_count(&pool, t2.id).await.unwrap();

    let stats = DashboardRepo::stats_for_creator(&pool, alice.id).await.unwrap();
    assert_eq!(stats.total_tours, 3);
    assert_eq!(stats.published_tours, 2);
    assert_eq!(stats.draft_tours, 1);
    assert_eq!(stats.total_views, 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_stats_for_empty_creator_are_zero(pool: PgPool) {
    let nobody = seed_user(&pool, "nobody").await;
    let stats = DashboardRepo::stats_for_creator(&pool, nobody.id).await.unwrap();
    assert_eq!(stats.total_tours, 0);
    assert_eq!(stats.published_tours, 0);
    assert_eq!(stats.draft_tours, 0);
    assert_eq!(stats.total_views, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_recent_tours_limit_and_order(pool: PgPool) {
    let user = seed_user(&pool, "prolific").await;
    for i in 1..=7 {
        TourRepo::create(&pool, user.id, &new_tour(&format!("Tour {i}"), None))
            .await
            .unwrap();
    }

    let recent = DashboardRepo::recent_tours(&pool, user.id, 5).await.unwrap();
    assert_eq!(recent.len(), 5);
    for pair in recent.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}
