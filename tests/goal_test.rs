//! Goals and custom workout templates

use chrono::{DateTime, TimeZone, Utc};
use coachsmart::db;
use coachsmart::domain::DomainError;
use coachsmart::domain::progression::MAX_GOAL_TARGET;
use coachsmart::models::custom_workout::CustomWorkoutDto;
use coachsmart::models::goal::GoalDto;
use coachsmart::models::{activity, goal, user, user_stats};
use coachsmart::services::{custom_workout_service, goal_service};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set, Statement,
};

// Helper to create a test database
async fn setup_test_db() -> DatabaseConnection {
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

// Helper to create a user with fresh stats, skipping password hashing
async fn create_test_user(db: &DatabaseConnection, username: &str) -> i32 {
    let now = "2026-03-01T00:00:00Z".to_string();
    let res = user::Entity::insert(user::ActiveModel {
        username: Set(username.to_string()),
        email: Set(format!("{}@example.com", username)),
        password_hash: Set("$argon2id$dummy_hash".to_string()),
        created_at: Set(now.clone()),
        updated_at: Set(now.clone()),
        ..Default::default()
    })
    .exec(db)
    .await
    .expect("Failed to create user");

    user_stats::Entity::insert(user_stats::ActiveModel {
        user_id: Set(res.last_insert_id),
        current_streak: Set(0),
        longest_streak: Set(0),
        total_workouts: Set(0),
        total_time_minutes: Set(0),
        total_points: Set(0),
        level: Set(1),
        updated_at: Set(now),
        ..Default::default()
    })
    .exec(db)
    .await
    .expect("Failed to create stats");

    res.last_insert_id
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 4, 18, 30, 0).unwrap()
}

fn goal_dto(target_value: f64) -> GoalDto {
    GoalDto {
        goal_type: "Run distance".to_string(),
        target_value,
        unit: "km".to_string(),
        target_date: Some("2026-06-30".to_string()),
    }
}

async fn total_points(db: &DatabaseConnection, user_id: i32) -> (i32, i32) {
    let stats = user_stats::Entity::find()
        .filter(user_stats::Column::UserId.eq(user_id))
        .one(db)
        .await
        .unwrap()
        .unwrap();
    (stats.total_points, stats.level)
}

#[tokio::test]
async fn test_create_goal_starts_active() {
    let db = setup_test_db().await;
    let user_id = create_test_user(&db, "planner").await;

    let goal = goal_service::create_goal(&db, user_id, goal_dto(10.0), now())
        .await
        .expect("Failed to create goal");

    assert_eq!(goal.current_value, 0.0);
    assert!(!goal.is_completed);
    assert!(goal.completed_at.is_none());
    assert_eq!(goal.target_date.as_deref(), Some("2026-06-30"));
    assert_eq!(goal.created_at, "2026-03-04T18:30:00Z");
}

#[tokio::test]
async fn test_create_goal_validation() {
    let db = setup_test_db().await;
    let user_id = create_test_user(&db, "sloppy").await;

    let zero = goal_service::create_goal(&db, user_id, goal_dto(0.0), now()).await;
    assert!(matches!(zero, Err(DomainError::Validation(_))));

    let mut bad_date = goal_dto(5.0);
    bad_date.target_date = Some("30/06/2026".to_string());
    let result = goal_service::create_goal(&db, user_id, bad_date, now()).await;
    assert!(matches!(result, Err(DomainError::Validation(_))));

    let mut no_unit = goal_dto(5.0);
    no_unit.unit = "  ".to_string();
    let result = goal_service::create_goal(&db, user_id, no_unit, now()).await;
    assert!(matches!(result, Err(DomainError::Validation(_))));
}

#[tokio::test]
async fn test_goal_completion_awards_points_once() {
    let db = setup_test_db().await;
    let user_id = create_test_user(&db, "finisher").await;
    let goal = goal_service::create_goal(&db, user_id, goal_dto(10.5), now())
        .await
        .unwrap();

    let partial = goal_service::update_goal(&db, user_id, goal.id, 5.0, now())
        .await
        .unwrap();
    assert!(!partial.just_completed);
    assert_eq!(partial.points_awarded, 0);
    assert_eq!(partial.goal.current_value, 5.0);

    let done = goal_service::update_goal(&db, user_id, goal.id, 11.0, now())
        .await
        .unwrap();
    assert!(done.just_completed);
    assert!(done.goal.is_completed);
    // floor(10.5) * 10
    assert_eq!(done.points_awarded, 100);
    assert_eq!(done.goal.completed_at.as_deref(), Some("2026-03-04T18:30:00Z"));

    let again = goal_service::update_goal(&db, user_id, goal.id, 12.0, now())
        .await
        .unwrap();
    assert!(!again.just_completed);
    assert!(again.goal.is_completed);
    assert_eq!(again.points_awarded, 0);
    assert_eq!(again.goal.current_value, 12.0);

    // Dropping below the target keeps the goal completed
    let lower = goal_service::update_goal(&db, user_id, goal.id, 1.0, now())
        .await
        .unwrap();
    assert!(lower.goal.is_completed);

    assert_eq!(total_points(&db, user_id).await, (100, 2));

    let goal_activities = activity::Entity::find()
        .filter(activity::Column::UserId.eq(user_id))
        .filter(activity::Column::ActivityType.eq("goal"))
        .count(&db)
        .await
        .unwrap();
    assert_eq!(goal_activities, 1);
}

#[tokio::test]
async fn test_goal_points_can_level_up() {
    let db = setup_test_db().await;
    let user_id = create_test_user(&db, "climber").await;
    let goal = goal_service::create_goal(&db, user_id, goal_dto(25.0), now())
        .await
        .unwrap();

    goal_service::update_goal(&db, user_id, goal.id, 25.0, now())
        .await
        .unwrap();

    assert_eq!(total_points(&db, user_id).await, (250, 3));
    let level_ups = activity::Entity::find()
        .filter(activity::Column::UserId.eq(user_id))
        .filter(activity::Column::ActivityType.eq("level_up"))
        .count(&db)
        .await
        .unwrap();
    assert_eq!(level_ups, 1);
}

#[tokio::test]
async fn test_large_goal_targets() {
    let db = setup_test_db().await;
    let user_id = create_test_user(&db, "ambitious").await;

    let too_big = goal_service::create_goal(&db, user_id, goal_dto(1.0e9), now()).await;
    assert!(matches!(too_big, Err(DomainError::Validation(_))));

    let goal = goal_service::create_goal(&db, user_id, goal_dto(MAX_GOAL_TARGET), now())
        .await
        .expect("Largest allowed target should be accepted");
    let done = goal_service::update_goal(&db, user_id, goal.id, 1.0e9, now())
        .await
        .expect("Completing a large goal failed");

    assert!(done.just_completed);
    assert_eq!(done.points_awarded, 10_000_000);
    assert_eq!(total_points(&db, user_id).await, (10_000_000, 100_001));
}

#[tokio::test]
async fn test_failed_goal_completion_rolls_back() {
    let db = setup_test_db().await;
    let user_id = create_test_user(&db, "fragile").await;
    let created = goal_service::create_goal(&db, user_id, goal_dto(5.0), now())
        .await
        .unwrap();

    // The feed insert runs after the goal row has been updated
    db.execute(Statement::from_string(
        db.get_database_backend(),
        "DROP TABLE activities".to_string(),
    ))
    .await
    .unwrap();

    let result = goal_service::update_goal(&db, user_id, created.id, 5.0, now()).await;
    assert!(matches!(result, Err(DomainError::Database(_))));

    let stored = goal::Entity::find_by_id(created.id)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert!(!stored.is_completed);
    assert_eq!(stored.current_value, 0.0);
    assert!(stored.completed_at.is_none());
    assert_eq!(total_points(&db, user_id).await, (0, 1));
}

#[tokio::test]
async fn test_other_users_goal_is_not_found() {
    let db = setup_test_db().await;
    let owner = create_test_user(&db, "owner").await;
    let intruder = create_test_user(&db, "intruder").await;
    let goal = goal_service::create_goal(&db, owner, goal_dto(3.0), now())
        .await
        .unwrap();

    let update = goal_service::update_goal(&db, intruder, goal.id, 3.0, now()).await;
    assert!(matches!(update, Err(DomainError::NotFound(_))));

    let delete = goal_service::delete_goal(&db, intruder, goal.id).await;
    assert!(matches!(delete, Err(DomainError::NotFound(_))));

    let missing = goal_service::update_goal(&db, owner, 9999, 1.0, now()).await;
    assert!(matches!(missing, Err(DomainError::NotFound(_))));

    assert_eq!(total_points(&db, intruder).await, (0, 1));
}

#[tokio::test]
async fn test_negative_progress_is_rejected() {
    let db = setup_test_db().await;
    let user_id = create_test_user(&db, "negative").await;
    let goal = goal_service::create_goal(&db, user_id, goal_dto(3.0), now())
        .await
        .unwrap();

    let result = goal_service::update_goal(&db, user_id, goal.id, -1.0, now()).await;
    assert!(matches!(result, Err(DomainError::Validation(_))));
}

#[tokio::test]
async fn test_list_and_delete_goals() {
    let db = setup_test_db().await;
    let user_id = create_test_user(&db, "lister").await;

    let done = goal_service::create_goal(&db, user_id, goal_dto(1.0), now())
        .await
        .unwrap();
    let open = goal_service::create_goal(&db, user_id, goal_dto(50.0), now())
        .await
        .unwrap();
    goal_service::update_goal(&db, user_id, done.id, 1.0, now())
        .await
        .unwrap();

    let goals = goal_service::list_goals(&db, user_id).await.unwrap();
    assert_eq!(goals.len(), 2);
    assert_eq!(goals[0].id, open.id, "active goals come first");

    goal_service::delete_goal(&db, user_id, done.id)
        .await
        .expect("Failed to delete completed goal");
    let goals = goal_service::list_goals(&db, user_id).await.unwrap();
    assert_eq!(goals.len(), 1);
}

#[tokio::test]
async fn test_custom_workout_templates() {
    let db = setup_test_db().await;
    let user_id = create_test_user(&db, "templater").await;
    let other = create_test_user(&db, "other").await;

    let saved = custom_workout_service::create_custom_workout(
        &db,
        user_id,
        CustomWorkoutDto {
            name: "  Morning Blast ".to_string(),
            workout_type: "hiit".to_string(),
            duration: 20,
            difficulty: "intense".to_string(),
            description: Some("   ".to_string()),
        },
        now(),
    )
    .await
    .expect("Failed to create custom workout");

    assert_eq!(saved.name, "Morning Blast");
    assert_eq!(saved.difficulty, "Intense");
    assert!(saved.description.is_none());

    let invalid = custom_workout_service::create_custom_workout(
        &db,
        user_id,
        CustomWorkoutDto {
            name: "Nope".to_string(),
            workout_type: "cardio".to_string(),
            duration: -5,
            difficulty: "Easy".to_string(),
            description: None,
        },
        now(),
    )
    .await;
    assert!(matches!(invalid, Err(DomainError::Validation(_))));

    let stolen = custom_workout_service::delete_custom_workout(&db, other, saved.id).await;
    assert!(matches!(stolen, Err(DomainError::NotFound(_))));

    let listed = custom_workout_service::list_custom_workouts(&db, user_id)
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);

    custom_workout_service::delete_custom_workout(&db, user_id, saved.id)
        .await
        .unwrap();
    assert!(
        custom_workout_service::list_custom_workouts(&db, user_id)
            .await
            .unwrap()
            .is_empty()
    );
}
