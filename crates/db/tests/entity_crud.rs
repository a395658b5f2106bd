//! Integration tests for basic repository CRUD.
//!
//! Exercises the repository layer against a real database:
//! - Create / list / delete round-trips
//! - Full-document replace semantics
//! - Dense ordering of listings
//! - Not-found behaviour

use folio_db::models::education::{CreateEducation, Education};
use folio_db::models::project::CreateProject;
use folio_db::repositories::{EducationRepo, ProjectRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_education(order: i32, school: &str) -> CreateEducation {
    CreateEducation {
        order,
        school: school.to_string(),
        degree: "BSc Computer Science".to_string(),
        graduation_year: 2020,
        gpa: 3.5,
    }
}

fn new_project(order: i32, name: &str) -> CreateProject {
    CreateProject {
        order,
        name: name.to_string(),
        link: format!("https://example.com/{name}"),
    }
}

// ---------------------------------------------------------------------------
// Test: education create -> list -> delete -> empty
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn education_create_list_delete_round_trip(pool: PgPool) {
    let created = EducationRepo::create(&pool, &new_education(0, "A"))
        .await
        .unwrap();
    assert_eq!(created.order, 0);
    assert_eq!(created.school, "A");
    assert_eq!(created.degree, "BSc Computer Science");
    assert_eq!(created.graduation_year, 2020);
    assert_eq!(created.gpa, 3.5);

    let listed = EducationRepo::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);

    let deleted = EducationRepo::delete(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(deleted.id, created.id);
    assert_eq!(deleted.school, "A");

    let listed = EducationRepo::list(&pool).await.unwrap();
    assert!(listed.is_empty());
}

// ---------------------------------------------------------------------------
// Test: listing sorts by order, not by insertion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn education_list_sorts_by_order(pool: PgPool) {
    // Insert out of order.
    EducationRepo::create(&pool, &new_education(2, "C"))
        .await
        .unwrap();
    EducationRepo::create(&pool, &new_education(0, "A"))
        .await
        .unwrap();
    EducationRepo::create(&pool, &new_education(1, "B"))
        .await
        .unwrap();

    let listed = EducationRepo::list(&pool).await.unwrap();
    let schools: Vec<_> = listed.iter().map(|e| e.school.as_str()).collect();
    assert_eq!(schools, vec!["A", "B", "C"]);

    let orders: Vec<_> = listed.iter().map(|e| e.order).collect();
    assert_eq!(orders, vec![0, 1, 2]);
}

// ---------------------------------------------------------------------------
// Test: update is a full-document replace returning the new state
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn education_update_replaces_all_fields(pool: PgPool) {
    let created = EducationRepo::create(&pool, &new_education(0, "Old School"))
        .await
        .unwrap();

    let replacement = Education {
        id: created.id,
        order: 3,
        school: "New School".to_string(),
        degree: "MSc".to_string(),
        graduation_year: 2024,
        gpa: 4.0,
    };

    let updated = EducationRepo::update(&pool, &replacement)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.school, "New School");
    assert_eq!(updated.degree, "MSc");
    assert_eq!(updated.order, 3);
    assert_eq!(updated.gpa, 4.0);

    // Persisted, not just echoed.
    let listed = EducationRepo::list(&pool).await.unwrap();
    assert_eq!(listed[0].school, "New School");
}

// ---------------------------------------------------------------------------
// Test: delete/update of a missing id return None
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_id_returns_none(pool: PgPool) {
    assert!(EducationRepo::delete(&pool, 9999).await.unwrap().is_none());

    let ghost = Education {
        id: 9999,
        order: 0,
        school: "X".to_string(),
        degree: "Y".to_string(),
        graduation_year: 2020,
        gpa: 3.0,
    };
    assert!(EducationRepo::update(&pool, &ghost).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Test: project CRUD mirrors the shared repository contract
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn project_create_and_list(pool: PgPool) {
    let first = ProjectRepo::create(&pool, &new_project(0, "alpha"))
        .await
        .unwrap();
    let second = ProjectRepo::create(&pool, &new_project(1, "beta"))
        .await
        .unwrap();

    let listed = ProjectRepo::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, first.id);
    assert_eq!(listed[1].id, second.id);
    assert_eq!(listed[1].link, "https://example.com/beta");
}

// ---------------------------------------------------------------------------
// Test: incomplete rows are rejected by the mapper on read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn incomplete_row_fails_mapping(pool: PgPool) {
    // Bypass the repository to create a document missing its order.
    sqlx::query("INSERT INTO educations (school, degree, graduation_year, gpa) VALUES ($1, $2, $3, $4)")
        .bind("S")
        .bind("D")
        .bind(2020)
        .bind(3.0)
        .execute(&pool)
        .await
        .unwrap();

    let err = EducationRepo::list(&pool).await.unwrap_err();
    assert!(matches!(
        err,
        folio_db::DbError::Core(folio_core::error::CoreError::Validation(_))
    ));
}
