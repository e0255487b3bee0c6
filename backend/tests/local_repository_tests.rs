//! Tests for the in-memory local repository.

use chrono::NaiveDate;
use terms_rust::db::repositories::LocalRepository;
use terms_rust::db::repository::{
    QuarterRepository, RepositoryError, SemesterRepository,
};
use terms_rust::models::term::{NewQuarter, NewSemester, SemesterId};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_semester(title: &str, start: NaiveDate, end: NaiveDate) -> NewSemester {
    NewSemester {
        title: title.to_string(),
        start_date: start,
        end_date: end,
    }
}

fn new_quarter(title: &str, semester_id: &SemesterId, start: NaiveDate, end: NaiveDate) -> NewQuarter {
    NewQuarter {
        title: title.to_string(),
        start_date: start,
        end_date: end,
        semester_id: semester_id.clone(),
    }
}

#[tokio::test]
async fn test_create_semester_assigns_sequential_ids() {
    let repo = LocalRepository::new();

    let first = repo
        .create_semester(&new_semester("Fall", date(2024, 9, 1), date(2024, 12, 15)))
        .await
        .unwrap();
    let second = repo
        .create_semester(&new_semester("Spring", date(2025, 1, 10), date(2025, 5, 20)))
        .await
        .unwrap();

    assert_eq!(first.id.value(), "sem-1");
    assert_eq!(second.id.value(), "sem-2");
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_list_semesters_preserves_creation_order() {
    let repo = LocalRepository::new();

    repo.create_semester(&new_semester("Fall", date(2024, 9, 1), date(2024, 12, 15)))
        .await
        .unwrap();
    repo.create_semester(&new_semester("Spring", date(2025, 1, 10), date(2025, 5, 20)))
        .await
        .unwrap();

    let semesters = repo.list_semesters().await.unwrap();
    let titles: Vec<_> = semesters.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Fall", "Spring"]);
}

#[tokio::test]
async fn test_get_semester_round_trip() {
    let repo = LocalRepository::new();

    let created = repo
        .create_semester(&new_semester("Fall", date(2024, 9, 1), date(2024, 12, 15)))
        .await
        .unwrap();

    let fetched = repo.get_semester(&created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_get_semester_unknown_id_is_not_found() {
    let repo = LocalRepository::new();

    let err = repo
        .get_semester(&SemesterId::new("sem-404"))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

#[tokio::test]
async fn test_quarters_filtered_by_parent() {
    let repo = LocalRepository::new();

    let fall = repo
        .create_semester(&new_semester("Fall", date(2024, 9, 1), date(2024, 12, 15)))
        .await
        .unwrap();
    let spring = repo
        .create_semester(&new_semester("Spring", date(2025, 1, 10), date(2025, 5, 20)))
        .await
        .unwrap();

    repo.create_quarter(&new_quarter("Q1", &fall.id, date(2024, 9, 1), date(2024, 10, 15)))
        .await
        .unwrap();
    repo.create_quarter(&new_quarter("Q2", &fall.id, date(2024, 10, 16), date(2024, 12, 15)))
        .await
        .unwrap();
    repo.create_quarter(&new_quarter("Q1", &spring.id, date(2025, 1, 10), date(2025, 3, 1)))
        .await
        .unwrap();

    let fall_quarters = repo.quarters_for_semester(&fall.id).await.unwrap();
    assert_eq!(fall_quarters.len(), 2);
    assert!(fall_quarters.iter().all(|q| q.semester_id == fall.id));

    let all_quarters = repo.list_quarters().await.unwrap();
    assert_eq!(all_quarters.len(), 3);
}

#[tokio::test]
async fn test_quarters_for_unknown_semester_is_empty() {
    let repo = LocalRepository::new();

    let quarters = repo
        .quarters_for_semester(&SemesterId::new("sem-404"))
        .await
        .unwrap();
    assert!(quarters.is_empty());
}

#[tokio::test]
async fn test_create_quarter_requires_existing_parent() {
    let repo = LocalRepository::new();

    let err = repo
        .create_quarter(&new_quarter(
            "Q1",
            &SemesterId::new("sem-404"),
            date(2024, 9, 1),
            date(2024, 10, 15),
        ))
        .await
        .unwrap_err();

    assert!(matches!(err, RepositoryError::NotFound { .. }));
    assert_eq!(repo.quarter_count(), 0);
}

#[tokio::test]
async fn test_unhealthy_store_rejects_operations() {
    let repo = LocalRepository::new();
    repo.set_healthy(false);

    assert!(!repo.health_check().await.unwrap());

    let err = repo.list_semesters().await.unwrap_err();
    assert!(matches!(err, RepositoryError::ConnectionError { .. }));
    assert!(err.is_retryable());

    let err = repo
        .create_semester(&new_semester("Fall", date(2024, 9, 1), date(2024, 12, 15)))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::ConnectionError { .. }));
}

#[tokio::test]
async fn test_clear_resets_contents_and_ids() {
    let repo = LocalRepository::new();

    repo.create_semester(&new_semester("Fall", date(2024, 9, 1), date(2024, 12, 15)))
        .await
        .unwrap();
    assert_eq!(repo.semester_count(), 1);

    repo.clear();
    assert_eq!(repo.semester_count(), 0);

    let recreated = repo
        .create_semester(&new_semester("Spring", date(2025, 1, 10), date(2025, 5, 20)))
        .await
        .unwrap();
    assert_eq!(recreated.id.value(), "sem-1");
}

#[tokio::test]
async fn test_seeded_records_are_visible() {
    use terms_rust::models::term::{Quarter, QuarterId, Semester};

    let repo = LocalRepository::new();
    repo.seed_semester(Semester {
        id: SemesterId::new("sem-fixed"),
        title: "Fall".to_string(),
        start_date: date(2024, 9, 1),
        end_date: date(2024, 12, 15),
    });
    repo.seed_quarter(Quarter {
        id: QuarterId::new("qtr-fixed"),
        title: "Q1".to_string(),
        start_date: date(2024, 9, 1),
        end_date: date(2024, 10, 15),
        semester_id: SemesterId::new("sem-fixed"),
    });

    assert!(repo.has_semester(&SemesterId::new("sem-fixed")));
    assert!(!repo.has_semester(&SemesterId::new("sem-404")));

    let quarters = repo
        .quarters_for_semester(&SemesterId::new("sem-fixed"))
        .await
        .unwrap();
    assert_eq!(quarters.len(), 1);
    assert_eq!(quarters[0].id.value(), "qtr-fixed");
}
