use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

use super::{
    models::{
        CreateStudentProgressRequest, RequirementItem, Student, StudentWithLevel,
        UpdateStudentProgressRequest,
    },
    StudentsApi, StudentsRepository,
};
use crate::{
    core::common::{ErrorKind, Outcome},
    features::{
        domain::ProgressState,
        testing::{factory, refused_url},
    },
};

fn repository(api_url: &str) -> StudentsRepository {
    let (factory, _) = factory(api_url);
    StudentsRepository::new(StudentsApi::new(factory))
}

async fn mount_get(mock_server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn list_students_reproduces_every_row() {
    let mock_server = MockServer::start().await;
    mount_get(
        &mock_server,
        "/students",
        ResponseTemplate::new(200).set_body_json(json!([
            { "id": "1", "name": "Bob", "rankBadge": "White sash", "rankColor": "#FFFFFF" },
            { "id": "2", "name": "Eve", "rankBadge": "Red sash", "rankColor": "#C62828" }
        ])),
    )
    .await;

    let outcome = repository(&mock_server.uri()).list_students().await;

    assert_eq!(
        Outcome::Success(vec![
            Student {
                id: "1".to_string(),
                name: "Bob".to_string(),
                rank_badge: "White sash".to_string(),
                rank_color: "#FFFFFF".to_string(),
            },
            Student {
                id: "2".to_string(),
                name: "Eve".to_string(),
                rank_badge: "Red sash".to_string(),
                rank_color: "#C62828".to_string(),
            },
        ]),
        outcome
    );
}

#[tokio::test]
async fn partial_row_fails_the_whole_list() {
    let mock_server = MockServer::start().await;
    mount_get(
        &mock_server,
        "/students",
        ResponseTemplate::new(200).set_body_json(json!([
            { "id": "1", "name": "Bob", "rankBadge": "White sash", "rankColor": "#FFFFFF" },
            { "id": "2", "name": "Eve" }
        ])),
    )
    .await;

    let outcome = repository(&mock_server.uri()).list_students().await;

    assert_eq!(Outcome::Failure(ErrorKind::Deserialization), outcome);
}

#[tokio::test]
async fn list_students_maps_statuses() {
    let cases = [
        (401, ErrorKind::Unauthorized),
        (403, ErrorKind::Forbidden),
        (404, ErrorKind::NotFound),
        (409, ErrorKind::ClientError),
        (502, ErrorKind::ServerError),
    ];

    for (status, expected) in cases {
        let mock_server = MockServer::start().await;
        mount_get(&mock_server, "/students", ResponseTemplate::new(status)).await;

        let outcome = repository(&mock_server.uri()).list_students().await;

        assert_eq!(Outcome::Failure(expected), outcome, "status {status}");
    }
}

#[tokio::test]
async fn list_students_on_refused_connection_is_network_error() {
    let outcome = repository(&refused_url()).list_students().await;

    assert_eq!(Outcome::Failure(ErrorKind::NetworkError), outcome);
}

#[tokio::test]
async fn active_students_get_a_full_name() {
    let mock_server = MockServer::start().await;
    mount_get(
        &mock_server,
        "/students/active",
        ResponseTemplate::new(200).set_body_json(json!([{
            "student": { "id": 7, "userId": 70, "firstName": "Ip", "lastName": "Man", "isActive": true },
            "currentLevel": { "code": "L3", "displayName": "Third Form" }
        }])),
    )
    .await;

    let outcome = repository(&mock_server.uri()).get_active_students().await;

    assert_eq!(
        Outcome::Success(vec![StudentWithLevel {
            id: 7,
            user_id: 70,
            first_name: "Ip".to_string(),
            last_name: "Man".to_string(),
            full_name: "Ip Man".to_string(),
            is_active: true,
            current_level: "Third Form".to_string(),
            code: "L3".to_string(),
        }]),
        outcome
    );
}

#[tokio::test]
async fn student_progress_is_flattened_per_requirement() {
    let mock_server = MockServer::start().await;
    mount_get(
        &mock_server,
        "/student-progress/student/7",
        ResponseTemplate::new(200).set_body_json(json!({
            "level": {
                "id": 3, "code": "L3", "displayName": "Third Form", "orderSeq": 3,
                "description": null,
                "createdAt": "2025-01-01T00:00:00", "updatedAt": "2025-01-01T00:00:00"
            },
            "requirements": [{
                "id": 31, "sortOrder": 1, "isRequired": true, "levelSpecificNotes": null,
                "move": {
                    "id": 5, "name": "Chum Kiu", "description": "Seeking the bridge",
                    "moveCategoryId": 2,
                    "createdAt": "2025-01-01T00:00:00", "updatedAt": "2025-01-01T00:00:00"
                },
                "progress": {
                    "id": 99, "status": "IN_PROGRESS", "completedAt": null,
                    "instructor": { "id": 1, "name": "Hector" },
                    "attempts": 2, "notes": "elbow too high", "lastUpdated": "2025-02-03T18:45:00"
                }
            }, {
                "id": 32, "sortOrder": 2, "isRequired": false, "levelSpecificNotes": null,
                "move": {
                    "id": 6, "name": "Bil Jee", "description": null, "moveCategoryId": 2,
                    "createdAt": "2025-01-01T00:00:00", "updatedAt": "2025-01-01T00:00:00"
                },
                "progress": {
                    "id": null, "status": "NOT_STARTED", "completedAt": null, "instructor": null,
                    "attempts": 0, "notes": null, "lastUpdated": null
                }
            }]
        })),
    )
    .await;

    let detail = repository(&mock_server.uri())
        .get_student_progress(7, "Ip Man")
        .await
        .success()
        .unwrap();

    assert_eq!(7, detail.student_id);
    assert_eq!("Ip Man", detail.student_name);
    assert_eq!("Third Form", detail.level_name);
    assert_eq!(
        vec![
            RequirementItem {
                level_requirement_id: 31,
                move_id: 5,
                move_name: "Chum Kiu".to_string(),
                progress_id: Some(99),
                status: ProgressState::InProgress,
                notes: Some("elbow too high".to_string()),
            },
            RequirementItem {
                level_requirement_id: 32,
                move_id: 6,
                move_name: "Bil Jee".to_string(),
                progress_id: None,
                status: ProgressState::NotStarted,
                notes: None,
            },
        ],
        detail.requirements
    );
}

#[tokio::test]
async fn unknown_progress_state_is_deserialization_error() {
    let mock_server = MockServer::start().await;
    mount_get(
        &mock_server,
        "/student-progress/student/7",
        ResponseTemplate::new(200).set_body_json(json!({
            "level": {
                "id": 3, "code": "L3", "displayName": "Third Form", "orderSeq": 3,
                "description": null,
                "createdAt": "2025-01-01T00:00:00", "updatedAt": "2025-01-01T00:00:00"
            },
            "requirements": [{
                "id": 31, "sortOrder": 1, "isRequired": true, "levelSpecificNotes": null,
                "move": {
                    "id": 5, "name": "Chum Kiu", "description": null, "moveCategoryId": 2,
                    "createdAt": "2025-01-01T00:00:00", "updatedAt": "2025-01-01T00:00:00"
                },
                "progress": {
                    "id": 1, "status": "MASTERED", "completedAt": null, "instructor": null,
                    "attempts": 0, "notes": null, "lastUpdated": null
                }
            }]
        })),
    )
    .await;

    let outcome = repository(&mock_server.uri()).get_student_progress(7, "Ip Man").await;

    assert_eq!(Outcome::Failure(ErrorKind::Deserialization), outcome);
}

#[tokio::test]
async fn create_progress_posts_camel_case_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/student-progress"))
        .and(body_json(json!({
            "studentId": 7, "levelRequirementId": 31, "status": "PASSED",
            "instructorId": null, "attempts": 0, "notes": null
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 100, "studentId": 7, "levelRequirementId": 31,
            "completedAt": "2025-03-01T19:00:00", "instructorId": null,
            "attempts": 0, "notes": null,
            "createdAt": "2025-03-01T19:00:00", "updatedAt": "2025-03-01T19:00:00"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let progress = repository(&mock_server.uri())
        .create_student_progress(CreateStudentProgressRequest::new(7, 31, ProgressState::Passed))
        .await
        .success()
        .unwrap();

    assert_eq!(100, progress.id);
    assert!(progress.completed_at.is_some());
}

#[tokio::test]
async fn update_progress_sends_only_present_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/student-progress/100"))
        .and(body_json(json!({ "status": "IN_PROGRESS", "attempts": 3 })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = UpdateStudentProgressRequest {
        status: Some(ProgressState::InProgress),
        attempts: Some(3),
        ..Default::default()
    };

    let outcome = repository(&mock_server.uri())
        .update_student_progress(100, request)
        .await;

    assert_eq!(Outcome::Success(()), outcome);
}

#[tokio::test]
async fn progress_date_times_without_seconds_are_accepted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/student-progress"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 101, "studentId": 7, "levelRequirementId": 31,
            "completedAt": "2025-03-01T19:00", "instructorId": 1,
            "attempts": 1, "notes": null,
            "createdAt": "2025-03-01T19:00", "updatedAt": "2025-03-01T19:05"
        })))
        .mount(&mock_server)
        .await;

    mount_get(
        &mock_server,
        "/student-progress/student/7",
        ResponseTemplate::new(200).set_body_json(json!({
            "level": {
                "id": 3, "code": "L3", "displayName": "Third Form", "orderSeq": 3,
                "description": null,
                "createdAt": "2025-01-01T00:00", "updatedAt": "2025-01-01T00:00"
            },
            "requirements": [{
                "id": 31, "sortOrder": 1, "isRequired": true, "levelSpecificNotes": null,
                "move": {
                    "id": 5, "name": "Chum Kiu", "description": null, "moveCategoryId": 2,
                    "createdAt": "2025-01-01T00:00", "updatedAt": "2025-01-01T00:00"
                },
                "progress": {
                    "id": 101, "status": "PASSED", "completedAt": "2025-03-01T19:00",
                    "instructor": null, "attempts": 1, "notes": null,
                    "lastUpdated": "2025-03-01T19:05"
                }
            }]
        })),
    )
    .await;

    let repository = repository(&mock_server.uri());

    let progress = repository
        .create_student_progress(CreateStudentProgressRequest::new(7, 31, ProgressState::Passed))
        .await
        .success()
        .unwrap();

    let expected = chrono::NaiveDate::from_ymd_opt(2025, 3, 1)
        .unwrap()
        .and_hms_opt(19, 0, 0)
        .unwrap();

    assert_eq!(Some(expected), progress.completed_at);
    assert_eq!(expected, progress.created_at);

    let detail = repository
        .get_student_progress(7, "Ip Man")
        .await
        .success()
        .unwrap();

    assert_eq!(ProgressState::Passed, detail.requirements[0].status);
}
