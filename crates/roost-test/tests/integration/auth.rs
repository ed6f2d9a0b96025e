//! Registration, login, and session-token integration tests.

use salvo::http::StatusCode;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn register_creates_account() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db);

    let response = TestRequest::post("/api/auth/register")
        .json_body(&serde_json::json!({
            "name": "Ada",
            "email": "ada@example.test",
            "password": "p1",
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED)
        .assert_body_contains("ada@example.test")
        .assert_body_not_contains("password");

    let profile: serde_json::Value = response.json();
    assert_eq!(profile["name"], "Ada");
    assert!(profile["id"].as_str().is_some(), "id should be assigned");
}

#[test_log::test(tokio::test)]
async fn register_rejects_duplicate_email() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db);

    register(&service, "Ada", "ada@example.test", "p1").await;

    // Same address, different case: the lower(email) index catches it.
    TestRequest::post("/api/auth/register")
        .json_body(&serde_json::json!({
            "name": "Ada Again",
            "email": "ADA@Example.Test",
            "password": "p2",
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::CONFLICT)
        .assert_body_contains("Email already registered");
}

#[test_log::test(tokio::test)]
async fn concurrent_registration_has_one_winner() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db);

    let attempt = || {
        TestRequest::post("/api/auth/register")
            .json_body(&serde_json::json!({
                "name": "Racer",
                "email": "race@example.test",
                "password": "pw",
            }))
            .send(&service)
    };

    let (first, second) = tokio::join!(attempt(), attempt());

    let statuses = [first.status, second.status];
    assert_eq!(
        statuses
            .iter()
            .filter(|s| **s == StatusCode::CREATED)
            .count(),
        1,
        "Exactly one registration should win, got {statuses:?}"
    );
    assert_eq!(
        statuses
            .iter()
            .filter(|s| **s == StatusCode::CONFLICT)
            .count(),
        1,
        "The loser should see a duplicate-email conflict, got {statuses:?}"
    );
}

#[test_log::test(tokio::test)]
async fn login_issues_a_token() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db);

    register(&service, "Ada", "ada@example.test", "p1").await;
    let token = login_token(&service, "ada@example.test", "p1").await;

    assert!(!token.is_empty());
}

#[test_log::test(tokio::test)]
async fn login_failures_are_indistinguishable() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db);

    register(&service, "Ada", "ada@example.test", "p1").await;

    let wrong_password = TestRequest::post("/api/auth/login")
        .json_body(&serde_json::json!({
            "email": "ada@example.test",
            "password": "not-p1",
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let unknown_email = TestRequest::post("/api/auth/login")
        .json_body(&serde_json::json!({
            "email": "nobody@example.test",
            "password": "p1",
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    // Neither response may reveal which factor failed.
    assert_eq!(wrong_password.body_string(), unknown_email.body_string());
}

#[test_log::test(tokio::test)]
async fn profile_requires_and_honors_the_token() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db);

    let (user_id, token) = register_and_login(&service, "Ada", "ada@example.test", "p1").await;

    TestRequest::get("/api/auth/user")
        .send(&service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let profile: serde_json::Value = TestRequest::get("/api/auth/user")
        .bearer(&token)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_not_contains("password")
        .json();

    assert_eq!(profile["id"], user_id.to_string());
    assert_eq!(profile["email"], "ada@example.test");
}

#[test_log::test(tokio::test)]
async fn tampered_token_is_unauthenticated() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db);

    let (_user_id, token) = register_and_login(&service, "Ada", "ada@example.test", "p1").await;

    let mut parts: Vec<String> = token.split('.').map(ToString::to_string).collect();
    assert_eq!(parts.len(), 3);
    let flipped = if parts[1].starts_with('A') { "B" } else { "A" };
    parts[1] = format!("{flipped}{}", &parts[1][1..]);
    let tampered = parts.join(".");

    TestRequest::get("/api/auth/user")
        .bearer(&tampered)
        .send(&service)
        .await
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_body_contains("Invalid or expired token");
}
