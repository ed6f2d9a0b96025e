//! Property listing integration tests: public reads, owner-stamped
//! creation, and the ownership gate on mutations.

use salvo::http::StatusCode;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn listings_are_public() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db);

    let listings: Vec<serde_json::Value> = TestRequest::get("/api/properties")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert!(listings.is_empty());
}

#[test_log::test(tokio::test)]
async fn create_stamps_the_requester_as_owner() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db);

    let (user_id, token) = register_and_login(&service, "Ada", "ada@example.test", "p1").await;

    let listing = create_listing(&service, &token, "Riverside flat").await;

    assert_eq!(listing["title"], "Riverside flat");
    assert_eq!(listing["owner_id"], user_id.to_string());
    assert!(listing["image_url"].is_null());

    // Anyone can read it back, no token required.
    let id = listing["id"].as_str().expect("Listing should carry an id");
    TestRequest::get(&format!("/api/properties/{id}"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("Riverside flat");
}

#[test_log::test(tokio::test)]
async fn create_requires_complete_form() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db);

    let (_user_id, token) = register_and_login(&service, "Ada", "ada@example.test", "p1").await;

    TestRequest::post("/api/properties")
        .bearer(&token)
        .form_body(&[("title", "No price or location")])
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    TestRequest::post("/api/properties")
        .bearer(&token)
        .form_body(&[
            ("title", "Bad price"),
            ("description", "d"),
            ("price", "a lot"),
            ("location", "Porto"),
        ])
        .send(&service)
        .await
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_body_contains("price must be a number");
}

#[test_log::test(tokio::test)]
async fn missing_listing_is_not_found() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db);

    let id = uuid::Uuid::now_v7();
    TestRequest::get(&format!("/api/properties/{id}"))
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .assert_body_contains("Property not found");
}

#[test_log::test(tokio::test)]
async fn newest_listings_come_first() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db);

    let (_user_id, token) = register_and_login(&service, "Ada", "ada@example.test", "p1").await;

    create_listing(&service, &token, "First").await;
    create_listing(&service, &token, "Second").await;

    let listings: Vec<serde_json::Value> = TestRequest::get("/api/properties")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0]["title"], "Second");
    assert_eq!(listings[1]["title"], "First");
}

#[test_log::test(tokio::test)]
async fn my_properties_lists_only_the_requesters() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db);

    let (_ada_id, ada) = register_and_login(&service, "Ada", "ada@example.test", "p1").await;
    let (_bob_id, bob) = register_and_login(&service, "Bob", "bob@example.test", "p2").await;

    create_listing(&service, &ada, "Ada's flat").await;
    create_listing(&service, &bob, "Bob's cabin").await;

    let mine: Vec<serde_json::Value> = TestRequest::get("/api/properties/my-properties")
        .bearer(&ada)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0]["title"], "Ada's flat");
}

#[test_log::test(tokio::test)]
async fn owner_can_update_a_listing_partially() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db);

    let (_user_id, token) = register_and_login(&service, "Ada", "ada@example.test", "p1").await;
    let listing = create_listing(&service, &token, "Riverside flat").await;
    let id = listing["id"].as_str().expect("Listing should carry an id");

    let updated: serde_json::Value = TestRequest::put(&format!("/api/properties/{id}"))
        .bearer(&token)
        .json_body(&serde_json::json!({ "title": "Riverside loft" }))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(updated["title"], "Riverside loft");
    // Untouched fields keep their stored values.
    assert_eq!(updated["location"], "Porto");
    assert_eq!(updated["price"], 120.5);
}

#[test_log::test(tokio::test)]
async fn non_owner_cannot_mutate_a_listing() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db);

    let (_ada_id, ada) = register_and_login(&service, "Ada", "ada@example.test", "p1").await;
    let (_bob_id, bob) = register_and_login(&service, "Bob", "bob@example.test", "p2").await;

    let listing = create_listing(&service, &ada, "Riverside flat").await;
    let id = listing["id"].as_str().expect("Listing should carry an id");

    TestRequest::put(&format!("/api/properties/{id}"))
        .bearer(&bob)
        .json_body(&serde_json::json!({ "title": "Bob's now" }))
        .send(&service)
        .await
        .assert_status(StatusCode::FORBIDDEN)
        .assert_body_contains("Not authorized");

    TestRequest::delete(&format!("/api/properties/{id}"))
        .bearer(&bob)
        .send(&service)
        .await
        .assert_status(StatusCode::FORBIDDEN);

    // The listing is unchanged.
    TestRequest::get(&format!("/api/properties/{id}"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("Riverside flat")
        .assert_body_not_contains("Bob's now");
}

#[test_log::test(tokio::test)]
async fn owner_can_delete_a_listing() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db);

    let (_user_id, token) = register_and_login(&service, "Ada", "ada@example.test", "p1").await;
    let listing = create_listing(&service, &token, "Riverside flat").await;
    let id = listing["id"].as_str().expect("Listing should carry an id");

    TestRequest::delete(&format!("/api/properties/{id}"))
        .bearer(&token)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("Property removed");

    TestRequest::get(&format!("/api/properties/{id}"))
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn mutating_a_missing_listing_is_not_found_for_everyone() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db);

    let (_user_id, token) = register_and_login(&service, "Ada", "ada@example.test", "p1").await;
    let id = uuid::Uuid::now_v7();

    // Absence wins over ownership: 404, never 403.
    TestRequest::delete(&format!("/api/properties/{id}"))
        .bearer(&token)
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .assert_body_contains("Property not found");

    TestRequest::put(&format!("/api/properties/{id}"))
        .bearer(&token)
        .json_body(&serde_json::json!({ "title": "Ghost" }))
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
