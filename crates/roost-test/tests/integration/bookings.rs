//! Booking integration tests: creation against existing listings and
//! the ownership gate on cancellation.

use salvo::http::StatusCode;

use super::helpers::*;

#[test_log::test(tokio::test)]
async fn booking_requires_an_existing_listing() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db);

    let (_user_id, token) = register_and_login(&service, "Ada", "ada@example.test", "p1").await;

    TestRequest::post("/api/bookings")
        .bearer(&token)
        .json_body(&serde_json::json!({
            "property": uuid::Uuid::now_v7(),
            "start_date": "2026-09-01",
            "end_date": "2026-09-05",
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .assert_body_contains("Property not found");
}

#[test_log::test(tokio::test)]
async fn booking_is_owned_by_the_requester() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db);

    let (_ada_id, ada) = register_and_login(&service, "Ada", "ada@example.test", "p1").await;
    let (bob_id, bob) = register_and_login(&service, "Bob", "bob@example.test", "p2").await;

    let listing = create_listing(&service, &ada, "Riverside flat").await;
    let property_id = listing["id"].as_str().expect("Listing should carry an id");

    let booking: serde_json::Value = TestRequest::post("/api/bookings")
        .bearer(&bob)
        .json_body(&serde_json::json!({
            "property": property_id,
            "start_date": "2026-09-01",
            "end_date": "2026-09-05",
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED)
        .json();

    // The guest owns the booking, not the listing's owner.
    assert_eq!(booking["owner_id"], bob_id.to_string());
    assert_eq!(booking["property_id"], property_id);

    let bobs: Vec<serde_json::Value> = TestRequest::get("/api/bookings")
        .bearer(&bob)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert_eq!(bobs.len(), 1);

    let adas: Vec<serde_json::Value> = TestRequest::get("/api/bookings")
        .bearer(&ada)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert!(adas.is_empty());
}

#[test_log::test(tokio::test)]
async fn only_the_booker_can_cancel() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db);

    let (_ada_id, ada) = register_and_login(&service, "Ada", "ada@example.test", "p1").await;
    let (_bob_id, bob) = register_and_login(&service, "Bob", "bob@example.test", "p2").await;

    let listing = create_listing(&service, &ada, "Riverside flat").await;
    let property_id = listing["id"].as_str().expect("Listing should carry an id");

    let booking: serde_json::Value = TestRequest::post("/api/bookings")
        .bearer(&bob)
        .json_body(&serde_json::json!({
            "property": property_id,
            "start_date": "2026-09-01",
            "end_date": "2026-09-05",
        }))
        .send(&service)
        .await
        .assert_status(StatusCode::CREATED)
        .json();
    let booking_id = booking["id"].as_str().expect("Booking should carry an id");

    // Even the listing's owner cannot cancel someone else's booking.
    TestRequest::delete(&format!("/api/bookings/{booking_id}"))
        .bearer(&ada)
        .send(&service)
        .await
        .assert_status(StatusCode::FORBIDDEN);

    TestRequest::delete(&format!("/api/bookings/{booking_id}"))
        .bearer(&bob)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .assert_body_contains("Booking cancelled");

    let remaining: Vec<serde_json::Value> = TestRequest::get("/api/bookings")
        .bearer(&bob)
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    assert!(remaining.is_empty());
}

#[test_log::test(tokio::test)]
async fn cancelling_a_missing_booking_is_not_found() {
    let test_db = TestDb::new().await.expect("Failed to create test database");
    let service = create_db_test_service(&test_db);

    let (_user_id, token) = register_and_login(&service, "Ada", "ada@example.test", "p1").await;
    let id = uuid::Uuid::now_v7();

    TestRequest::delete(&format!("/api/bookings/{id}"))
        .bearer(&token)
        .send(&service)
        .await
        .assert_status(StatusCode::NOT_FOUND)
        .assert_body_contains("Booking not found");
}
