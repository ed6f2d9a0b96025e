use salvo::{Depot, Request, Response, Router, http::StatusCode, writing::Json, handler};
use serde::Deserialize;

use crate::app::api::respond::{MessageResponse, parse_body, render_error, require_id_param};
use crate::db_handler::get_db_from_depot;
use crate::error::AppResult;
use roost_core::constants::BOOKINGS_ROUTE_COMPONENT;
use roost_db::model::booking::Booking;
use roost_service::auth::depot::get_user_id_from_depot;
use roost_service::booking::{self, BookingRequest};

/// ## Summary
/// Booking creation payload; `property` references the listing.
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub property: uuid::Uuid,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
}

/// ## Summary
/// POST /api/bookings - Book a listing for a date range
///
/// ## Side Effects
/// - Creates the booking record, owned by the requester
///
/// ## Errors
/// Returns HTTP 400 for a malformed body
/// Returns HTTP 401 without a valid bearer token
/// Returns HTTP 404 if the referenced listing does not exist
#[handler]
async fn create_booking(req: &mut Request, depot: &Depot, res: &mut Response) {
    match try_create_booking(req, depot).await {
        Ok(created) => {
            res.status_code(StatusCode::CREATED);
            res.render(Json(created));
        }
        Err(e) => render_error(res, &e),
    }
}

async fn try_create_booking(req: &mut Request, depot: &Depot) -> AppResult<Booking> {
    let requester_id = get_user_id_from_depot(depot)?;
    let body: CreateBookingRequest = parse_body(req).await?;

    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    let created = booking::create(
        &mut conn,
        requester_id,
        BookingRequest {
            property_id: body.property,
            start_date: body.start_date,
            end_date: body.end_date,
        },
    )
    .await?;

    Ok(created)
}

/// ## Summary
/// GET /api/bookings - The requester's bookings, newest first
///
/// ## Errors
/// Returns HTTP 401 without a valid bearer token
#[handler]
async fn list_bookings(depot: &Depot, res: &mut Response) {
    match try_list_bookings(depot).await {
        Ok(bookings) => res.render(Json(bookings)),
        Err(e) => render_error(res, &e),
    }
}

async fn try_list_bookings(depot: &Depot) -> AppResult<Vec<Booking>> {
    let requester_id = get_user_id_from_depot(depot)?;

    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    Ok(booking::list_for_owner(&mut conn, requester_id).await?)
}

/// ## Summary
/// DELETE /api/bookings/{id} - Cancel a booking
///
/// ## Side Effects
/// - Deletes the booking record
///
/// ## Errors
/// Returns HTTP 401 without a valid bearer token
/// Returns HTTP 403 if the requester did not make the booking
/// Returns HTTP 404 if no booking has this id
#[handler]
async fn cancel_booking(req: &Request, depot: &Depot, res: &mut Response) {
    match try_cancel_booking(req, depot).await {
        Ok(message) => res.render(Json(message)),
        Err(e) => render_error(res, &e),
    }
}

async fn try_cancel_booking(req: &Request, depot: &Depot) -> AppResult<MessageResponse> {
    let requester_id = get_user_id_from_depot(depot)?;
    let id = require_id_param(req, "Booking")?;

    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    booking::cancel(&mut conn, id, requester_id).await?;

    Ok(MessageResponse {
        msg: "Booking cancelled".to_string(),
    })
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(BOOKINGS_ROUTE_COMPONENT)
        .get(list_bookings)
        .post(create_booking)
        .push(Router::with_path("{id}").delete(cancel_booking))
}
