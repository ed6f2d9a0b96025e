//! Booking service.
//!
//! Mutations follow the same ownership contract as listings: resolve
//! first, authorize second, mutate last. Availability is out of scope;
//! overlapping bookings for the same property are accepted.

use chrono::NaiveDate;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use roost_db::db::connection::DbConnection;
use roost_db::db::schema::{booking, property};
use roost_db::model::booking::{Booking, NewBooking};

use crate::auth::authorize::authorize_owner;
use crate::error::{ServiceError, ServiceResult};

/// Context for creating a booking.
#[derive(Debug, Clone, Copy)]
pub struct BookingRequest {
    pub property_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// ## Summary
/// Books a property for `owner_id` over the requested range.
///
/// The referenced property must exist; the booking's owner is the
/// requester who booked it, not the property's owner.
///
/// ## Side Effects
/// - Creates the booking record
///
/// ## Errors
/// Returns `NotFound` if the property does not exist and database
/// errors from the insert.
#[tracing::instrument(skip_all, fields(owner_id = %owner_id, property_id = %request.property_id))]
pub async fn create(
    conn: &mut DbConnection<'_>,
    owner_id: Uuid,
    request: BookingRequest,
) -> ServiceResult<Booking> {
    let property_exists = diesel::select(diesel::dsl::exists(
        property::table.find(request.property_id),
    ))
    .get_result::<bool>(conn)
    .await?;

    if !property_exists {
        return Err(ServiceError::NotFound("Property"));
    }

    let new_booking = NewBooking {
        id: Uuid::now_v7(),
        owner_id,
        property_id: request.property_id,
        start_date: request.start_date,
        end_date: request.end_date,
    };

    let created = diesel::insert_into(booking::table)
        .values(&new_booking)
        .returning(Booking::as_select())
        .get_result(conn)
        .await?;

    tracing::info!(booking_id = %created.id, "Created booking");

    Ok(created)
}

/// ## Summary
/// Lists the bookings made by `owner_id`, newest first.
///
/// ## Errors
/// Returns database errors from the query.
pub async fn list_for_owner(
    conn: &mut DbConnection<'_>,
    owner_id: Uuid,
) -> ServiceResult<Vec<Booking>> {
    let bookings = booking::table
        .filter(booking::owner_id.eq(owner_id))
        .order((booking::created_at.desc(), booking::id.desc()))
        .select(Booking::as_select())
        .load(conn)
        .await?;

    Ok(bookings)
}

/// ## Summary
/// Cancels a booking made by the requester.
///
/// ## Side Effects
/// - Deletes the booking record
///
/// ## Errors
/// Returns `NotFound` if the booking does not exist and `Forbidden` if
/// the requester did not make it.
#[tracing::instrument(skip_all, fields(booking_id = %id, requester_id = %requester_id))]
pub async fn cancel(
    conn: &mut DbConnection<'_>,
    id: Uuid,
    requester_id: Uuid,
) -> ServiceResult<()> {
    let existing: Booking = booking::table
        .find(id)
        .select(Booking::as_select())
        .first(conn)
        .await
        .optional()?
        .ok_or(ServiceError::NotFound("Booking"))?;

    authorize_owner(existing.owner_id, requester_id).require()?;

    diesel::delete(booking::table.find(id)).execute(conn).await?;

    tracing::info!(booking_id = %id, "Cancelled booking");

    Ok(())
}
