//! Listing service.
//!
//! Reads are public. Mutations follow the ownership contract: resolve
//! the row first (absent is `NotFound`, the authorizer is never asked
//! about a row that does not exist), check ownership second, mutate
//! last.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use roost_db::db::connection::DbConnection;
use roost_db::db::schema::property;
use roost_db::model::property::{NewProperty, Property, PropertyChanges};

use crate::auth::authorize::authorize_owner;
use crate::error::{ServiceError, ServiceResult};

/// Context for creating a listing.
pub struct NewListing<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub price: f64,
    pub location: &'a str,
    /// Already uploaded to the object store; stored verbatim.
    pub image_url: Option<&'a str>,
}

fn validate(listing: &NewListing<'_>) -> ServiceResult<()> {
    if listing.title.trim().is_empty() {
        return Err(ServiceError::ValidationError(
            "title must not be empty".to_string(),
        ));
    }
    if listing.description.trim().is_empty() {
        return Err(ServiceError::ValidationError(
            "description must not be empty".to_string(),
        ));
    }
    if listing.location.trim().is_empty() {
        return Err(ServiceError::ValidationError(
            "location must not be empty".to_string(),
        ));
    }
    if !listing.price.is_finite() {
        return Err(ServiceError::ValidationError(
            "price must be a number".to_string(),
        ));
    }
    Ok(())
}

/// ## Summary
/// Creates a listing owned by `owner_id`.
///
/// The owner is stamped from the verified requester; nothing in the
/// listing input can set it.
///
/// ## Side Effects
/// - Creates the property record
///
/// ## Errors
/// Returns `ValidationError` for empty fields and database errors from
/// the insert.
#[tracing::instrument(skip_all, fields(owner_id = %owner_id))]
pub async fn create(
    conn: &mut DbConnection<'_>,
    owner_id: Uuid,
    listing: &NewListing<'_>,
) -> ServiceResult<Property> {
    validate(listing)?;

    let new_property = NewProperty {
        id: Uuid::now_v7(),
        owner_id,
        title: listing.title,
        description: listing.description,
        price: listing.price,
        location: listing.location,
        image_url: listing.image_url,
    };

    let created = diesel::insert_into(property::table)
        .values(&new_property)
        .returning(Property::as_select())
        .get_result(conn)
        .await?;

    tracing::info!(property_id = %created.id, "Created listing");

    Ok(created)
}

/// ## Summary
/// Lists every property, newest first.
///
/// ## Errors
/// Returns database errors from the query.
pub async fn list_all(conn: &mut DbConnection<'_>) -> ServiceResult<Vec<Property>> {
    let listings = property::table
        .order((property::date_posted.desc(), property::id.desc()))
        .select(Property::as_select())
        .load(conn)
        .await?;

    Ok(listings)
}

/// ## Summary
/// Lists the properties owned by `owner_id`, newest first.
///
/// ## Errors
/// Returns database errors from the query.
pub async fn list_for_owner(
    conn: &mut DbConnection<'_>,
    owner_id: Uuid,
) -> ServiceResult<Vec<Property>> {
    let listings = property::table
        .filter(property::owner_id.eq(owner_id))
        .order((property::date_posted.desc(), property::id.desc()))
        .select(Property::as_select())
        .load(conn)
        .await?;

    Ok(listings)
}

/// ## Summary
/// Fetches a single property by id.
///
/// ## Errors
/// Returns `NotFound` if no property has this id.
pub async fn get(conn: &mut DbConnection<'_>, id: Uuid) -> ServiceResult<Property> {
    property::table
        .find(id)
        .select(Property::as_select())
        .first(conn)
        .await
        .optional()?
        .ok_or(ServiceError::NotFound("Property"))
}

/// ## Summary
/// Applies a partial update to a property owned by the requester.
///
/// Fields left `None` keep their stored value. An all-`None` changeset
/// is a no-op that returns the current row.
///
/// ## Side Effects
/// - Updates the property record
///
/// ## Errors
/// Returns `NotFound` if the property does not exist and `Forbidden`
/// if the requester does not own it.
#[tracing::instrument(skip_all, fields(property_id = %id, requester_id = %requester_id))]
pub async fn update(
    conn: &mut DbConnection<'_>,
    id: Uuid,
    requester_id: Uuid,
    changes: &PropertyChanges,
) -> ServiceResult<Property> {
    let existing = get(conn, id).await?;
    authorize_owner(existing.owner_id, requester_id).require()?;

    if changes.is_empty() {
        return Ok(existing);
    }

    let updated = diesel::update(property::table.find(id))
        .set(changes)
        .returning(Property::as_select())
        .get_result(conn)
        .await?;

    tracing::info!(property_id = %updated.id, "Updated listing");

    Ok(updated)
}

/// ## Summary
/// Deletes a property owned by the requester.
///
/// Bookings referencing the property go with it; the foreign key
/// cascades at the store level.
///
/// ## Side Effects
/// - Deletes the property record and its bookings
///
/// ## Errors
/// Returns `NotFound` if the property does not exist and `Forbidden`
/// if the requester does not own it.
#[tracing::instrument(skip_all, fields(property_id = %id, requester_id = %requester_id))]
pub async fn delete(
    conn: &mut DbConnection<'_>,
    id: Uuid,
    requester_id: Uuid,
) -> ServiceResult<()> {
    let existing = get(conn, id).await?;
    authorize_owner(existing.owner_id, requester_id).require()?;

    diesel::delete(property::table.find(id)).execute(conn).await?;

    tracing::info!(property_id = %id, "Deleted listing");

    Ok(())
}
