use salvo::http::form::FilePart;
use salvo::{Depot, Request, Response, Router, http::StatusCode, writing::Json, handler};
use serde::Deserialize;

use crate::app::api::respond::{MessageResponse, parse_body, render_error, require_id_param};
use crate::db_handler::get_db_from_depot;
use crate::error::{AppError, AppResult};
use roost_core::constants::PROPERTIES_ROUTE_COMPONENT;
use roost_db::model::property::{Property, PropertyChanges};
use roost_service::auth::depot::get_user_id_from_depot;
use roost_service::error::ServiceError;
use roost_service::property;
use roost_service::storage::get_image_store_from_depot;

/// ## Summary
/// Partial update payload; absent fields leave the column unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdatePropertyRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub location: Option<String>,
}

async fn require_form_field(req: &mut Request, field: &'static str) -> AppResult<String> {
    req.form::<String>(field)
        .await
        .ok_or_else(|| AppError::from(ServiceError::ValidationError(format!("{field} is required"))))
}

/// Uploads a multipart image part to the object store.
async fn upload_image(depot: &Depot, file: &FilePart) -> AppResult<String> {
    let store = get_image_store_from_depot(depot)?;

    let bytes = tokio::fs::read(file.path())
        .await
        .map_err(|e| ServiceError::StorageError(format!("Failed to read upload: {e}")))?;

    let content_type = file
        .content_type()
        .map_or_else(|| "application/octet-stream".to_string(), |m| m.to_string());

    let url = store.upload(&bytes, &content_type).await?;

    Ok(url)
}

/// ## Summary
/// GET /api/properties - Every listing, newest first
///
/// ## Errors
/// Returns HTTP 500 if database operations fail
#[handler]
async fn list_properties(depot: &Depot, res: &mut Response) {
    match try_list_properties(depot).await {
        Ok(listings) => res.render(Json(listings)),
        Err(e) => render_error(res, &e),
    }
}

async fn try_list_properties(depot: &Depot) -> AppResult<Vec<Property>> {
    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    Ok(property::list_all(&mut conn).await?)
}

/// ## Summary
/// GET /api/properties/my-properties - The requester's listings
///
/// ## Errors
/// Returns HTTP 401 without a valid bearer token
#[handler]
async fn my_properties(depot: &Depot, res: &mut Response) {
    match try_my_properties(depot).await {
        Ok(listings) => res.render(Json(listings)),
        Err(e) => render_error(res, &e),
    }
}

async fn try_my_properties(depot: &Depot) -> AppResult<Vec<Property>> {
    let requester_id = get_user_id_from_depot(depot)?;

    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    Ok(property::list_for_owner(&mut conn, requester_id).await?)
}

/// ## Summary
/// GET /api/properties/{id} - One listing
///
/// ## Errors
/// Returns HTTP 404 if no listing has this id
#[handler]
async fn get_property(req: &Request, depot: &Depot, res: &mut Response) {
    match try_get_property(req, depot).await {
        Ok(listing) => res.render(Json(listing)),
        Err(e) => render_error(res, &e),
    }
}

async fn try_get_property(req: &Request, depot: &Depot) -> AppResult<Property> {
    let id = require_id_param(req, "Property")?;

    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    Ok(property::get(&mut conn, id).await?)
}

/// ## Summary
/// POST /api/properties - Create a listing from a multipart form
///
/// Form fields: `title`, `description`, `price`, `location`, plus an
/// optional `image` file part. The image is pushed to the object store
/// and its public URL stored on the listing. The owner is stamped from
/// the verified requester.
///
/// ## Side Effects
/// - Uploads the image part, when present
/// - Creates the property record
///
/// ## Errors
/// Returns HTTP 400 for missing or empty fields
/// Returns HTTP 401 without a valid bearer token
/// Returns HTTP 500 if the upload or database operations fail
#[handler]
async fn create_property(req: &mut Request, depot: &Depot, res: &mut Response) {
    match try_create_property(req, depot).await {
        Ok(listing) => {
            res.status_code(StatusCode::CREATED);
            res.render(Json(listing));
        }
        Err(e) => render_error(res, &e),
    }
}

async fn try_create_property(req: &mut Request, depot: &Depot) -> AppResult<Property> {
    let requester_id = get_user_id_from_depot(depot)?;

    let title = require_form_field(req, "title").await?;
    let description = require_form_field(req, "description").await?;
    let location = require_form_field(req, "location").await?;
    let price: f64 = require_form_field(req, "price")
        .await?
        .trim()
        .parse()
        .map_err(|_e| ServiceError::ValidationError("price must be a number".to_string()))?;

    let image_url = match req.file("image").await {
        Some(file) => Some(upload_image(depot, file).await?),
        None => None,
    };

    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    let created = property::create(
        &mut conn,
        requester_id,
        &property::NewListing {
            title: &title,
            description: &description,
            price,
            location: &location,
            image_url: image_url.as_deref(),
        },
    )
    .await?;

    Ok(created)
}

/// ## Summary
/// PUT /api/properties/{id} - Partially update a listing
///
/// ## Errors
/// Returns HTTP 401 without a valid bearer token
/// Returns HTTP 403 if the requester does not own the listing
/// Returns HTTP 404 if no listing has this id
#[handler]
async fn update_property(req: &mut Request, depot: &Depot, res: &mut Response) {
    match try_update_property(req, depot).await {
        Ok(listing) => res.render(Json(listing)),
        Err(e) => render_error(res, &e),
    }
}

async fn try_update_property(req: &mut Request, depot: &Depot) -> AppResult<Property> {
    let requester_id = get_user_id_from_depot(depot)?;
    let id = require_id_param(req, "Property")?;
    let body: UpdatePropertyRequest = parse_body(req).await?;

    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    let changes = PropertyChanges {
        title: body.title,
        description: body.description,
        price: body.price,
        location: body.location,
    };

    Ok(property::update(&mut conn, id, requester_id, &changes).await?)
}

/// ## Summary
/// DELETE /api/properties/{id} - Remove a listing
///
/// ## Side Effects
/// - Deletes the property record and, via the store, its bookings
///
/// ## Errors
/// Returns HTTP 401 without a valid bearer token
/// Returns HTTP 403 if the requester does not own the listing
/// Returns HTTP 404 if no listing has this id
#[handler]
async fn delete_property(req: &Request, depot: &Depot, res: &mut Response) {
    match try_delete_property(req, depot).await {
        Ok(message) => res.render(Json(message)),
        Err(e) => render_error(res, &e),
    }
}

async fn try_delete_property(req: &Request, depot: &Depot) -> AppResult<MessageResponse> {
    let requester_id = get_user_id_from_depot(depot)?;
    let id = require_id_param(req, "Property")?;

    let provider = get_db_from_depot(depot)?;
    let mut conn = provider.get_connection().await?;

    property::delete(&mut conn, id, requester_id).await?;

    Ok(MessageResponse {
        msg: "Property removed".to_string(),
    })
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(PROPERTIES_ROUTE_COMPONENT)
        .get(list_properties)
        .post(create_property)
        .push(Router::with_path("my-properties").get(my_properties))
        .push(
            Router::with_path("{id}")
                .get(get_property)
                .put(update_property)
                .delete(delete_property),
        )
}
