use diesel::{pg::Pg, prelude::*};
use serde::Serialize;

use crate::db::schema;

#[derive(Debug, Clone, PartialEq, Identifiable, Queryable, Selectable, Serialize)]
#[diesel(table_name = schema::property)]
#[diesel(check_for_backend(Pg))]
pub struct Property {
    pub id: uuid::Uuid,
    pub owner_id: uuid::Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub location: String,
    pub image_url: Option<String>,
    pub date_posted: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::property)]
pub struct NewProperty<'a> {
    pub id: uuid::Uuid,
    pub owner_id: uuid::Uuid,
    pub title: &'a str,
    pub description: &'a str,
    pub price: f64,
    pub location: &'a str,
    pub image_url: Option<&'a str>,
}

/// Partial update for a property. `None` fields are left unchanged.
///
/// Owner and posting date are deliberately absent: neither is updatable
/// after creation.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = schema::property)]
pub struct PropertyChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub location: Option<String>,
}

impl PropertyChanges {
    /// True when no field is set; diesel rejects an empty changeset, so
    /// callers skip the update entirely in that case.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.location.is_none()
    }
}
