use diesel::{pg::Pg, prelude::*};
use serde::Serialize;

use crate::db::schema;

#[derive(Debug, Clone, PartialEq, Eq, Identifiable, Queryable, Selectable, Serialize)]
#[diesel(table_name = schema::booking)]
#[diesel(check_for_backend(Pg))]
pub struct Booking {
    pub id: uuid::Uuid,
    pub owner_id: uuid::Uuid,
    pub property_id: uuid::Uuid,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::booking)]
pub struct NewBooking {
    pub id: uuid::Uuid,
    pub owner_id: uuid::Uuid,
    pub property_id: uuid::Uuid,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
}
