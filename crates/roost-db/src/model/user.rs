use diesel::{pg::Pg, prelude::*};

use crate::db::schema;

/// A registered account.
///
/// Not `Serialize`: `password_hash` must never reach a response body, so
/// handlers build their own payloads from the public fields instead of
/// serializing this struct.
#[derive(Debug, Clone, PartialEq, Eq, Identifiable, Queryable, Selectable)]
#[diesel(table_name = schema::user)]
#[diesel(check_for_backend(Pg))]
pub struct User {
    pub id: uuid::Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::user)]
pub struct NewUser<'a> {
    pub id: uuid::Uuid,
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}
