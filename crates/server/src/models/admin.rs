//! Admin domain model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use ay_group_core::{AdminId, Email};

/// An admin identity.
///
/// The password hash lives in the database and the auth service only;
/// it is never part of this model.
#[derive(Debug, Clone)]
pub struct Admin {
    pub id: AdminId,
    pub email: Email,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Public-safe representation of an admin (login response payload).
#[derive(Debug, Clone, Serialize)]
pub struct AdminResponse {
    pub id: AdminId,
    pub email: Email,
    pub name: String,
}

impl From<&Admin> for AdminResponse {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id,
            email: admin.email.clone(),
            name: admin.name.clone(),
        }
    }
}
