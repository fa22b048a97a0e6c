//! Session-related types.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use ay_group_core::AdminId;

/// Session-stored admin identity.
///
/// Minimal data stored in the session to identify the logged-in admin.
/// The display name is denormalized here so post authorship does not
/// need a database round-trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Admin's database ID.
    pub id: AdminId,
    /// Admin's display name.
    pub name: String,
}

/// Session keys for authentication data.
pub mod session_keys {
    /// Key for storing the current logged-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";
}
