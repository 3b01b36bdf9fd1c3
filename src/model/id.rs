//! Identity generation for design entities.

use uuid::Uuid;

/// Id used for transfer records that arrive without one.
pub const NIL_ID: &str = "00000000-0000-0000-0000-000000000000";

/// Generate a fresh, globally unique entity id.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
