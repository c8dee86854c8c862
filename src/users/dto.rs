use serde::{Deserialize, Serialize};

/// Request body for create and update.
///
/// Absent or `null` fields decode to empty strings. A body `id` must be a
/// non-negative integer but is otherwise ignored; the record id always comes
/// from the store or the path.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserPayload {
    #[allow(dead_code)]
    pub id: Option<u64>,
    pub username: Option<String>,
    pub email: Option<String>,
}

impl UserPayload {
    pub fn into_fields(self) -> (String, String) {
        (
            self.username.unwrap_or_default(),
            self.email.unwrap_or_default(),
        )
    }
}

/// Response returned after a delete.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
}

impl Default for DeletedResponse {
    fn default() -> Self {
        Self {
            message: "User deleted",
        }
    }
}
