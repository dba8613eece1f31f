use serde::{Deserialize, Serialize};

/// Public fields of the logged-in Discord identity, as returned by `GET /user`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserDto {
    pub username: String,
    pub id: String,
    /// Discord avatar hash, `null` when the user has no custom avatar.
    pub avatar: Option<String>,
}
