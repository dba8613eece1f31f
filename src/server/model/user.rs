//! Authenticated identity stored in the session.

use serde::{Deserialize, Serialize};
use serenity::model::user::User as DiscordUser;

use crate::model::user::UserDto;

/// Discord identity of the logged-in user.
///
/// Built from the `users/@me` profile after a successful OAuth exchange and stored
/// verbatim in the session until logout or expiry. No other copy exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Discord snowflake ID of the user
    pub id: String,
    /// Discord username
    pub username: String,
    /// Avatar hash, if the user has set one
    pub avatar: Option<String>,
}

impl SessionUser {
    /// Converts the Discord profile into the session identity record.
    ///
    /// # Arguments
    /// - `user` - Profile returned by Discord's `users/@me` endpoint
    ///
    /// # Returns
    /// - `SessionUser` - Identity with the ID, username and avatar hash
    pub fn from_discord(user: DiscordUser) -> Self {
        Self {
            id: user.id.get().to_string(),
            username: user.name,
            avatar: user.avatar.map(|hash| hash.to_string()),
        }
    }

    /// Converts the session identity to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            username: self.username,
            id: self.id,
            avatar: self.avatar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_discord_profile() {
        let profile: DiscordUser = serde_json::from_value(serde_json::json!({
            "id": "80351110224678912",
            "username": "nelly",
            "discriminator": "0",
            "global_name": "Nelly",
            "avatar": "8342729096ea3675442027381ff50dfe",
        }))
        .unwrap();

        let user = SessionUser::from_discord(profile);

        assert_eq!(user.id, "80351110224678912");
        assert_eq!(user.username, "nelly");
        assert_eq!(
            user.avatar.as_deref(),
            Some("8342729096ea3675442027381ff50dfe")
        );
    }

    #[test]
    fn from_discord_profile_without_avatar() {
        let profile: DiscordUser = serde_json::from_value(serde_json::json!({
            "id": "80351110224678912",
            "username": "nelly",
            "discriminator": "0",
            "avatar": null,
        }))
        .unwrap();

        let user = SessionUser::from_discord(profile);

        assert_eq!(user.avatar, None);
    }
}
