//! Typed request and response payloads for the Daily API.
//!
//! All payload types follow the caller-side camelCase JSON convention; the
//! client converts keys to the snake_case wire format on the way out and
//! back to camelCase on the way in.

use serde::{Deserialize, Serialize};

/// Who may join a room's meetings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    #[default]
    Public,
    Org,
    Private,
}

/// Where recordings are saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recording {
    Cloud,
    Local,
}

/// In-call UI language. `User` follows the browser's current language
/// setting when it is English or French.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Fr,
    User,
}

/// Top-level configuration of a domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainConfig {
    /// Whether provider branding displays in the in-call UI. Can only be
    /// set on plans that allow hiding the branding.
    pub hide_daily_branding: bool,
    /// Default language for the video call UI, for all calls. Overridable
    /// per room or per meeting token.
    pub lang: Option<Language>,
    /// URL the browser loads when a user leaves a meeting that opened in a
    /// separate tab. A `recent_call=<domain>/<room>` query parameter is
    /// appended.
    pub redirect_on_meeting_exit: String,
}

/// Domain name plus its configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainResponse {
    pub domain_name: String,
    pub config: DomainConfig,
}

/// Request payload for creating a room.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    /// Room name. The API generates one when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub privacy: Privacy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<RoomConfig>,
}

/// A room and its configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub name: String,
    /// Controls who joins a meeting.
    pub privacy: Privacy,
    pub config: RoomConfig,
}

/// Per-room meeting configuration.
///
/// `nbf` and `exp` are unix timestamps in seconds; users cannot join a
/// meeting in the room before `nbf` or after `exp`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// How many people are allowed in the room at the same time. Default
    /// and maximum depend on the domain's plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
    /// Skip the initial meeting join page and go straight into the call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autojoin: Option<bool>,
    /// Let users without access "knock" to request entry to a non-public
    /// room.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_knocking: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_screenshare: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_chat: Option<bool>,
    /// Always start with camera off when a user joins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_video_off: Option<bool>,
    /// Always start with microphone muted when a user joins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_audio_off: Option<bool>,
    /// Only meeting owners may turn on camera, unmute, and screenshare.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_only_broadcast: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_recording: Option<Recording>,
    /// End an ongoing meeting at room `exp` time by kicking everyone out.
    /// Meeting token eject properties override this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eject_at_room_exp: Option<bool>,
    /// Eject a participant this many seconds after joining. Meeting token
    /// eject properties override this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eject_after_elapsed: Option<u64>,
    /// Default language for the video call UI, for this room.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<Language>,
}

/// Response from deleting a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub deleted: bool,
    pub name: String,
}

/// Properties of a meeting token.
///
/// `nbf` and `exp` are unix timestamps in seconds bounding the token's
/// validity. Always set `room_name` when the token controls access to a
/// meeting; without it the token is valid for every room in the domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingToken {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
    /// The user has meeting owner privileges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_owner: Option<bool>,
    /// Display name in the meeting, also saved in the meeting events log.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Session user id saved in the meeting events log. Defaults to the
    /// client's randomly generated session id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_screenshare: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_video_off: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_audio_off: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_recording: Option<Recording>,
    /// Start cloud recording when the user joins the room.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cloud_recording: Option<bool>,
    /// Close the browser tab when the user leaves the meeting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_tab_on_exit: Option<bool>,
    /// URL the browser loads when the user leaves the meeting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_on_meeting_exit: Option<String>,
    /// Kick this user out of the meeting when the token expires. Overrides
    /// the room's eject properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eject_at_token_exp: Option<bool>,
    /// Kick this user out this many seconds after joining. Overrides the
    /// room's eject properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eject_after_elapsed: Option<u64>,
    /// Language for the video call UI, for this user's session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<Language>,
}

/// Response from creating a meeting token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingTokenResponse {
    pub token: String,
}

/// Cursor pagination parameters for list endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
}

/// One page of results from a list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub total_count: u64,
    pub data: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_room_config_serializes_camel_case() {
        let config = RoomConfig {
            max_participants: Some(8),
            start_video_off: Some(true),
            enable_recording: Some(Recording::Cloud),
            ..Default::default()
        };

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(
            value,
            json!({
                "maxParticipants": 8,
                "startVideoOff": true,
                "enableRecording": "cloud"
            })
        );
    }

    #[test]
    fn test_unset_options_are_skipped() {
        let request = CreateRoomRequest {
            name: None,
            privacy: Privacy::Org,
            config: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"privacy": "org"}));
    }

    #[test]
    fn test_domain_config_lang_serializes_null() {
        let config = DomainConfig {
            hide_daily_branding: false,
            lang: None,
            redirect_on_meeting_exit: "https://example.com/bye".to_string(),
        };

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(
            value,
            json!({
                "hideDailyBranding": false,
                "lang": null,
                "redirectOnMeetingExit": "https://example.com/bye"
            })
        );
    }

    #[test]
    fn test_meeting_token_round_trips() {
        let token = MeetingToken {
            room_name: Some("standup".to_string()),
            is_owner: Some(true),
            user_name: Some("Thor".to_string()),
            lang: Some(Language::Fr),
            ..Default::default()
        };

        let value = serde_json::to_value(&token).unwrap();
        assert_eq!(
            value,
            json!({
                "roomName": "standup",
                "isOwner": true,
                "userName": "Thor",
                "lang": "fr"
            })
        );

        let parsed: MeetingToken = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.room_name.as_deref(), Some("standup"));
        assert_eq!(parsed.is_owner, Some(true));
        assert_eq!(parsed.lang, Some(Language::Fr));
    }

    #[test]
    fn test_paginated_response_deserializes() {
        let page: PaginatedResponse<DeleteResponse> = serde_json::from_value(json!({
            "totalCount": 2,
            "data": [
                {"deleted": true, "name": "a"},
                {"deleted": true, "name": "b"}
            ]
        }))
        .unwrap();

        assert_eq!(page.total_count, 2);
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[1].name, "b");
    }
}
