//! Rich presence payload type.

//---------------------------------------------------------------------------------------------------- Import
use serde::{Deserialize, Serialize};

use crate::{PartyPrivacy, Platform, Status};

//---------------------------------------------------------------------------------------------------- Presence
/// A rich presence update as it crosses the JSON boundary.
///
/// The enum fields go through the wire-label codec: they serialize as
/// their label strings and deserialize leniently, so an absent field, a
/// JSON `null`, or an unrecognized token all land on the default variant
/// without failing the whole payload.
///
/// ```rust
/// use presence_rpc_types::{PartyPrivacy, Platform, Presence, Status};
/// use serde_json::{from_str, to_string};
///
/// let presence = Presence {
///     status: Status::DoNotDisturb,
///     platform: Platform::Desktop,
///     party_privacy: PartyPrivacy::Public,
///     details: Some("In the menus".to_string()),
///     since: Some(1_693_000_000),
/// };
///
/// assert_eq!(
///     to_string(&presence).unwrap(),
///     r#"{"status":"dnd","platform":"desktop","party_privacy":"public","details":"In the menus","since":1693000000}"#,
/// );
///
/// // Absent enum fields take the zero variant, exactly like wire null.
/// let presence = from_str::<Presence>("{}").unwrap();
/// assert_eq!(presence, Presence::default());
/// assert_eq!(presence.status, Status::Online);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presence {
    /// User presence status.
    #[serde(default)]
    pub status: Status,

    /// Originating client platform.
    #[serde(default)]
    pub platform: Platform,

    /// Party privacy.
    #[serde(default)]
    pub party_privacy: PartyPrivacy,

    /// Free-form "what the player is doing" line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Unix timestamp (seconds) the current activity started at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<u64>,
}
