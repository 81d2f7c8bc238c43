//! Wire label string constants.

// The `wire_label_enum!` declaration sites can only take raw string
// literals, so the labels are re-typed there; the doctests on each
// enum pin these constants to the encoded forms.

//---------------------------------------------------------------------------------------------------- Status
/// Wire label of [`Status::Online`](crate::Status::Online).
pub const LABEL_STATUS_ONLINE: &str = "online";

/// Wire label of [`Status::Idle`](crate::Status::Idle).
pub const LABEL_STATUS_IDLE: &str = "idle";

/// Wire label of [`Status::DoNotDisturb`](crate::Status::DoNotDisturb).
pub const LABEL_STATUS_DND: &str = "dnd";

//---------------------------------------------------------------------------------------------------- Platform
/// Wire label of [`Platform::Desktop`](crate::Platform::Desktop).
pub const LABEL_PLATFORM_DESKTOP: &str = "desktop";

/// Wire label of [`Platform::Mobile`](crate::Platform::Mobile).
pub const LABEL_PLATFORM_MOBILE: &str = "mobile";

/// Wire label of [`Platform::Web`](crate::Platform::Web).
pub const LABEL_PLATFORM_WEB: &str = "web";

//---------------------------------------------------------------------------------------------------- PartyPrivacy
/// Wire label of [`PartyPrivacy::Private`](crate::PartyPrivacy::Private).
pub const LABEL_PARTY_PRIVATE: &str = "private";

/// Wire label of [`PartyPrivacy::Public`](crate::PartyPrivacy::Public).
pub const LABEL_PARTY_PUBLIC: &str = "public";
