#![doc = include_str!("../README.md")]

mod constants;
mod party;
mod platform;
mod presence;
mod status;

pub use constants::{
    LABEL_PARTY_PRIVATE, LABEL_PARTY_PUBLIC, LABEL_PLATFORM_DESKTOP, LABEL_PLATFORM_MOBILE,
    LABEL_PLATFORM_WEB, LABEL_STATUS_DND, LABEL_STATUS_IDLE, LABEL_STATUS_ONLINE,
};
pub use party::PartyPrivacy;
pub use platform::Platform;
pub use presence::Presence;
pub use status::Status;
