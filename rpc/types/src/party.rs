//! Party privacy type.

//---------------------------------------------------------------------------------------------------- Import
use presence_wire_label::wire_label_enum;

//---------------------------------------------------------------------------------------------------- PartyPrivacy
wire_label_enum! {
    /// Whether a presence party is joinable by anyone or invite-only.
    ///
    /// ```rust
    /// use presence_rpc_types::PartyPrivacy;
    /// use serde_json::{from_str, to_string};
    ///
    /// assert_eq!(to_string(&PartyPrivacy::Private).unwrap(), r#""private""#);
    /// assert_eq!(to_string(&PartyPrivacy::Public).unwrap(),  r#""public""#);
    ///
    /// assert_eq!(from_str::<PartyPrivacy>(r#""public""#).unwrap(), PartyPrivacy::Public);
    /// assert_eq!(from_str::<PartyPrivacy>("null").unwrap(),        PartyPrivacy::Private);
    /// ```
    pub enum PartyPrivacy {
        /// Invite-only; the default.
        Private => "private",
        Public => "public",
    }
}
