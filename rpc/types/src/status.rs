//! User presence status type.

//---------------------------------------------------------------------------------------------------- Import
use presence_wire_label::wire_label_enum;

//---------------------------------------------------------------------------------------------------- Status
wire_label_enum! {
    /// User presence status.
    ///
    /// This is the `status` string field reported alongside a rich
    /// presence update. Note that [`Status::Invisible`] carries no wire
    /// label and encodes as its variant name.
    ///
    /// ## Serialization and string formatting
    /// ```rust
    /// use presence_rpc_types::{
    ///     Status, LABEL_STATUS_DND, LABEL_STATUS_IDLE, LABEL_STATUS_ONLINE,
    /// };
    /// use presence_wire_label::WireLabel;
    /// use serde_json::{from_str, to_string};
    ///
    /// assert_eq!(to_string(&Status::Online).unwrap(),       r#""online""#);
    /// assert_eq!(to_string(&Status::Idle).unwrap(),         r#""idle""#);
    /// assert_eq!(to_string(&Status::DoNotDisturb).unwrap(), r#""dnd""#);
    /// assert_eq!(to_string(&Status::Invisible).unwrap(),    r#""Invisible""#);
    ///
    /// assert_eq!(from_str::<Status>(r#""online""#).unwrap(),    Status::Online);
    /// assert_eq!(from_str::<Status>(r#""idle""#).unwrap(),      Status::Idle);
    /// assert_eq!(from_str::<Status>(r#""dnd""#).unwrap(),       Status::DoNotDisturb);
    /// assert_eq!(from_str::<Status>(r#""Invisible""#).unwrap(), Status::Invisible);
    /// assert_eq!(from_str::<Status>(r#""INVISIBLE""#).unwrap(), Status::Invisible);
    ///
    /// // Unknown tokens and `null` degrade to the default.
    /// assert_eq!(from_str::<Status>(r#""bogus""#).unwrap(), Status::Online);
    /// assert_eq!(from_str::<Status>("null").unwrap(),       Status::Online);
    ///
    /// assert_eq!(Status::Online.encode(),       LABEL_STATUS_ONLINE);
    /// assert_eq!(Status::Idle.encode(),         LABEL_STATUS_IDLE);
    /// assert_eq!(Status::DoNotDisturb.encode(), LABEL_STATUS_DND);
    ///
    /// assert_eq!(format!("{}", Status::DoNotDisturb),   "dnd");
    /// assert_eq!(format!("{:?}", Status::DoNotDisturb), "DoNotDisturb");
    /// ```
    pub enum Status {
        /// Online and active; the default.
        Online => "online",
        /// Away from the client.
        Idle => "idle",
        /// Do not disturb; notifications suppressed.
        DoNotDisturb => "dnd",
        /// Online but shown as offline. No wire label.
        Invisible,
    }
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use presence_wire_label::WireLabel;

    use super::*;
    use crate::constants::{LABEL_STATUS_DND, LABEL_STATUS_IDLE, LABEL_STATUS_ONLINE};

    /// The declared labels match the crate constants.
    #[test]
    fn labels_match_constants() {
        assert_eq!(Status::Online.label(), Some(LABEL_STATUS_ONLINE));
        assert_eq!(Status::Idle.label(), Some(LABEL_STATUS_IDLE));
        assert_eq!(Status::DoNotDisturb.label(), Some(LABEL_STATUS_DND));
        assert_eq!(Status::Invisible.label(), None);
    }

    /// `Online` is the zero variant.
    #[test]
    fn default() {
        assert_eq!(Status::default(), Status::Online);
        assert_eq!(Status::decode(None), Status::Online);
    }
}
