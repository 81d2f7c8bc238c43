//! Client platform type.

//---------------------------------------------------------------------------------------------------- Import
use presence_wire_label::wire_label_enum;

//---------------------------------------------------------------------------------------------------- Platform
wire_label_enum! {
    /// The client platform a presence update originates from.
    ///
    /// ```rust
    /// use presence_rpc_types::Platform;
    /// use serde_json::{from_str, to_string};
    ///
    /// assert_eq!(to_string(&Platform::Desktop).unwrap(), r#""desktop""#);
    /// assert_eq!(to_string(&Platform::Mobile).unwrap(),  r#""mobile""#);
    /// assert_eq!(to_string(&Platform::Web).unwrap(),     r#""web""#);
    ///
    /// assert_eq!(from_str::<Platform>(r#""web""#).unwrap(), Platform::Web);
    /// assert_eq!(from_str::<Platform>("null").unwrap(),     Platform::Desktop);
    /// ```
    pub enum Platform {
        /// The default.
        Desktop => "desktop",
        Mobile => "mobile",
        Web => "web",
    }
}
