//! Strict decode errors.

//---------------------------------------------------------------------------------------------------- Import
use thiserror::Error;

//---------------------------------------------------------------------------------------------------- UnknownLabel
/// A wire token that matched no declared label and no variant name.
///
/// Only the strict decode path ([`WireLabel::decode_strict`] and the
/// generated [`FromStr`] impls) produces this; the lenient
/// [`WireLabel::decode`] absorbs unknown tokens into the default variant.
///
/// [`WireLabel::decode_strict`]: crate::WireLabel::decode_strict
/// [`WireLabel::decode`]: crate::WireLabel::decode
/// [`FromStr`]: std::str::FromStr
///
/// ```rust
/// use presence_wire_label::UnknownLabel;
///
/// let err = UnknownLabel("bogus".to_string());
/// assert_eq!(err.to_string(), "unknown wire label: `bogus`");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown wire label: `{0}`")]
pub struct UnknownLabel(pub String);
