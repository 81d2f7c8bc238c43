//! The enum <-> wire-label codec trait.

//---------------------------------------------------------------------------------------------------- Import
use crate::{entry::Entry, error::UnknownLabel};

//---------------------------------------------------------------------------------------------------- WireLabel
/// Bidirectional conversion between a closed enum and its wire-label strings.
///
/// Implemented by [`wire_label_enum!`](crate::wire_label_enum); the macro
/// generates [`TABLE`](Self::TABLE), [`name`](Self::name) and
/// [`label`](Self::label) as total, compile-time data, so none of the
/// provided methods can fail to find a variant.
///
/// # Contract
/// - [`encode`](Self::encode) is total and deterministic over all variants.
/// - [`decode`](Self::decode) is total over all inputs; a wire `null` or an
///   unrecognized token yields [`Default::default`] (the first-declared
///   variant), indistinguishable from an explicitly encoded default.
/// - Duplicate declared labels are unsupported: both decode scans run in
///   declaration order and the first match wins.
///
/// # Example
/// ```rust
/// use presence_wire_label::{wire_label_enum, WireLabel};
///
/// wire_label_enum! {
///     pub enum Status {
///         Online => "online",
///         Idle => "idle",
///         DoNotDisturb => "dnd",
///         Invisible,
///     }
/// }
///
/// // Declared labels win, unlabeled variants fall back to their name.
/// assert_eq!(Status::DoNotDisturb.encode(), "dnd");
/// assert_eq!(Status::Invisible.encode(), "Invisible");
///
/// // Labels match case-sensitively, names case-insensitively.
/// assert_eq!(Status::decode(Some("dnd")), Status::DoNotDisturb);
/// assert_eq!(Status::decode(Some("INVISIBLE")), Status::Invisible);
///
/// // Wire null and garbage both degrade to the default variant.
/// assert_eq!(Status::decode(None), Status::Online);
/// assert_eq!(Status::decode(Some("bogus")), Status::Online);
///
/// // The strict path surfaces the failure instead.
/// assert!(Status::decode_strict("bogus").is_err());
/// ```
pub trait WireLabel: Copy + Default + Sized + 'static {
    /// The label table: every variant in declaration order,
    /// paired with its intrinsic name and optional wire label.
    const TABLE: &'static [Entry<Self>];

    /// This variant's intrinsic name.
    fn name(self) -> &'static str;

    /// This variant's declared wire label, if any.
    fn label(self) -> Option<&'static str>;

    /// Encode this variant as its wire string.
    ///
    /// Returns the declared label if present and non-blank,
    /// otherwise the intrinsic variant name.
    #[inline]
    fn encode(self) -> &'static str {
        match self.label() {
            Some(label) if !label.trim().is_empty() => label,
            _ => self.name(),
        }
    }

    /// Decode a wire token, leniently.
    ///
    /// `None` is the wire's `null` and decodes to the default variant.
    /// An unrecognized token also decodes to the default variant; callers
    /// that need to observe the failure should use
    /// [`decode_strict`](Self::decode_strict).
    #[inline]
    fn decode(token: Option<&str>) -> Self {
        match token {
            Some(token) => Self::decode_strict(token).unwrap_or_default(),
            None => Self::default(),
        }
    }

    /// Decode a wire token, strictly.
    ///
    /// Scans declared labels first (case-sensitive, declaration order,
    /// first match wins), then falls back to matching intrinsic variant
    /// names ASCII-case-insensitively.
    ///
    /// # Errors
    /// Returns [`UnknownLabel`] carrying the token if nothing matched.
    fn decode_strict(token: &str) -> Result<Self, UnknownLabel> {
        for entry in Self::TABLE {
            if entry.label == Some(token) {
                return Ok(entry.variant);
            }
        }

        for entry in Self::TABLE {
            if entry.name.eq_ignore_ascii_case(token) {
                return Ok(entry.variant);
            }
        }

        Err(UnknownLabel(token.to_string()))
    }
}
