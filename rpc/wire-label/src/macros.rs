//! Macros.

//---------------------------------------------------------------------------------------------------- wire_label_enum
/// Declare a wire enum and generate its whole codec surface.
///
/// Each variant may declare a wire label with `=> "label"`; variants
/// without one encode as their intrinsic name. The first variant is the
/// enum's [`Default`], i.e. the value a wire `null` or an unrecognized
/// token decodes to.
///
/// The generated enum automatically implements:
/// - `Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash`
/// - [`WireLabel`](crate::WireLabel), with the label table as `const` data
/// - [`AsRef`]`<str>` and [`Display`](std::fmt::Display) via
///   [`encode`](crate::WireLabel::encode)
/// - [`FromStr`](std::str::FromStr) via the strict decoder, with
///   [`UnknownLabel`](crate::UnknownLabel) as the error
/// - [`serde::Serialize`] and [`serde::Deserialize`], emitting the encoded
///   label as a JSON string token and accepting a string or `null`
///
/// # Example
/// ```rust
/// use presence_wire_label::{wire_label_enum, WireLabel};
///
/// wire_label_enum! {
///     /// Reply to a join request.
///     pub enum Reply {
///         /// Deny the request.
///         No => "no",
///         /// Accept the request.
///         Yes => "yes",
///         Ignore,
///     }
/// }
///
/// assert_eq!(Reply::default(), Reply::No);
/// assert_eq!(Reply::Yes.to_string(), "yes");
///
/// // `"YES"` misses the (case-sensitive) label scan but
/// // hits the case-insensitive name fallback.
/// assert_eq!("YES".parse::<Reply>(), Ok(Reply::Yes));
/// assert_eq!("ignore".parse::<Reply>(), Ok(Reply::Ignore));
/// assert_eq!(
///     "maybe".parse::<Reply>(),
///     Err(presence_wire_label::UnknownLabel("maybe".to_string())),
/// );
/// ```
#[macro_export]
macro_rules! wire_label_enum {
    (
        // Any doc comments, derives, etc.
        $( #[$enum_attr:meta] )*
        $vis:vis enum $name:ident {
            // The first variant, separated out so it can be
            // marked as the enum's `#[default]`.
            $( #[$first_attr:meta] )*
            $first:ident $(=> $first_label:literal)?,

            // And the rest.
            $(
                $( #[$variant_attr:meta] )*
                $variant:ident $(=> $label:literal)?,
            )*
        }
    ) => {
        $( #[$enum_attr] )*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $( #[$first_attr] )*
            #[default]
            $first,
            $(
                $( #[$variant_attr] )*
                $variant,
            )*
        }

        impl $crate::WireLabel for $name {
            const TABLE: &'static [$crate::Entry<Self>] = &[
                $crate::Entry {
                    variant: Self::$first,
                    name: stringify!($first),
                    label: $crate::wire_label_enum!(@label $($first_label)?),
                },
                $(
                    $crate::Entry {
                        variant: Self::$variant,
                        name: stringify!($variant),
                        label: $crate::wire_label_enum!(@label $($label)?),
                    },
                )*
            ];

            fn name(self) -> &'static str {
                match self {
                    Self::$first => stringify!($first),
                    $( Self::$variant => stringify!($variant), )*
                }
            }

            fn label(self) -> ::std::option::Option<&'static str> {
                match self {
                    Self::$first => $crate::wire_label_enum!(@label $($first_label)?),
                    $( Self::$variant => $crate::wire_label_enum!(@label $($label)?), )*
                }
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                $crate::WireLabel::encode(*self)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::WireLabel::encode(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::UnknownLabel;

            fn from_str(s: &str) -> ::std::result::Result<Self, $crate::UnknownLabel> {
                $crate::WireLabel::decode_strict(s)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                s: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                s.serialize_str($crate::WireLabel::encode(*self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                d: D,
            ) -> ::std::result::Result<Self, D::Error> {
                /// Accepts a wire label string or `null`.
                struct Visitor;

                impl ::serde::de::Visitor<'_> for Visitor {
                    type Value = $name;

                    fn expecting(
                        &self,
                        f: &mut ::std::fmt::Formatter<'_>,
                    ) -> ::std::fmt::Result {
                        f.write_str("a wire label string or null")
                    }

                    fn visit_str<E: ::serde::de::Error>(
                        self,
                        v: &str,
                    ) -> ::std::result::Result<Self::Value, E> {
                        ::std::result::Result::Ok($crate::WireLabel::decode(
                            ::std::option::Option::Some(v),
                        ))
                    }

                    fn visit_unit<E: ::serde::de::Error>(
                        self,
                    ) -> ::std::result::Result<Self::Value, E> {
                        ::std::result::Result::Ok($crate::WireLabel::decode(
                            ::std::option::Option::None,
                        ))
                    }

                    fn visit_none<E: ::serde::de::Error>(
                        self,
                    ) -> ::std::result::Result<Self::Value, E> {
                        self.visit_unit()
                    }
                }

                d.deserialize_any(Visitor)
            }
        }
    };

    //------------------------------------------------------------------------------
    // Maps an optional label literal to `Option<&'static str>`.
    //
    // Internal; only called by the branch above.
    (@label $label:literal) => { ::std::option::Option::Some($label) };
    (@label) => { ::std::option::Option::None };
}
