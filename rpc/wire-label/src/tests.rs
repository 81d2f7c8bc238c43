//! Tests and utilities.

//---------------------------------------------------------------------------------------------------- Use
use pretty_assertions::assert_eq;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{from_str, to_string};

use crate::{wire_label_enum, UnknownLabel, WireLabel};

//---------------------------------------------------------------------------------------------------- Free functions
/// Assert serialization output matches an expected JSON string.
fn assert_ser_string<T>(t: &T, expected_string: &str)
where
    T: Serialize + std::fmt::Debug + Clone + PartialEq,
{
    let string = to_string(t).unwrap();
    assert_eq!(string, expected_string);
}

/// Assert an input JSON string deserializes to an expected type `T`.
fn assert_de<T>(json: &'static str, expected: T)
where
    T: DeserializeOwned + std::fmt::Debug + Clone + PartialEq,
{
    let t = from_str::<T>(json).unwrap();
    assert_eq!(t, expected);
}

//---------------------------------------------------------------------------------------------------- Types
wire_label_enum! {
    /// User presence status.
    enum Status {
        Online => "online",
        Idle => "idle",
        DoNotDisturb => "dnd",
        Invisible,
    }
}

wire_label_enum! {
    /// Two variants deliberately sharing a label.
    enum Dup {
        First => "same",
        Second => "same",
    }
}

wire_label_enum! {
    /// A blank label, which encoding must treat as absent.
    enum Blank {
        Normal => "normal",
        Spaces => "   ",
    }
}

//---------------------------------------------------------------------------------------------------- TESTS
/// Declared labels win on encode; unlabeled variants use their name.
#[test]
fn encode() {
    assert_eq!(Status::Online.encode(), "online");
    assert_eq!(Status::Idle.encode(), "idle");
    assert_eq!(Status::DoNotDisturb.encode(), "dnd");
    assert_eq!(Status::Invisible.encode(), "Invisible");
}

/// The table holds every variant, in declaration order.
#[test]
fn table() {
    let names: Vec<&str> = Status::TABLE.iter().map(|e| e.name).collect();
    assert_eq!(names, ["Online", "Idle", "DoNotDisturb", "Invisible"]);

    let labels: Vec<Option<&str>> = Status::TABLE.iter().map(|e| e.label).collect();
    assert_eq!(
        labels,
        [Some("online"), Some("idle"), Some("dnd"), None],
    );

    for entry in Status::TABLE {
        assert_eq!(entry.variant.name(), entry.name);
        assert_eq!(entry.variant.label(), entry.label);
    }
}

/// Encoded forms are stable through a decode/encode round-trip.
#[test]
fn round_trip() {
    for entry in Status::TABLE {
        let encoded = entry.variant.encode();
        assert_eq!(Status::decode(Some(encoded)).encode(), encoded);
        assert_eq!(Status::decode(Some(encoded)), entry.variant);
    }

    // With duplicate labels the variant itself is not recoverable,
    // but the encoded string still is.
    for entry in Dup::TABLE {
        let encoded = entry.variant.encode();
        assert_eq!(Dup::decode(Some(encoded)).encode(), encoded);
    }
}

/// A wire `null` decodes to the default (first-declared) variant.
#[test]
fn decode_null() {
    assert_eq!(Status::decode(None), Status::Online);
    assert_eq!(Status::default(), Status::Online);
}

/// An unknown token decodes to the default variant, silently.
#[test]
fn decode_unknown() {
    assert_eq!(Status::decode(Some("totally-unknown-token")), Status::Online);
    assert_eq!(Status::decode(Some("")), Status::Online);
}

/// Labels are case-sensitive; names are not.
#[test]
fn decode_case() {
    // `"DND"` misses the label scan and `"Dnd"` is no variant name,
    // so this falls through to the default.
    assert_eq!(Status::decode(Some("DND")), Status::Online);

    // Name fallback is ASCII-case-insensitive.
    assert_eq!(Status::decode(Some("INVISIBLE")), Status::Invisible);
    assert_eq!(Status::decode(Some("invisible")), Status::Invisible);
    assert_eq!(Status::decode(Some("donotdisturb")), Status::DoNotDisturb);
}

/// Duplicate labels resolve to the first declared variant.
#[test]
fn duplicate_label_first_wins() {
    assert_eq!(Dup::decode(Some("same")), Dup::First);
    assert_eq!(Dup::decode_strict("same"), Ok(Dup::First));
    assert_eq!(Dup::Second.encode(), "same");
}

/// A blank declared label is ignored on encode.
#[test]
fn blank_label() {
    assert_eq!(Blank::Spaces.encode(), "Spaces");
    assert_eq!(Blank::Spaces.label(), Some("   "));
    assert_eq!(Blank::Normal.encode(), "normal");
}

/// The strict decoder surfaces unknown tokens instead of absorbing them.
#[test]
fn decode_strict() {
    assert_eq!(Status::decode_strict("dnd"), Ok(Status::DoNotDisturb));
    assert_eq!(Status::decode_strict("Invisible"), Ok(Status::Invisible));
    assert_eq!(
        Status::decode_strict("bogus"),
        Err(UnknownLabel("bogus".to_string())),
    );
    assert_eq!(
        Status::decode_strict("bogus").unwrap_err().to_string(),
        "unknown wire label: `bogus`",
    );
}

/// `FromStr`/`Display`/`AsRef` all go through the codec.
#[test]
fn string_traits() {
    assert_eq!("dnd".parse::<Status>(), Ok(Status::DoNotDisturb));
    assert_eq!("idle".parse::<Status>(), Ok(Status::Idle));
    assert!("bogus".parse::<Status>().is_err());

    assert_eq!(Status::DoNotDisturb.to_string(), "dnd");
    assert_eq!(Status::Invisible.to_string(), "Invisible");
    assert_eq!(Status::Idle.as_ref(), "idle");
}

/// (De)serialization emits/accepts the encoded label as a JSON string.
#[test]
fn serde() {
    assert_ser_string(&Status::Online, r#""online""#);
    assert_ser_string(&Status::DoNotDisturb, r#""dnd""#);
    assert_ser_string(&Status::Invisible, r#""Invisible""#);

    assert_de(r#""dnd""#, Status::DoNotDisturb);
    assert_de(r#""INVISIBLE""#, Status::Invisible);

    // JSON null and unknown tokens both degrade to the default.
    assert_de("null", Status::Online);
    assert_de(r#""bogus""#, Status::Online);
}
